//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Create a word creation request body with an explicit definition so the
/// route never calls the definition service.
pub fn create_word_request(text: &str, definition: &str, examples: &[&str]) -> serde_json::Value {
    json!({
        "text": text,
        "definition": definition,
        "examples": examples,
    })
}

/// Create a word creation request without a definition (exercises the
/// definition-service path).
pub fn create_word_request_without_definition(text: &str) -> serde_json::Value {
    json!({ "text": text })
}

/// Create a list transition request body.
pub fn transition_request(action: &str) -> serde_json::Value {
    json!({ "action": action })
}

/// Create a quiz check request body.
pub fn quiz_check_request(word: &str, answer: Option<&str>, input: &str) -> serde_json::Value {
    json!({
        "word": word,
        "answer": answer,
        "input": input,
    })
}

/// Examples column payload in the stored object shape.
pub fn example_objects(pairs: &[(&str, &str)]) -> serde_json::Value {
    json!(pairs
        .iter()
        .map(|(sentence, answer)| json!({ "sentence": sentence, "answer": answer }))
        .collect::<Vec<_>>())
}

/// Examples column payload in the legacy plain-string shape.
pub fn legacy_examples(sentences: &[&str]) -> serde_json::Value {
    json!(sentences)
}

/// Create an account register request body.
pub fn account_register_request(name: Option<&str>) -> serde_json::Value {
    match name {
        Some(n) => json!({ "name": n }),
        None => json!({}),
    }
}
