//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from journal-core
pub use journal_core::{Example, ListAction, QuizEntry, WordEntry, WordList};

// === Database Entity Types ===

/// Account registration info
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub token: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Word row stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub text: String,
    pub definition: String,
    pub examples: serde_json::Value,
    pub list: String,
    pub created_at: DateTime<Utc>,
}

impl DbWord {
    /// Convert to API word type. Rows with an unknown list value fall back
    /// to `to_learn`; malformed examples payloads degrade to fewer (or no)
    /// examples rather than erroring.
    pub fn to_api_word(&self) -> WordEntry {
        WordEntry {
            id: self.id,
            text: self.text.clone(),
            definition: self.definition.clone(),
            examples: parse_examples(&self.examples),
            list: WordList::from_str(&self.list).unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

/// Lenient examples parsing. The column may hold an array of plain
/// sentence strings (legacy), an array of {sentence, answer} objects, a
/// JSON string wrapping either, or garbage. Bad elements are dropped
/// element by element.
pub fn parse_examples(value: &serde_json::Value) -> Vec<Example> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        serde_json::Value::String(s) => match serde_json::from_str(s) {
            Ok(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountRegisterRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountRegisterResponse {
    pub account_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountStatusResponse {
    pub account_id: Uuid,
    pub last_seen_at: DateTime<Utc>,
}

// Word types

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsQuery {
    pub list: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWordRequest {
    pub text: String,
    /// When absent, the definition service fills definition and examples.
    pub definition: Option<String>,
    /// Plain example sentences; answers are located server-side.
    pub examples: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub action: ListAction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

// Quiz types

/// One fill-in-the-blank challenge. `prompt` is the sentence with the
/// answer blanked out; `sentence` and `answer` are included so the client
/// can reveal them after checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizPrompt {
    pub word: String,
    pub definition: String,
    pub prompt: String,
    pub sentence: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizNextResponse {
    pub entry: Option<QuizPrompt>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizCheckRequest {
    pub word: String,
    pub answer: Option<String>,
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizCheckResponse {
    pub correct: bool,
    pub expected: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn db_word(examples: serde_json::Value, list: &str) -> DbWord {
        DbWord {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            text: "give up".to_string(),
            definition: "to stop trying".to_string(),
            examples,
            list: list.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_examples_object_array() {
        let examples = parse_examples(&json!([
            { "sentence": "Don't give up.", "answer": "give up" }
        ]));
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].sentence, "Don't give up.");
        assert_eq!(examples[0].answer.as_deref(), Some("give up"));
    }

    #[test]
    fn test_parse_examples_legacy_strings() {
        let examples = parse_examples(&json!(["Don't give up.", "Never give up."]));
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].answer, None);
    }

    #[test]
    fn test_parse_examples_json_string_column() {
        let examples = parse_examples(&json!("[\"Don't give up.\"]"));
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].sentence, "Don't give up.");
    }

    #[test]
    fn test_parse_examples_drops_bad_elements() {
        let examples = parse_examples(&json!(["Keep me.", 42, { "nonsense": true }]));
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].sentence, "Keep me.");
    }

    #[test]
    fn test_parse_examples_non_array_is_empty() {
        assert!(parse_examples(&json!(null)).is_empty());
        assert!(parse_examples(&json!({ "sentence": "lonely" })).is_empty());
        assert!(parse_examples(&json!("not json")).is_empty());
    }

    #[test]
    fn test_to_api_word_list_mapping() {
        assert_eq!(db_word(json!([]), "learnt").to_api_word().list, WordList::Learnt);
        assert_eq!(db_word(json!([]), "starred").to_api_word().list, WordList::Starred);
        // Unknown values fall back to to_learn.
        assert_eq!(db_word(json!([]), "bogus").to_api_word().list, WordList::ToLearn);
    }
}
