//! Quiz entry selection and fill-in-the-blank checking.

use rand::Rng;
use regex::RegexBuilder;

use crate::types::{QuizEntry, WordEntry};

/// Placeholder token shown in place of the answer.
pub const BLANK: &str = "_____";

/// Flatten every example of every candidate word into quiz entries.
///
/// Each example becomes one entry, so words with more examples are
/// proportionally more likely to be drawn. Examples without a stored
/// answer fall back to the word's text.
fn build_pool(words: &[WordEntry]) -> Vec<QuizEntry> {
    words
        .iter()
        .flat_map(|w| {
            w.examples.iter().map(move |ex| QuizEntry {
                word: w.text.clone(),
                sentence: ex.sentence.clone(),
                answer: ex
                    .answer
                    .clone()
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| w.text.clone()),
                definition: w.definition.clone(),
            })
        })
        .collect()
}

/// Draw one quiz entry uniformly at random across all examples.
/// Returns `None` when the candidate set has no examples at all.
pub fn pick_random<R: Rng + ?Sized>(words: &[WordEntry], rng: &mut R) -> Option<QuizEntry> {
    let mut pool = build_pool(words);
    if pool.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(idx))
}

/// Blank out the first case-insensitive occurrence of the answer in the
/// sentence. Falls back to blanking the word itself when the entry carries
/// an empty answer.
pub fn render_blank(entry: &QuizEntry) -> String {
    let target = effective_answer(entry);
    if target.is_empty() {
        return entry.sentence.clone();
    }
    match RegexBuilder::new(&regex::escape(target))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace(&entry.sentence, BLANK).into_owned(),
        Err(_) => entry.sentence.clone(),
    }
}

/// Judge a typed answer: trimmed, lowercased, exact equality. No fuzzy
/// matching, no partial credit.
pub fn check_answer(entry: &QuizEntry, user_input: &str) -> bool {
    let expected = effective_answer(entry);
    user_input.trim().to_lowercase() == expected.trim().to_lowercase()
}

fn effective_answer(entry: &QuizEntry) -> &str {
    if entry.answer.is_empty() {
        &entry.word
    } else {
        &entry.answer
    }
}
