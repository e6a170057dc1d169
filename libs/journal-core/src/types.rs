//! Core types for the sayings journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// List membership of a saved saying. A record belongs to exactly one
/// list at any time; views are derived by filtering on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordList {
    ToLearn,
    Learnt,
    Starred,
}

impl Default for WordList {
    fn default() -> Self {
        Self::ToLearn
    }
}

impl WordList {
    /// Get the list name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToLearn => "to_learn",
            Self::Learnt => "learnt",
            Self::Starred => "starred",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "to_learn" => Some(Self::ToLearn),
            "learnt" => Some(Self::Learnt),
            "starred" => Some(Self::Starred),
            _ => None,
        }
    }
}

/// Example sentence attached to a saying. `answer` is the exact inflected
/// substring of `sentence` instantiating the saying, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub sentence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Example {
    pub fn new(sentence: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
            answer: Some(answer.into()),
        }
    }
}

// Legacy rows store examples as plain sentence strings; newer rows store
// {sentence, answer} objects. Accept both shapes.
impl<'de> Deserialize<'de> for Example {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Full {
                sentence: String,
                #[serde(default)]
                answer: Option<String>,
            },
            Plain(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Plain(sentence) => Example {
                sentence,
                answer: None,
            },
            Repr::Full { sentence, answer } => Example { sentence, answer },
        })
    }
}

/// A saved word or saying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: Uuid,
    pub text: String,
    pub definition: String,
    pub examples: Vec<Example>,
    pub list: WordList,
    pub created_at: DateTime<Utc>,
}

/// Ephemeral fill-in-the-blank challenge built from one example sentence.
/// Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizEntry {
    pub word: String,
    pub sentence: String,
    pub answer: String,
    pub definition: String,
}
