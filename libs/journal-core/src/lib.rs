//! Core journal library shared by the backend service.
//!
//! Provides:
//! - Answer locator for finding inflected phrase occurrences in sentences
//! - Saying normalizer (first-letter lowercasing with pronoun-I handling)
//! - List membership state machine (to_learn / learnt / starred)
//! - Quiz entry selection and fill-in-the-blank checking
//! - Parser for loosely structured definition/example replies

pub mod error;
pub mod lists;
pub mod locator;
pub mod normalize;
pub mod parser;
pub mod quiz;
pub mod types;

pub use error::{ParseError, Result};
pub use lists::{apply, ListAction};
pub use locator::locate;
pub use normalize::normalize;
pub use parser::{parse_reply, WordDetails};
pub use quiz::{check_answer, pick_random, render_blank, BLANK};
pub use types::{Example, QuizEntry, WordEntry, WordList};
