//! Saying normalization.
//!
//! Sayings are displayed mid-sentence, where a capitalized first letter
//! looks wrong. The one exception is a genuine first-person pronoun "I",
//! which must never be lowercased.

const APOSTROPHES: [char; 3] = ['\'', '\u{2019}', '\u{2018}'];
const QUOTES: [char; 6] = [
    '"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}',
];

/// Lowercase the first character of a user-entered saying unless doing so
/// would corrupt the pronoun "I". Total over all string inputs.
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return input.to_string();
    }
    if input.trim() == "I" {
        return input.to_string();
    }

    let mut chars = input.chars();
    let first = chars.next().unwrap();
    let second = chars.next();
    let third = chars.next();

    // "I " as a standalone word, or a contraction like I'm / I've / I'd.
    if first == 'I' {
        if let Some(c) = second {
            if c == ' ' || APOSTROPHES.contains(&c) {
                return input.to_string();
            }
        }
    }

    // Quoted dialogue beginning with the pronoun: "I said so".
    if QUOTES.contains(&first) && second == Some('I') {
        match third {
            Some(c) if c.is_whitespace() || APOSTROPHES.contains(&c) => {
                return input.to_string();
            }
            _ => {}
        }
    }

    let mut out = String::with_capacity(input.len());
    out.extend(first.to_lowercase());
    out.push_str(&input[first.len_utf8()..]);
    out
}
