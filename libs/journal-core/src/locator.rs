//! Answer location inside generated example sentences.
//!
//! Example sentences come from an external generator which may inflect the
//! target phrase (tense, pronoun, pluralization), so exact literal matching
//! fails often. The locator prefers the longest contiguous word window of
//! the phrase that appears in the sentence, then the left-most occurrence.
//! Display bolding and quiz validation both go through this function, so
//! the algorithm must not diverge between call sites.

use regex::RegexBuilder;

/// Locate the substring of `sentence` that corresponds to `phrase`.
///
/// Single-word phrases get one case-insensitive literal search. Multi-word
/// phrases are searched window-by-window, from the full phrase down to
/// two-word windows; single-word sub-windows are never tried. When nothing
/// matches, `phrase` is returned verbatim and the caller must treat the
/// extraction as uncertain.
pub fn locate(sentence: &str, phrase: &str) -> String {
    let words: Vec<&str> = phrase.split_whitespace().collect();

    if words.len() <= 1 {
        return find_ci(sentence, phrase).unwrap_or_else(|| phrase.to_string());
    }

    for len in (2..=words.len()).rev() {
        for start in 0..=(words.len() - len) {
            let window = words[start..start + len].join(" ");
            if let Some(found) = find_ci(sentence, &window) {
                return found;
            }
        }
    }

    // Whole phrase with its original whitespace, one last time.
    find_ci(sentence, phrase).unwrap_or_else(|| phrase.to_string())
}

/// First case-insensitive literal occurrence of `needle` in `haystack`.
/// Metacharacters are escaped so phrases containing `.`, `*`, `(` etc.
/// never produce malformed or wildcarded patterns.
fn find_ci(haystack: &str, needle: &str) -> Option<String> {
    if needle.is_empty() {
        return None;
    }
    let re = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .ok()?;
    re.find(haystack).map(|m| m.as_str().to_string())
}
