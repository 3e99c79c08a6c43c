//! Shared matching and validation helpers used by every field extractor.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::lexicon::NAME_BLACKLIST;

/// Case-insensitive terms already emitted into any output collection.
///
/// One instance is shared by the skills and tools passes so a term can only
/// ever land in one of the two.
#[derive(Debug, Default)]
pub struct SeenTerms {
    keys: HashSet<String>,
}

impl SeenTerms {
    /// Records `term`; returns false if it was already present.
    pub fn insert(&mut self, term: &str) -> bool {
        self.keys.insert(term.to_lowercase())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.keys.contains(&term.to_lowercase())
    }
}

/// Whole-word, case-insensitive test of `term` against already-lowercased text.
///
/// A boundary is any non-alphanumeric character or the ends of the text, so
/// terms such as `C++`, `Node.js` or `CI/CD` match where `\b` would not.
pub fn contains_term(text_lower: &str, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();

        let before_ok = text_lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text_lower[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return true;
        }

        // Advance past the first char of this hit.
        from = start
            + text_lower[start..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
    }

    false
}

/// Scans a fixed vocabulary against the text, emitting canonical casing in
/// vocabulary order, skipping anything in `seen`, and stopping at `limit`.
pub fn scan_vocabulary(
    text_lower: &str,
    vocabulary: &[&str],
    seen: &mut SeenTerms,
    limit: usize,
) -> Vec<String> {
    let mut found = Vec::new();
    for &term in vocabulary {
        if found.len() >= limit {
            break;
        }
        if !seen.contains(term) && contains_term(text_lower, term) {
            seen.insert(term);
            found.push(term.to_string());
        }
    }
    found
}

/// True if any entry of `list` occurs as a whole word in `text`.
pub fn contains_any_term(text: &str, list: &[&str]) -> bool {
    let lower = text.to_lowercase();
    list.iter().any(|term| contains_term(&lower, term))
}

/// "Looks like a person's name": at least two alphabetic tokens, each starting
/// with an upper-case letter, no digits or stray punctuation, 3–100 chars, and
/// no token from the role/noise blacklist.
pub fn looks_like_name(candidate: &str) -> bool {
    let candidate = candidate.trim();
    let len = candidate.chars().count();
    if !(3..=100).contains(&len) {
        return false;
    }

    let tokens: Vec<&str> = candidate.split_whitespace().collect();
    if tokens.len() < 2 {
        return false;
    }

    tokens.iter().all(|token| {
        let starts_upper = token.chars().next().is_some_and(|c| c.is_uppercase());
        let clean_chars = token
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '.' | '\'' | '-'));
        let has_letter = token.chars().any(|c| c.is_alphabetic());
        starts_upper && clean_chars && has_letter && !is_blacklisted_token(token)
    })
}

fn is_blacklisted_token(token: &str) -> bool {
    let bare: String = token
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    NAME_BLACKLIST.contains(&bare.as_str())
}

/// Upper-cases the first letter of each whitespace-separated word and
/// lower-cases the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn prefix_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Bounded, trimmed excerpt; `None` when nothing but whitespace remains.
pub fn excerpt(text: &str, max_chars: usize) -> Option<String> {
    let cut = prefix_chars(text.trim(), max_chars).trim();
    if cut.is_empty() {
        None
    } else {
        Some(cut.to_string())
    }
}

static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b((?:19|20)\d{2})\s*(?:-|to)\s*((?:19|20)\d{2}|present|current)\b")
        .expect("year range pattern is valid")
});

static YEAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year token pattern is valid"));

/// Closing side of a `YYYY - …` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    Year(i32),
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: RangeEnd,
}

impl YearRange {
    /// Whole years covered, never negative. Open ranges close at `current_year`.
    pub fn span(&self, current_year: i32) -> u32 {
        let end = match self.end {
            RangeEnd::Year(y) => y,
            RangeEnd::Present => current_year,
        };
        (end - self.start).max(0) as u32
    }

    pub fn end_label(&self) -> String {
        match self.end {
            RangeEnd::Year(y) => y.to_string(),
            RangeEnd::Present => "Present".to_string(),
        }
    }
}

/// All non-overlapping `YYYY - YYYY|present|current` ranges, in text order.
pub fn year_ranges(text: &str) -> Vec<YearRange> {
    YEAR_RANGE
        .captures_iter(text)
        .filter_map(|caps| {
            let start = caps.get(1)?.as_str().parse().ok()?;
            let end_raw = caps.get(2)?.as_str();
            let end = match end_raw.parse() {
                Ok(y) => RangeEnd::Year(y),
                Err(_) => RangeEnd::Present,
            };
            Some(YearRange { start, end })
        })
        .collect()
}

/// The last standalone four-digit year in the text.
pub fn last_year_token(text: &str) -> Option<String> {
    YEAR_TOKEN
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_term_whole_word() {
        let text = "skilled in javascript, go-to person for c++ and node.js";
        assert!(contains_term(text, "JavaScript"));
        assert!(contains_term(text, "C++"));
        assert!(contains_term(text, "Node.js"));
        assert!(contains_term(text, "Go"));
        assert!(!contains_term(text, "Java"));
        assert!(!contains_term(text, "Script"));
    }

    #[test]
    fn test_contains_term_finds_later_bounded_hit() {
        assert!(contains_term("javascript and java", "java"));
    }

    #[test]
    fn test_contains_term_handles_multibyte_text() {
        assert!(contains_term("café rust über", "rust"));
        assert!(!contains_term("ééé", "rust"));
        assert!(!contains_term("anything", ""));
    }

    #[test]
    fn test_scan_vocabulary_respects_seen_and_limit() {
        let mut seen = SeenTerms::default();
        seen.insert("python");
        let text = "python rust docker git";
        let found = scan_vocabulary(text, &["Python", "Rust", "Docker", "Git"], &mut seen, 2);
        assert_eq!(found, vec!["Rust", "Docker"]);
        assert!(seen.contains("RUST"));
        assert!(!seen.contains("git"));
    }

    #[test]
    fn test_looks_like_name_accepts_names() {
        assert!(looks_like_name("John Doe"));
        assert!(looks_like_name("Mary-Jane O'Neil"));
        assert!(looks_like_name("A. J. Smith"));
        assert!(looks_like_name("PRIYA SHARMA"));
    }

    #[test]
    fn test_looks_like_name_rejects_non_names() {
        assert!(!looks_like_name("John"));
        assert!(!looks_like_name("john doe"));
        assert!(!looks_like_name("Senior Software Engineer"));
        assert!(!looks_like_name("John Doe 42"));
        assert!(!looks_like_name("Professional Summary"));
        assert!(!looks_like_name("Jo"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("jOHN dOE"), "John Doe");
        assert_eq!(title_case("  rahul   kumar "), "Rahul Kumar");
    }

    #[test]
    fn test_prefix_chars_is_char_safe() {
        assert_eq!(prefix_chars("héllo", 2), "hé");
        assert_eq!(prefix_chars("abc", 10), "abc");
        assert_eq!(excerpt("   ", 5), None);
        assert_eq!(excerpt("  abcdef ", 3), Some("abc".to_string()));
    }

    #[test]
    fn test_year_ranges_and_spans() {
        let ranges = year_ranges("Acme 2018 - 2021\nGlobex 2021 to Present\nold 2015-2014");
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].span(2026), 3);
        assert_eq!(ranges[1].end, RangeEnd::Present);
        assert_eq!(ranges[1].span(2026), 5);
        assert_eq!(ranges[1].end_label(), "Present");
        assert_eq!(ranges[2].span(2026), 0);
    }

    #[test]
    fn test_last_year_token() {
        assert_eq!(last_year_token("B.Tech 2014 - 2018"), Some("2018".to_string()));
        assert_eq!(last_year_token("no years here 12345"), None);
    }
}
