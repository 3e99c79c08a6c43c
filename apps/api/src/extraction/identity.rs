//! Identity extractors — email, phone, location and the candidate's name.
//!
//! Name and location are ordered strategy chains: each strategy is a plain
//! function tried in priority order, and the first validated value wins.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::lexicon::{
    CITY_GAZETTEER, CONTACT_KEYWORDS, LOCATION_STOPLIST, NAME_BLACKLIST, TECH_TOOLS,
};
use crate::extraction::matching::{contains_any_term, contains_term, looks_like_name, title_case};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-zA-Z][a-zA-Z0-9._%+-]*@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b")
        .expect("email pattern is valid")
});

/// Ten-digit Indian mobile/landline shapes with an optional +91/91/0 prefix.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:\+91|\b91|\b0)[ \t-]?)?(?:[6-9]\d{9}|[6-9]\d{2}[ \t-]\d{3}[ \t-]\d{4}|\d{5}[ \t-]\d{5})\b",
    )
    .expect("phone pattern is valid")
});

static LOCATION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:\b(?:location|address|place|city|residence))[ \t]*:?[ \t]*([A-Z][a-z]+(?:(?:[ \t]+|,[ \t]*)[A-Z][a-z]+)*)",
    )
    .expect("location label pattern is valid")
});

static LOCATION_PREPOSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:in|at|from)[ \t]+([A-Z][a-z]+(?:,[ \t]*[A-Z][a-z]+)*)\b")
        .expect("location preposition pattern is valid")
});

static NAME_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:\b(?:name|candidate|applicant))[ \t]*:?[ \t]*([A-Z][A-Za-z.'-]*(?:[ \t]+[A-Z][A-Za-z.'-]*)+)",
    )
    .expect("name label pattern is valid")
});

/// Header lines considered by the line-based name strategies.
const NAME_SCAN_LINES: usize = 8;
const EMAIL_SCAN_LINES: usize = 15;

/// First plausible email address, lower-cased.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_lowercase())
}

/// First ten-digit phone number, reduced to its trailing ten digits.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE
        .find_iter(text)
        .find(|m| {
            // Reject hits carved out of a longer digit run.
            !text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit())
        })
        .map(|m| {
            let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.len() > 10 {
                digits[digits.len() - 10..].to_string()
            } else {
                digits
            }
        })
}

/// Gazetteer hit in the header, then a labelled location, then a
/// prepositional phrase anywhere in the text.
pub fn extract_location(header: &str, text: &str) -> Option<String> {
    let header_lower = header.to_lowercase();
    if let Some(city) = CITY_GAZETTEER
        .iter()
        .find(|city| contains_term(&header_lower, city))
    {
        return Some(title_case(city));
    }

    [&*LOCATION_LABEL, &*LOCATION_PREPOSITION]
        .into_iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .find(|candidate| is_acceptable_location(candidate))
}

fn is_acceptable_location(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    candidate.chars().count() > 3
        && !LOCATION_STOPLIST.contains(&lower.as_str())
        && !NAME_BLACKLIST.contains(&lower.as_str())
        && !TECH_TOOLS.iter().any(|t| t.eq_ignore_ascii_case(candidate))
}

type NameStrategy = fn(&[&str], &str, Option<&str>) -> Option<String>;

const NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("capitalized_header_line", name_from_capitalized_line),
    ("email_overlap", name_from_email_overlap),
    ("explicit_label", name_from_label),
    ("email_local_part", name_from_email_local_part),
    ("first_line_fallback", name_from_first_line),
];

/// Runs the name strategy chain over the header (and, for the label strategy,
/// the full text). `email` is the already-extracted address, if any.
pub fn extract_name(header: &str, text: &str, email: Option<&str>) -> Option<String> {
    let lines: Vec<&str> = header
        .lines()
        .map(str::trim)
        .filter(|l| l.chars().count() > 2)
        .collect();

    NAME_STRATEGIES.iter().find_map(|(label, strategy)| {
        let name = strategy(&lines, text, email)?;
        debug!(strategy = *label, "resolved candidate name");
        Some(name)
    })
}

/// Strategy 1: a 2–4 word capitalized header line that is not a title or
/// contact line.
fn name_from_capitalized_line(lines: &[&str], _text: &str, _email: Option<&str>) -> Option<String> {
    lines.iter().take(NAME_SCAN_LINES).find_map(|line| {
        if is_noise_line(line) {
            return None;
        }
        let candidate = strip_name_suffix(line);
        let words = candidate.split_whitespace().count();
        ((2..=4).contains(&words) && looks_like_name(candidate)).then(|| candidate.to_string())
    })
}

/// Strategy 2: a header line whose words overlap the email's local part.
fn name_from_email_overlap(lines: &[&str], _text: &str, email: Option<&str>) -> Option<String> {
    let local = email_local_letters(email?)?;

    lines.iter().take(EMAIL_SCAN_LINES).find_map(|line| {
        if line.contains('@') || contains_any_term(line, CONTACT_KEYWORDS) {
            return None;
        }
        if contains_any_term(line, NAME_BLACKLIST) {
            return None;
        }
        let candidate = strip_name_suffix(line);
        let parts: Vec<String> = candidate
            .split_whitespace()
            .map(|w| w.chars().filter(|c| c.is_alphabetic()).collect::<String>().to_lowercase())
            .collect();
        let overlaps = parts.len() >= 2
            && parts
                .iter()
                .any(|p| p.chars().count() > 2 && local.contains(p.as_str()));
        (overlaps && looks_like_name(candidate)).then(|| candidate.to_string())
    })
}

/// Strategy 3: `Name:` / `Candidate:` / `Applicant:` label.
fn name_from_label(_lines: &[&str], text: &str, _email: Option<&str>) -> Option<String> {
    NAME_LABEL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .find(|candidate| looks_like_name(candidate))
}

/// Strategy 4: rebuild a name from `first.last@…`-style local parts.
fn name_from_email_local_part(_lines: &[&str], _text: &str, email: Option<&str>) -> Option<String> {
    let local = email?.split('@').next()?;
    let tokens: Vec<&str> = local
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| t.chars().count() >= 2)
        .collect();
    let candidate = title_case(&tokens.join(" "));
    looks_like_name(&candidate).then_some(candidate)
}

/// Strategy 5: the very first header line, if it has a minimal name shape.
fn name_from_first_line(lines: &[&str], _text: &str, _email: Option<&str>) -> Option<String> {
    let first = strip_name_suffix(lines.first()?);
    let words = first.split_whitespace().count();
    let shaped = (2..=4).contains(&words)
        && (3..=100).contains(&first.chars().count())
        && first
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '.' | '\'' | '-'))
        && !contains_any_term(first, NAME_BLACKLIST);
    shaped.then(|| first.to_string())
}

fn is_noise_line(line: &str) -> bool {
    line.contains('@')
        || line.chars().filter(|c| c.is_ascii_digit()).count() > 4
        || contains_any_term(line, NAME_BLACKLIST)
        || contains_any_term(line, CONTACT_KEYWORDS)
}

/// Cuts trailing decoration such as `| Resume`, `(he/him)` or `, MBA`.
fn strip_name_suffix(line: &str) -> &str {
    let cut = line
        .find(|c: char| matches!(c, '|' | ',' | '(' | '[' | '•' | '·' | '/' | ':' | ';'))
        .unwrap_or(line.len());
    let head = &line[..cut];
    let head = head.find(" - ").map_or(head, |i| &head[..i]);
    head.trim()
}

fn email_local_letters(email: &str) -> Option<String> {
    let local: String = email
        .split('@')
        .next()?
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    (!local.is_empty()).then_some(local)
}
