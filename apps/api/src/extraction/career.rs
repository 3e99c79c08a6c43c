//! Experience years, current role and seniority.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::lexicon::{ROLE_KEYWORDS, SENIORITY_KEYWORDS};
use crate::extraction::matching::{contains_any_term, contains_term, year_ranges};
use crate::models::Seniority;

/// Header lines considered by the first-line role fallback.
const ROLE_HEADER_LINES: usize = 8;

static YEARS_OF_EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\+?\s*(?:years?|yrs?)(?:\s+of)?\s+(?:experience|exp)\b")
        .expect("years-of-experience pattern is valid")
});

static EXPERIENCE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:total\s+)?(?:experience|exp)\s*:?\s*(\d{1,2})\+?\s*(?:years?|yrs?)\b")
        .expect("experience label pattern is valid")
});

static ROLE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)\b(?:current\s+role|current|position|role|title|working\s+as|employed\s+as)\b[ \t]*:?[ \t]*([^\n]+)",
    )
    .expect("role label pattern is valid")
});

static AT_COMPANY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+at\s").expect("at-company pattern is valid"));

/// Total professional experience in whole years.
///
/// An explicit statement ("5+ years of experience", "Experience: 4 years")
/// wins. Otherwise every `YYYY - YYYY|present|current` range in the text is
/// summed, with open ranges closed at `current_year`. Ranges that add up to
/// nothing are no evidence at all.
pub fn extract_experience_years(text: &str, current_year: i32) -> Option<u32> {
    let stated = [&*YEARS_OF_EXPERIENCE, &*EXPERIENCE_LABEL]
        .into_iter()
        .find_map(|re| re.captures(text)?.get(1)?.as_str().parse::<u32>().ok());
    if stated.is_some() {
        return stated;
    }

    let total: u32 = year_ranges(text)
        .iter()
        .map(|r| r.span(current_year))
        .sum();
    (total > 0).then_some(total)
}

/// Current job title, from an explicit label or a bare title line near the top.
pub fn extract_current_role(header: &str, text: &str) -> Option<String> {
    let labelled = ROLE_LABEL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| role_phrase(m.as_str()))
        .find(|candidate| is_role(candidate));
    if let Some(role) = labelled {
        return Some(role.to_string());
    }

    header
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(ROLE_HEADER_LINES)
        .filter(|line| {
            line.chars()
                .all(|c| c.is_alphabetic() || c == ' ' || matches!(c, '/' | '&' | '-'))
        })
        .find(|line| is_role(line))
        .map(str::to_string)
}

/// Cuts a labelled phrase at the company part (" at Acme", "@ Acme") or at
/// the first character that cannot be part of a title.
pub fn role_phrase(raw: &str) -> &str {
    let mut end = raw
        .find(|c: char| !(c.is_alphabetic() || c == ' ' || matches!(c, '/' | '&' | '-')))
        .unwrap_or(raw.len());
    if let Some(at) = AT_COMPANY.find(&raw[..end]) {
        end = at.start();
    }
    raw[..end].trim()
}

fn is_role(candidate: &str) -> bool {
    let len = candidate.chars().count();
    (3..=100).contains(&len) && contains_any_term(candidate, ROLE_KEYWORDS)
}

/// First keyword from the ordered seniority map present in the text; failing
/// that, a level inferred from total experience.
pub fn determine_seniority(text: &str, experience_years: Option<u32>) -> Option<Seniority> {
    let text_lower = text.to_lowercase();
    if let Some((keyword, level)) = SENIORITY_KEYWORDS
        .iter()
        .find(|(keyword, _)| contains_term(&text_lower, keyword))
    {
        debug!(keyword = *keyword, level = level.as_str(), "seniority from keyword");
        return Some(*level);
    }

    let inferred = experience_years.map(Seniority::from_years);
    if let Some(level) = inferred {
        debug!(level = level.as_str(), "seniority inferred from experience");
    }
    inferred
}
