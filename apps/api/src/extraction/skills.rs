//! Skills & Tools — dictionary matching plus mining of list-like sections.
//!
//! One `SeenTerms` set is threaded through every pass, which keeps `skills`
//! and `tools_and_technologies` disjoint by case-insensitive name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::lexicon::{
    CERTIFICATIONS, MINING_STOPWORDS, ROLE_KEYWORDS, SOFT_SKILLS, TECH_TOOLS,
};
use crate::extraction::matching::{contains_any_term, scan_vocabulary, SeenTerms};

pub const MAX_SKILLS: usize = 20;
/// Tool cap when only dictionary matches are available.
pub const MAX_TOOLS: usize = 25;
/// Tool cap when at least one list-like section could be mined.
pub const MAX_TOOLS_WITH_SECTIONS: usize = 40;
pub const MAX_CERTIFICATIONS: usize = 10;

const MIN_TOKEN_CHARS: usize = 2;
const MAX_TOKEN_CHARS: usize = 30;
const MAX_TOKEN_WORDS: usize = 3;

/// `Tech Stack:`-style line inside a narrative section; captures the list.
static TECH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[ \t•*-]*(?:tech(?:nology|nologies)?(?:[ \t]+(?:stack|used))?|stack|tools(?:[ \t]+used)?|languages|frameworks|environment)[ \t]*:(.*)$",
    )
    .expect("tech line pattern is valid")
});

/// A section body offered to tool mining.
#[derive(Debug, Clone, Copy)]
pub enum MinedSection<'a> {
    /// Skills-style list: every delimited token is a candidate.
    List(&'a str),
    /// Experience or projects prose: only `Tech Stack:` lines and
    /// comma/semicolon lists are candidates.
    Narrative(&'a str),
}

impl MinedSection<'_> {
    fn tokens(&self) -> Vec<String> {
        match self {
            MinedSection::List(body) => section_tokens(body),
            MinedSection::Narrative(body) => body
                .lines()
                .filter_map(listed_part)
                .flat_map(section_tokens)
                .collect(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SkillSet {
    pub skills: Vec<String>,
    pub tools: Vec<String>,
}

/// Extracts soft skills and tools.
///
/// `mined_sections` are the skills, experience and projects sections that
/// exist in the document; mined tokens are appended after all dictionary
/// matches.
pub fn extract_skills_and_tools(text: &str, mined_sections: &[MinedSection<'_>]) -> SkillSet {
    let text_lower = text.to_lowercase();
    let mut seen = SeenTerms::default();

    let skills = scan_vocabulary(&text_lower, SOFT_SKILLS, &mut seen, MAX_SKILLS);

    let tool_limit = if mined_sections.is_empty() {
        MAX_TOOLS
    } else {
        MAX_TOOLS_WITH_SECTIONS
    };
    let mut tools = scan_vocabulary(&text_lower, TECH_TOOLS, &mut seen, tool_limit);

    'sections: for section in mined_sections {
        for token in section.tokens() {
            if tools.len() >= tool_limit {
                break 'sections;
            }
            if seen.insert(&token) {
                tools.push(token);
            }
        }
    }

    SkillSet { skills, tools }
}

/// Whole-document certification dictionary scan, in dictionary order.
pub fn extract_certifications(text: &str) -> Vec<String> {
    let mut seen = SeenTerms::default();
    scan_vocabulary(
        &text.to_lowercase(),
        CERTIFICATIONS,
        &mut seen,
        MAX_CERTIFICATIONS,
    )
}

/// The list carried by a narrative line, if it carries one.
fn listed_part(line: &str) -> Option<&str> {
    if let Some(caps) = TECH_LINE.captures(line) {
        return caps.get(1).map(|m| m.as_str());
    }
    let items = line
        .split([',', ';'])
        .filter(|item| !item.trim().is_empty())
        .count();
    (items >= 2).then_some(line)
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | ';' | '|' | '\n' | '•' | '·' | '▪' | '●' | '◦' | '■')
}

/// Splits a section on list delimiters and keeps tokens that look like tool
/// or technology names.
fn section_tokens(section: &str) -> Vec<String> {
    section
        .split(is_delimiter)
        .filter_map(clean_token)
        .filter(|token| is_tool_like(token))
        .collect()
}

/// Trims bullets and wrapping punctuation; keeps only the part after a
/// `Label:` prefix.
fn clean_token(raw: &str) -> Option<String> {
    let after_label = raw.rsplit(':').next().unwrap_or(raw);
    let trimmed = after_label
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '*' | '(' | ')' | '"' | '\'' | '.' | '>'));
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn is_tool_like(token: &str) -> bool {
    let chars = token.chars().count();
    if !(MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&chars) {
        return false;
    }
    if token.split_whitespace().count() > MAX_TOKEN_WORDS {
        return false;
    }
    if !token.chars().next().is_some_and(|c| c.is_uppercase() || c.is_ascii_digit()) {
        return false;
    }
    // "Kafka and PostgreSQL", "Built settlement services"
    if token.split_whitespace().any(|word| word.starts_with(char::is_lowercase)) {
        return false;
    }
    if MINING_STOPWORDS.contains(&token.to_lowercase().as_str()) {
        return false;
    }
    if has_digit_run(token, 3) || looks_like_url(token) {
        return false;
    }
    !contains_any_term(token, ROLE_KEYWORDS)
}

fn has_digit_run(token: &str, min_run: usize) -> bool {
    let mut run = 0;
    for c in token.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn looks_like_url(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower.contains("http")
        || lower.contains("www.")
        || lower.contains('@')
        || [".com", ".org", ".io", ".net", ".in"]
            .iter()
            .any(|tld| lower.ends_with(tld))
}
