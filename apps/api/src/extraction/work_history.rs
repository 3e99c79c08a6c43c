//! Work history entries from the experience section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::career::role_phrase;
use crate::extraction::lexicon::ROLE_KEYWORDS;
use crate::extraction::matching::{contains_any_term, excerpt, year_ranges};
use crate::models::WorkExperienceEntry;

pub const MAX_ENTRIES: usize = 5;
const SUMMARY_CHARS: usize = 200;

static COMPANY_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:company|employer|organi[sz]ation|worked\s+at|worked\s+with|at)\b[ \t]*:?[ \t]*((?-i:[A-Z0-9][\w&.'-]*(?:[ \t]+(?:[A-Z&][\w&.'-]*|of|and))*))",
    )
    .expect("company pattern is valid")
});

static ROLE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)\b(?:role|position|designation|title)\b[ \t]*:[ \t]*([^\n]+)")
        .expect("role label pattern is valid")
});

static ROLE_AS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:as|As)[ \t]+(?:an?[ \t]+)?([A-Z][\w/&-]*(?:[ \t]+(?:[A-Z/&][\w/&-]*|of|and))*)")
        .expect("role-as pattern is valid")
});

/// Separators inside a "Company | Role | Dates" style first line.
static SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]*(?:[|,•@]|[ \t]-[ \t]|[ \t]at[ \t])[ \t]*").expect("segment pattern is valid")
});

/// Splits the experience section on blank lines and keeps the chunks in
/// which a company or a role could be identified.
pub fn extract_work_experience(section: &str) -> Vec<WorkExperienceEntry> {
    section
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .take(MAX_ENTRIES)
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Option<WorkExperienceEntry> {
    let mut company = labelled_company(entry);
    let mut role = labelled_role(entry);

    if company.is_none() && role.is_none() {
        let first_line = entry.lines().next().unwrap_or_default();
        let segments: Vec<&str> = SEGMENT_SPLIT
            .split(first_line)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        role = segments
            .iter()
            .find(|s| is_role_segment(s))
            .map(|s| s.to_string());
        if role.is_some() {
            company = segments
                .iter()
                .find(|s| is_company_segment(s))
                .map(|s| s.to_string());
        }
    }

    if company.is_none() && role.is_none() {
        return None;
    }

    let dates = year_ranges(entry).into_iter().next();
    Some(WorkExperienceEntry {
        company,
        role,
        start_year: dates.map(|r| r.start.to_string()),
        end_year: dates.map(|r| r.end_label()),
        summary: excerpt(entry, SUMMARY_CHARS),
    })
}

fn labelled_company(entry: &str) -> Option<String> {
    COMPANY_LABEL
        .captures_iter(entry)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|name| name.chars().count() >= 2 && !contains_any_term(name, ROLE_KEYWORDS))
        .map(str::to_string)
}

fn labelled_role(entry: &str) -> Option<String> {
    let explicit = ROLE_LABEL
        .captures(entry)
        .and_then(|caps| caps.get(1))
        .map(|m| role_phrase(m.as_str()))
        .filter(|role| role.chars().count() >= 2);
    if let Some(role) = explicit {
        return Some(role.to_string());
    }

    ROLE_AS
        .captures_iter(entry)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|role| contains_any_term(role, ROLE_KEYWORDS))
        .map(str::to_string)
}

fn is_role_segment(segment: &str) -> bool {
    let len = segment.chars().count();
    (3..=100).contains(&len)
        && !segment.chars().any(|c| c.is_ascii_digit())
        && contains_any_term(segment, ROLE_KEYWORDS)
}

fn is_company_segment(segment: &str) -> bool {
    let len = segment.chars().count();
    (2..=100).contains(&len)
        && segment.chars().next().is_some_and(|c| c.is_uppercase())
        && !segment.chars().any(|c| c.is_ascii_digit())
        && !matches!(segment.to_lowercase().as_str(), "present" | "current")
        && !contains_any_term(segment, ROLE_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_separated_entries() {
        let section = "\nAcme Corp | Senior Backend Engineer | 2019 - Present\nBuilt payment APIs in Rust\n\nGlobex Inc | Software Developer | 2016 - 2019\nMaintained billing services";
        let entries = extract_work_experience(section);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].company.as_deref(), Some("Acme Corp"));
        assert_eq!(entries[0].role.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(entries[0].start_year.as_deref(), Some("2019"));
        assert_eq!(entries[0].end_year.as_deref(), Some("Present"));
        assert!(entries[0]
            .summary
            .as_deref()
            .is_some_and(|s| s.starts_with("Acme Corp")));

        assert_eq!(entries[1].company.as_deref(), Some("Globex Inc"));
        assert_eq!(entries[1].end_year.as_deref(), Some("2019"));
    }

    #[test]
    fn test_labelled_entry() {
        let entries = extract_work_experience("Company: Initech\nRole: QA Engineer\n2015 - 2017");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.as_deref(), Some("Initech"));
        assert_eq!(entries[0].role.as_deref(), Some("QA Engineer"));
        assert_eq!(entries[0].start_year.as_deref(), Some("2015"));
        assert_eq!(entries[0].end_year.as_deref(), Some("2017"));
    }

    #[test]
    fn test_prose_entry() {
        let entries = extract_work_experience("Worked at Hooli as Data Scientist from 2012 to 2014");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.as_deref(), Some("Hooli"));
        assert_eq!(entries[0].role.as_deref(), Some("Data Scientist"));
        assert_eq!(entries[0].start_year.as_deref(), Some("2012"));
        assert_eq!(entries[0].end_year.as_deref(), Some("2014"));
    }

    #[test]
    fn test_entry_without_company_or_role_is_dropped() {
        let section = "\nHobbies include chess\n\nAcme Corp | Developer | 2020 - Present";
        let entries = extract_work_experience(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role.as_deref(), Some("Developer"));
    }

    #[test]
    fn test_entry_cap() {
        let section = (1..=7)
            .map(|i| format!("Company: C{i}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        assert_eq!(extract_work_experience(&section).len(), MAX_ENTRIES);
    }

    #[test]
    fn test_empty_section() {
        assert!(extract_work_experience("").is_empty());
        assert!(extract_work_experience("\n\n\n").is_empty());
    }
}
