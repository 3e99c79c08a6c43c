//! Project entries from the projects section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::matching::excerpt;
use crate::models::ProjectEntry;

pub const MAX_ENTRIES: usize = 4;
const DESCRIPTION_CHARS: usize = 200;
const MAX_NAME_CHARS: usize = 100;

static TECH_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)\b(?:technologies(?:[ \t]+used)?|tech(?:nology)?[ \t]+stack|tech|stack|tools)\b[ \t]*:[ \t]*([^\n]+)|\bbuilt[ \t]+with\b[ \t]*:?[ \t]*([^\n]+)",
    )
    .expect("technologies pattern is valid")
});

pub fn extract_projects(section: &str) -> Vec<ProjectEntry> {
    section
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .take(MAX_ENTRIES)
        .filter_map(|entry| {
            let name = project_name(entry)?;
            Some(ProjectEntry {
                name: Some(name),
                description: excerpt(entry, DESCRIPTION_CHARS),
                technologies: technologies(entry),
            })
        })
        .collect()
}

/// Leading phrase of the entry's first line, up to a `:`, `|`, `(` or ` - `.
fn project_name(entry: &str) -> Option<String> {
    let first_line = entry
        .lines()
        .next()?
        .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '•' | '*' | '-' | '·'));

    let mut end = first_line
        .find(|c: char| matches!(c, ':' | '|' | '('))
        .unwrap_or(first_line.len());
    if let Some(dash) = first_line[..end].find(" - ") {
        end = dash;
    }

    let name = first_line[..end].trim();
    let valid = !name.is_empty()
        && name.chars().count() <= MAX_NAME_CHARS
        && name.chars().any(|c| c.is_alphanumeric());
    valid.then(|| name.to_string())
}

fn technologies(entry: &str) -> Vec<String> {
    let Some(list) = TECH_LABEL
        .captures(entry)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
    else {
        return Vec::new();
    };

    list.as_str()
        .split([',', ';'])
        .map(|t| t.trim().trim_end_matches('.').trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &str = "\nResume Parser - Extracts candidate fields from CVs\nTech Stack: Rust, Axum; Tokio\n\nChat App: realtime messaging\nBuilt with React, Node.js.\n\nThird\n\nFourth\n\nFifth";

    #[test]
    fn test_names_and_technologies() {
        let projects = extract_projects(SECTION);
        assert_eq!(projects[0].name.as_deref(), Some("Resume Parser"));
        assert_eq!(projects[0].technologies, vec!["Rust", "Axum", "Tokio"]);
        assert_eq!(projects[1].name.as_deref(), Some("Chat App"));
        assert_eq!(projects[1].technologies, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_entry_cap_and_empty_technologies() {
        let projects = extract_projects(SECTION);
        assert_eq!(projects.len(), MAX_ENTRIES);
        assert_eq!(projects[3].name.as_deref(), Some("Fourth"));
        assert!(projects[3].technologies.is_empty());
    }

    #[test]
    fn test_description_is_bounded_excerpt() {
        let long = format!("Apollo: {}", "word ".repeat(100));
        let projects = extract_projects(&long);
        let description = projects[0].description.as_deref().unwrap();
        assert!(description.starts_with("Apollo"));
        assert!(description.chars().count() <= 200);
    }

    #[test]
    fn test_bullet_prefix_and_nameless_entry() {
        let projects = extract_projects("• Apollo (2021)\n\n: orphan detail");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name.as_deref(), Some("Apollo"));
    }
}
