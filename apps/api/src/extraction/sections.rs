//! Section Segmenter — header slice and heading-delimited body sections.
//!
//! Sections are recomputed on demand from the normalized text; nothing is
//! cached. A missing heading is a plain `None`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::matching::prefix_chars;

/// Named resume sections located by heading keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Summary,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Certifications,
    ];

    /// Heading alternation for this section. Longer phrases come first so the
    /// whole heading is consumed.
    fn heading_pattern(&self) -> &'static str {
        match self {
            SectionKind::Summary => {
                r"professional\s+summary|career\s+objective|summary|objective|about\s+me"
            }
            SectionKind::Education => {
                r"educational\s+qualifications?|education|academic\s+background|academics?|qualifications?"
            }
            SectionKind::Experience => {
                r"work\s+experience|professional\s+experience|employment\s+history|work\s+history|experience"
            }
            SectionKind::Projects => r"personal\s+projects|academic\s+projects|projects?|portfolio",
            SectionKind::Skills => {
                r"technical\s+skills|key\s+skills|core\s+competencies|skill\s+set|skills"
            }
            SectionKind::Certifications => {
                r"certifications?|certificates|licenses\s+(?:&|and)\s+certifications"
            }
        }
    }
}

struct HeadingMatchers {
    kind: SectionKind,
    /// Keyword at the start of a line (optionally behind bullet/heading marks).
    line_start: Regex,
    /// Keyword anywhere, as a whole word.
    anywhere: Regex,
}

static HEADINGS: Lazy<Vec<HeadingMatchers>> = Lazy::new(|| {
    SectionKind::ALL
        .iter()
        .map(|&kind| {
            let alternation = kind.heading_pattern();
            HeadingMatchers {
                kind,
                line_start: Regex::new(&format!(r"(?im)^[ \t#*•\-]*(?:{alternation})\b"))
                    .expect("line-start heading pattern is valid"),
                anywhere: Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
                    .expect("heading pattern is valid"),
            }
        })
        .collect()
});

fn matchers(kind: SectionKind) -> &'static HeadingMatchers {
    HEADINGS
        .iter()
        .find(|m| m.kind == kind)
        .unwrap_or(&HEADINGS[0])
}

/// First `max_chars` characters of the text, used for identity fields.
pub fn header(text: &str, max_chars: usize) -> &str {
    prefix_chars(text, max_chars)
}

/// True when the whole line is a section heading ("Experience",
/// "## Technical Skills:"), not prose that merely starts with a keyword.
pub fn is_heading_line(line: &str) -> bool {
    let line = line.trim();
    HEADINGS.iter().any(|m| {
        m.line_start.find(line).is_some_and(|hit| {
            line[hit.end()..]
                .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
                .is_empty()
        })
    })
}

/// Body of the named section.
///
/// The heading is the first line that starts with one of the section's
/// keywords; failing that, the first whole-word occurrence anywhere. The body
/// runs from just after the heading until the next line that starts with a
/// different section's heading, capped at `budget_chars`.
pub fn section_body(text: &str, kind: SectionKind, budget_chars: usize) -> Option<&str> {
    let own = matchers(kind);
    let heading = own
        .line_start
        .find(text)
        .or_else(|| own.anywhere.find(text))?;

    let rest = &text[heading.end()..];

    // The remainder of the heading line always belongs to this section.
    let scan_from = rest.find('\n').unwrap_or(rest.len());
    let stop = HEADINGS
        .iter()
        .filter(|m| m.kind != kind)
        .filter_map(|m| m.line_start.find(&rest[scan_from..]).map(|hit| scan_from + hit.start()))
        .min()
        .unwrap_or(rest.len());

    Some(prefix_chars(&rest[..stop], budget_chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Smith\njane@example.com\n\nSummary\nBackend engineer with 6 years of experience.\n\nExperience\nAcme Corp 2019 - Present\nBuilt payment APIs\n\nEducation\nB.Tech in Computer Science, 2018\n\nSkills\nRust, Go, SQL";

    #[test]
    fn test_header_is_bounded() {
        assert_eq!(header(RESUME, 10), "Jane Smith");
        assert_eq!(header("short", 1500), "short");
    }

    #[test]
    fn test_is_heading_line() {
        assert!(is_heading_line("Experience"));
        assert!(is_heading_line("  ## Technical Skills:"));
        assert!(is_heading_line("WORK HISTORY"));
        assert!(!is_heading_line("Experience building payment APIs"));
        assert!(!is_heading_line("Acme Corp 2019 - Present"));
        assert!(!is_heading_line(""));
    }

    #[test]
    fn test_section_stops_at_next_heading() {
        let body = section_body(RESUME, SectionKind::Experience, 2000).unwrap();
        assert!(body.contains("Acme Corp"));
        assert!(body.contains("Built payment APIs"));
        assert!(!body.contains("B.Tech"));
    }

    #[test]
    fn test_heading_line_preferred_over_inline_mention() {
        // "experience" appears inline in the summary before the real heading.
        let body = section_body(RESUME, SectionKind::Experience, 2000).unwrap();
        assert!(body.trim_start().starts_with("Acme Corp"));
    }

    #[test]
    fn test_last_section_runs_to_end() {
        let body = section_body(RESUME, SectionKind::Skills, 2000).unwrap();
        assert_eq!(body.trim(), "Rust, Go, SQL");
    }

    #[test]
    fn test_missing_section_is_none() {
        assert!(section_body(RESUME, SectionKind::Certifications, 2000).is_none());
        assert!(section_body("", SectionKind::Education, 2000).is_none());
    }

    #[test]
    fn test_inline_keyword_fallback() {
        let text = "Worked on many projects: Apollo, Gemini";
        let body = section_body(text, SectionKind::Projects, 2000).unwrap();
        assert_eq!(body, ": Apollo, Gemini");
    }

    #[test]
    fn test_budget_caps_section() {
        let text = format!("Skills\n{}", "x".repeat(5000));
        let body = section_body(&text, SectionKind::Skills, 2000).unwrap();
        assert_eq!(body.chars().count(), 2000);
    }

    #[test]
    fn test_rest_of_heading_line_belongs_to_section() {
        let text = "Skills Summary: Rust, Kafka\nEducation\nB.Sc Physics";
        let body = section_body(text, SectionKind::Skills, 2000).unwrap();
        assert_eq!(body.trim(), "Summary: Rust, Kafka");
    }

    #[test]
    fn test_subheading_of_same_kind_does_not_terminate() {
        let text = "Experience\nWork Experience\nAcme Corp\n\nSkills\nRust";
        let body = section_body(text, SectionKind::Experience, 2000).unwrap();
        assert!(body.contains("Acme Corp"));
    }
}
