//! Education entries from the education section.
//!
//! Each degree category is tested once. Field, institution and year are read
//! from the line that names the degree (plus the following line when that
//! line names no degree of its own). Only a section holding a single degree
//! falls back to the whole section for those details.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::lexicon::DISCIPLINES;
use crate::extraction::matching::{contains_term, last_year_token};
use crate::models::{Degree, EducationEntry};

impl Degree {
    /// Abbreviations are matched case-sensitively so ordinary words such as
    /// "be" or "ma" do not read as degrees.
    fn pattern(&self) -> &'static str {
        match self {
            Degree::Bachelor => {
                r"(?i:\bbachelor'?s?\b|\bundergraduate\b)|\bB\.?[ \t]?(?:Tech|TECH|Sc|SC|Com|COM|CA|BA|E|A|S)\b"
            }
            Degree::Master => {
                r"(?i:\bmaster'?s?\b|\bmba\b|\bpost[ \t-]?graduate\b)|\bM\.?[ \t]?(?:Tech|TECH|Sc|SC|Com|COM|CA|Phil|E|A|S)\b"
            }
            Degree::Phd => r"(?i:\bph\.?[ \t]?d\b|\bdoctorate\b|\bdoctor[ \t]+of[ \t]+philosophy\b)",
            Degree::Diploma => r"(?i:\bdiploma\b|\bpolytechnic\b|\bcertificate\b)",
            Degree::HighSchool => {
                r"(?i:\bhigh[ \t]+school\b|\bsecondary\b|\bhsc\b|\bssc\b|\bcbse\b)|\b1[02]th\b"
            }
        }
    }
}

static DEGREE_PATTERNS: Lazy<Vec<(Degree, Regex)>> = Lazy::new(|| {
    Degree::ALL
        .iter()
        .map(|&degree| {
            let re = Regex::new(degree.pattern()).expect("degree pattern is valid");
            (degree, re)
        })
        .collect()
});

static NAMED_INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b((?:[A-Z][\w.&'-]*[ \t]+){0,6}(?:University|College|Institute|School|Academy|Polytechnic)\b(?:[ \t]+(?:of|for)(?:[ \t]+(?:[A-Z][\w.&'-]*|and|&))+)?|\b(?:IIT|NIT|IIIT|IIM|BITS)\b(?:[ \t]+[A-Z][\w-]*)?)",
    )
    .expect("institution pattern is valid")
});

static INSTITUTION_PREPOSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:from|at)[ \t]+([A-Z][\w.&'-]*(?:[ \t]+(?:[A-Z][\w.&'-]*|of|and|&))*)")
        .expect("institution preposition pattern is valid")
});

pub fn extract_education(section: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = section.lines().collect();
    let names_degree = |line: &str| DEGREE_PATTERNS.iter().any(|(_, re)| re.is_match(line));

    let hits: Vec<(Degree, usize)> = DEGREE_PATTERNS
        .iter()
        .filter_map(|(degree, re)| {
            lines
                .iter()
                .position(|line| re.is_match(line))
                .map(|idx| (*degree, idx))
        })
        .collect();
    let single_degree = hits.len() == 1;

    hits.into_iter()
        .map(|(degree, idx)| {
            let mut window = lines[idx].to_string();
            if let Some(next) = lines.get(idx + 1).copied().filter(|&line| !names_degree(line)) {
                window.push('\n');
                window.push_str(next);
            }

            let mut entry = EducationEntry {
                degree,
                field: field_of_study(&window),
                institution: institution(&window),
                year: last_year_token(&window),
            };
            if single_degree {
                entry.field = entry.field.or_else(|| field_of_study(section));
                entry.institution = entry.institution.or_else(|| institution(section));
                entry.year = entry.year.or_else(|| last_year_token(section));
            }
            entry
        })
        .collect()
}

fn field_of_study(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    DISCIPLINES
        .iter()
        .find(|discipline| contains_term(&lower, discipline))
        .map(|discipline| discipline.to_string())
}

fn institution(text: &str) -> Option<String> {
    [&*NAMED_INSTITUTION, &*INSTITUTION_PREPOSITION]
        .into_iter()
        .find_map(|re| re.captures(text)?.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| name.chars().count() > 2)
}
