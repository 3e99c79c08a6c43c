//! Resume field extraction engine.
//!
//! `ResumeParser` turns raw resume text into a `ParsedResume`. Every field is
//! produced by a pure extractor over the normalized text, the bounded header
//! slice, or one heading-delimited section. A field that no strategy resolves
//! stays at its null/empty default; parsing itself never fails.
//!
//! # Pipeline
//! 1. `normalizer::normalize_text` unifies line breaks and whitespace.
//! 2. `sections` slices the header and, on demand, named sections.
//! 3. Field extractors (`identity`, `career`, `skills`, `education`,
//!    `work_history`, `projects`, `summary`) run independently.
//!
//! The whole pipeline runs under an unwind guard so a bug in one extractor
//! yields an empty record instead of taking a batch down with it.

pub mod career;
pub mod education;
pub mod identity;
pub mod lexicon;
pub mod matching;
pub mod normalizer;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod summary;
pub mod work_history;

use std::panic::{self, AssertUnwindSafe};

use chrono::{Datelike, Utc};
use tracing::{debug, error};

use crate::models::ParsedResume;
use sections::SectionKind;
use skills::{MinedSection, SkillSet};

pub const DEFAULT_HEADER_CHARS: usize = 1500;
pub const DEFAULT_SECTION_CHAR_BUDGET: usize = 2000;

/// Slicing limits for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Characters at the top of the document searched for identity fields.
    pub header_chars: usize,
    /// Maximum characters kept from any one section.
    pub section_char_budget: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            header_chars: DEFAULT_HEADER_CHARS,
            section_char_budget: DEFAULT_SECTION_CHAR_BUDGET,
        }
    }
}

/// Stateless resume parser. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeParser {
    config: ExtractionConfig,
}

impl ResumeParser {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Parses `raw` with open-ended date ranges closed at the current year.
    pub fn parse(&self, raw: &str) -> ParsedResume {
        self.parse_as_of(raw, Utc::now().year())
    }

    /// Parses `raw` with `present`/`current` ranges closed at `current_year`.
    pub fn parse_as_of(&self, raw: &str, current_year: i32) -> ParsedResume {
        guarded(|| self.extract(raw, current_year))
    }

    fn extract(&self, raw: &str, current_year: i32) -> ParsedResume {
        let normalized = normalizer::normalize_text(raw);
        let text: &str = &normalized;
        let header = sections::header(text, self.config.header_chars);
        let budget = self.config.section_char_budget;
        let section = move |kind: SectionKind| sections::section_body(text, kind, budget);

        let email = identity::extract_email(text);
        let full_name = identity::extract_name(header, text, email.as_deref());
        let phone = identity::extract_phone(text);
        let location = identity::extract_location(header, text);

        let total_experience_years = career::extract_experience_years(text, current_year);
        let current_role = career::extract_current_role(header, text);
        let seniority = career::determine_seniority(text, total_experience_years);

        let mined: Vec<MinedSection<'_>> = [
            section(SectionKind::Skills).map(MinedSection::List),
            section(SectionKind::Experience).map(MinedSection::Narrative),
            section(SectionKind::Projects).map(MinedSection::Narrative),
        ]
        .into_iter()
        .flatten()
        .collect();
        let SkillSet { skills, tools } = skills::extract_skills_and_tools(text, &mined);

        let education = section(SectionKind::Education)
            .map(education::extract_education)
            .unwrap_or_default();
        let work_experience = section(SectionKind::Experience)
            .map(work_history::extract_work_experience)
            .unwrap_or_default();
        let projects = section(SectionKind::Projects)
            .map(projects::extract_projects)
            .unwrap_or_default();

        let parsed = ParsedResume {
            full_name,
            email,
            phone,
            location,
            current_role,
            seniority,
            total_experience_years,
            skills,
            tools_and_technologies: tools,
            education,
            work_experience,
            projects,
            certifications: skills::extract_certifications(text),
            resume_summary: summary::extract_summary(text),
        };

        debug!(
            chars = text.len(),
            sections_mined = mined.len(),
            skills = parsed.skills.len(),
            tools = parsed.tools_and_technologies.len(),
            education = parsed.education.len(),
            work_experience = parsed.work_experience.len(),
            "resume parsed"
        );
        parsed
    }
}

/// Runs an extraction, converting a panic into the empty record.
fn guarded<F>(extract: F) -> ParsedResume
where
    F: FnOnce() -> ParsedResume,
{
    match panic::catch_unwind(AssertUnwindSafe(extract)) {
        Ok(parsed) => parsed,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(%reason, "extraction panicked; returning empty record");
            ParsedResume::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Degree, Seniority};

    const SAMPLE: &str = "Priya Sharma\r\nBackend Developer\r\npriya.sharma@example.com | +91 98765-43210 | Bengaluru\r\n\r\n\r\nSummary\r\nBackend developer with 6+ years of experience building payment platforms in Rust and Go.\r\n\r\nExperience\r\nAcme Payments | Senior Backend Engineer | 2019 \u{2013} Present\r\nBuilt settlement services in Rust, Kafka and PostgreSQL.\r\n\r\nGlobex | Software Developer | 2016 - 2019\r\nMaintained billing APIs in Java.\r\n\r\nEducation\r\nB.Tech in Computer Science, IIT Madras, 2016\r\n\r\nSkills\r\nRust, Go, Kafka, PostgreSQL, Docker, Leadership, Communication\r\n\r\nProjects\r\nLedger Sync - reconciliation engine\r\nTech Stack: Rust, Tokio\r\n\r\nCertifications\r\nAWS Certified Solutions Architect";

    fn parser() -> ResumeParser {
        ResumeParser::default()
    }

    #[test]
    fn test_full_resume() {
        let parsed = parser().parse_as_of(SAMPLE, 2026);

        assert_eq!(parsed.full_name.as_deref(), Some("Priya Sharma"));
        assert_eq!(parsed.email.as_deref(), Some("priya.sharma@example.com"));
        assert_eq!(parsed.phone.as_deref(), Some("9876543210"));
        assert_eq!(parsed.location.as_deref(), Some("Bengaluru"));
        assert_eq!(parsed.current_role.as_deref(), Some("Backend Developer"));
        assert_eq!(parsed.total_experience_years, Some(6));
        assert_eq!(parsed.seniority, Some(Seniority::Senior));

        assert_eq!(parsed.skills, vec!["Leadership", "Communication"]);
        assert_eq!(
            parsed.tools_and_technologies,
            vec!["Java", "Go", "Rust", "PostgreSQL", "AWS", "Docker", "Kafka", "Tokio"]
        );

        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.education[0].degree, Degree::Bachelor);
        assert_eq!(parsed.education[0].institution.as_deref(), Some("IIT Madras"));
        assert_eq!(parsed.education[0].year.as_deref(), Some("2016"));

        assert_eq!(parsed.work_experience.len(), 2);
        assert_eq!(parsed.work_experience[0].company.as_deref(), Some("Acme Payments"));
        assert_eq!(parsed.work_experience[0].end_year.as_deref(), Some("Present"));
        assert_eq!(parsed.work_experience[1].role.as_deref(), Some("Software Developer"));

        assert_eq!(parsed.projects.len(), 1);
        assert_eq!(parsed.projects[0].name.as_deref(), Some("Ledger Sync"));
        assert_eq!(parsed.projects[0].technologies, vec!["Rust", "Tokio"]);

        assert_eq!(parsed.certifications, vec!["AWS", "Docker", "Certified"]);
        assert!(parsed
            .resume_summary
            .as_deref()
            .is_some_and(|s| s.starts_with("Backend developer with 6+ years")));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parser().parse_as_of(SAMPLE, 2026);
        let second = parser().parse_as_of(SAMPLE, 2026);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let renormalized = parser().parse_as_of(&normalizer::normalize_text(SAMPLE), 2026);
        assert_eq!(first, renormalized);
    }

    #[test]
    fn test_empty_input_yields_default_record() {
        assert_eq!(parser().parse(""), ParsedResume::default());
        assert_eq!(parser().parse("   \n\t\r\n "), ParsedResume::default());
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        let garbage: String = (0u32..4000)
            .filter_map(|i| char::from_u32((i * 7919) % 0x2FFF))
            .collect();
        let parsed = parser().parse(&garbage);
        assert!(parsed.skills.len() <= skills::MAX_SKILLS);

        let parsed = parser().parse("\u{0}\u{1}\u{FFFD}@@@ --- 2099-1900 ||| ::");
        assert_eq!(parsed.email, None);
    }

    #[test]
    fn test_collections_are_bounded_and_disjoint() {
        let text = format!(
            "Skills\n{}\n{}\n{}",
            lexicon::SOFT_SKILLS.join(", "),
            lexicon::TECH_TOOLS.join(", "),
            lexicon::CERTIFICATIONS.join(", ")
        );
        let parsed = parser().parse(&text);

        assert!(parsed.skills.len() <= skills::MAX_SKILLS);
        assert!(parsed.tools_and_technologies.len() <= skills::MAX_TOOLS_WITH_SECTIONS);
        assert!(parsed.certifications.len() <= skills::MAX_CERTIFICATIONS);
        for tool in &parsed.tools_and_technologies {
            assert!(
                !parsed.skills.iter().any(|s| s.eq_ignore_ascii_case(tool)),
                "{tool} appears in both skills and tools"
            );
        }
    }

    #[test]
    fn test_education_has_one_entry_per_degree() {
        let text = "Education\nB.Sc Physics, 2012\nB.Tech Computer Science, 2016\nM.Tech, 2018\nMaster of Science, 2019";
        let parsed = parser().parse(text);
        let mut degrees: Vec<Degree> = parsed.education.iter().map(|e| e.degree).collect();
        let before = degrees.len();
        degrees.dedup();
        assert_eq!(degrees.len(), before);
        assert_eq!(degrees, vec![Degree::Bachelor, Degree::Master]);
    }

    #[test]
    fn test_email_normalization() {
        let parsed = parser().parse("Contact me at John.Doe@EXAMPLE.com for details");
        assert_eq!(parsed.email.as_deref(), Some("john.doe@example.com"));
    }

    #[test]
    fn test_phone_normalization() {
        let parsed = parser().parse("Phone: +91 98765-43210");
        assert_eq!(parsed.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_experience_aggregation_against_current_year() {
        let text = "Acme 2018 - 2021\nGlobex 2021 - Present";
        assert_eq!(parser().parse_as_of(text, 2026).total_experience_years, Some(8));

        let year = Utc::now().year();
        let expected = (2021 - 2018) + (year - 2021);
        assert_eq!(
            parser().parse(text).total_experience_years,
            Some(expected as u32)
        );
    }

    #[test]
    fn test_zero_span_ranges_leave_experience_and_seniority_unset() {
        let text = "Jane Smith\nAcme Corp 2020 - 2020\nGlobex 2021 - 2019";
        let parsed = parser().parse_as_of(text, 2026);
        assert_eq!(parsed.total_experience_years, None);
        assert_eq!(parsed.seniority, None);
    }

    #[test]
    fn test_seniority_inferred_from_seven_years() {
        let parsed = parser().parse_as_of("Worked at Acme 2012 - 2019", 2026);
        assert_eq!(parsed.total_experience_years, Some(7));
        assert_eq!(parsed.seniority, Some(Seniority::Senior));
    }

    #[test]
    fn test_job_title_never_becomes_name() {
        let parsed = parser().parse("Senior Software Engineer\nPhone: 9876543210");
        assert_ne!(parsed.full_name.as_deref(), Some("Senior Software Engineer"));
    }

    #[test]
    fn test_location_gazetteer() {
        let parsed = parser().parse("Backend engineer based in Bengaluru, India");
        assert_eq!(parsed.location.as_deref(), Some("Bengaluru"));
    }

    #[test]
    fn test_small_header_hides_identity_fields() {
        let config = ExtractionConfig {
            header_chars: 5,
            ..ExtractionConfig::default()
        };
        let parsed = ResumeParser::new(config).parse("Noise\nJane Smith\nBased in Pune");
        assert_eq!(parsed.full_name, None);
        assert_eq!(parsed.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_panic_becomes_empty_record() {
        let parsed = guarded(|| panic!("extractor bug"));
        assert_eq!(parsed, ParsedResume::default());
    }
}
