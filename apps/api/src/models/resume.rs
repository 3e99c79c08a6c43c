use serde::{Deserialize, Serialize};

/// Career level inferred from explicit keywords or from total experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    /// Maps total years of experience onto a level.
    pub fn from_years(years: u32) -> Self {
        match years {
            0 => Seniority::Intern,
            1 => Seniority::Junior,
            2..=4 => Seniority::Mid,
            5..=9 => Seniority::Senior,
            _ => Seniority::Lead,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Intern => "Intern",
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
            Seniority::Lead => "Lead",
        }
    }
}

/// Fixed degree taxonomy. Declaration order is the order entries are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    Phd,
    Diploma,
    #[serde(rename = "High School")]
    HighSchool,
}

impl Degree {
    pub const ALL: [Degree; 5] = [
        Degree::Bachelor,
        Degree::Master,
        Degree::Phd,
        Degree::Diploma,
        Degree::HighSchool,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Degree,
    pub field: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_year: Option<String>,
    /// `"Present"` when the range is open-ended.
    pub end_year: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}

/// Structured candidate profile produced by one parse call.
///
/// `Default` is the "nothing resolved" record returned for empty input and
/// for any document that fails before or during extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub current_role: Option<String>,
    pub seniority: Option<Seniority>,
    pub total_experience_years: Option<u32>,
    pub skills: Vec<String>,
    pub tools_and_technologies: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<String>,
    pub resume_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_thresholds() {
        assert_eq!(Seniority::from_years(0), Seniority::Intern);
        assert_eq!(Seniority::from_years(1), Seniority::Junior);
        assert_eq!(Seniority::from_years(2), Seniority::Mid);
        assert_eq!(Seniority::from_years(4), Seniority::Mid);
        assert_eq!(Seniority::from_years(7), Seniority::Senior);
        assert_eq!(Seniority::from_years(10), Seniority::Lead);
        assert_eq!(Seniority::from_years(25), Seniority::Lead);
    }

    #[test]
    fn test_degree_serde_names() {
        assert_eq!(serde_json::to_string(&Degree::Phd).unwrap(), r#""PhD""#);
        assert_eq!(
            serde_json::to_string(&Degree::HighSchool).unwrap(),
            r#""High School""#
        );
        let d: Degree = serde_json::from_str(r#""Bachelor""#).unwrap();
        assert_eq!(d, Degree::Bachelor);
    }

    #[test]
    fn test_default_record_serializes_nulls_and_empty_arrays() {
        let json = serde_json::to_value(ParsedResume::default()).unwrap();
        assert!(json["full_name"].is_null());
        assert!(json["seniority"].is_null());
        assert!(json["total_experience_years"].is_null());
        assert_eq!(json["skills"], serde_json::json!([]));
        assert_eq!(json["education"], serde_json::json!([]));
    }

    #[test]
    fn test_seniority_serializes_as_level_name() {
        assert_eq!(
            serde_json::to_string(&Seniority::Senior).unwrap(),
            r#""Senior""#
        );
        assert_eq!(Seniority::Mid.as_str(), "Mid");
    }
}
