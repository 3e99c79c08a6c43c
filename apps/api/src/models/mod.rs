pub mod resume;

pub use resume::{Degree, EducationEntry, ParsedResume, ProjectEntry, Seniority, WorkExperienceEntry};
