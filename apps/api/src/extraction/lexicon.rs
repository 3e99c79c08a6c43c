//! Fixed vocabularies shared by the field extractors.
//!
//! Everything here is immutable data. Matching against these lists is always
//! case-insensitive and whole-word (see `matching::contains_term`).

use crate::models::Seniority;

/// Words that disqualify a line or token from being a person's name:
/// job-title words, section headings and document labels.
pub const NAME_BLACKLIST: &[&str] = &[
    "developer",
    "engineer",
    "engineering",
    "stack",
    "backend",
    "frontend",
    "software",
    "lead",
    "senior",
    "junior",
    "expert",
    "architect",
    "manager",
    "executive",
    "student",
    "machine",
    "learning",
    "data",
    "analyst",
    "full",
    "dot",
    "net",
    "java",
    "python",
    "react",
    "web",
    "ui",
    "ux",
    "designer",
    "consultant",
    "graduate",
    "intern",
    "associate",
    "technology",
    "solution",
    "solutions",
    "quality",
    "tester",
    "qa",
    "devops",
    "cloud",
    "system",
    "systems",
    "admin",
    "network",
    "security",
    "cyber",
    "project",
    "projects",
    "program",
    "delivery",
    "service",
    "services",
    "operation",
    "operations",
    "sales",
    "marketing",
    "hr",
    "recruiter",
    "business",
    "resume",
    "cv",
    "curriculum",
    "vitae",
    "profile",
    "summary",
    "objective",
    "education",
    "experience",
    "skills",
    "certifications",
    "professional",
    "career",
    "technical",
    "personal",
    "details",
    "information",
];

/// Labels that mark a line as contact details rather than a name.
pub const CONTACT_KEYWORDS: &[&str] = &[
    "phone", "mobile", "email", "e-mail", "contact", "address", "linkedin", "github", "location",
    "tel",
];

/// Known city names, lower case. Order is match priority.
pub const CITY_GAZETTEER: &[&str] = &[
    "mumbai",
    "new delhi",
    "delhi",
    "bangalore",
    "bengaluru",
    "hyderabad",
    "chennai",
    "kolkata",
    "pune",
    "ahmedabad",
    "jaipur",
    "lucknow",
    "chandigarh",
    "gurgaon",
    "gurugram",
    "noida",
    "kochi",
    "thiruvananthapuram",
    "coimbatore",
    "madurai",
    "mysore",
    "mysuru",
    "visakhapatnam",
    "nagpur",
    "indore",
    "bhopal",
    "patna",
    "ranchi",
    "bhubaneswar",
    "guwahati",
    "kanpur",
    "surat",
    "vadodara",
];

/// Candidate locations equal to one of these are discarded.
pub const LOCATION_STOPLIST: &[&str] = &[
    "road", "street", "lane", "email", "name", "phone", "mobile", "contact", "address", "nagar",
];

/// Soft and behavioural skills, in canonical casing.
pub const SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Communication",
    "Problem Solving",
    "Team Work",
    "Teamwork",
    "Adaptability",
    "Critical Thinking",
    "Creativity",
    "Time Management",
    "Organization",
    "Customer Service",
    "Decision Making",
    "Negotiation",
    "Public Speaking",
    "Analytical",
    "Project Management",
    "Agile",
    "Scrum",
    "Jira",
    "Collaboration",
];

/// Technical tools and technologies, in canonical casing.
pub const TECH_TOOLS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Swift",
    "Go",
    "Rust",
    "Kotlin",
    "SQL",
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring Boot",
    "Laravel",
    "ASP.NET",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Elasticsearch",
    "Firebase",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "HTML",
    "CSS",
    "Sass",
    "Tailwind",
    "Bootstrap",
    "Redux",
    "GraphQL",
    "REST API",
    "Microservices",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "Data Science",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "TensorFlow",
    "PyTorch",
    "Git",
    "CI/CD",
    "Postman",
    "Tableau",
    "Power BI",
    "Excel",
    "Figma",
    "Adobe XD",
    "Linux",
    "Windows",
];

/// Tokens never accepted by section mining, compared lower case.
pub const MINING_STOPWORDS: &[&str] = &[
    "skills",
    "skill",
    "technical skills",
    "soft skills",
    "languages",
    "language",
    "tools",
    "frameworks",
    "framework",
    "technologies",
    "technology",
    "tech",
    "tech stack",
    "stack",
    "built with",
    "databases",
    "database",
    "platforms",
    "others",
    "other",
    "and",
    "or",
    "the",
    "with",
    "using",
    "etc",
    "present",
    "current",
    "responsibilities",
    "achievements",
    "description",
    "role",
    "company",
    "project",
    "projects",
    "experience",
];

/// A role phrase must contain at least one of these.
pub const ROLE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "lead",
    "architect",
    "analyst",
    "consultant",
    "designer",
    "product",
    "project",
    "business",
    "data",
    "devops",
    "qa",
    "tester",
    "security",
    "network",
    "system",
    "administrator",
    "executive",
    "director",
    "intern",
    "scientist",
];

/// Ordered keyword → level map; the first keyword present in the text wins.
pub const SENIORITY_KEYWORDS: &[(&str, Seniority)] = &[
    ("intern", Seniority::Intern),
    ("internship", Seniority::Intern),
    ("trainee", Seniority::Intern),
    ("junior", Seniority::Junior),
    ("mid-level", Seniority::Mid),
    ("mid level", Seniority::Mid),
    ("intermediate", Seniority::Mid),
    ("senior", Seniority::Senior),
    ("lead", Seniority::Lead),
    ("principal", Seniority::Lead),
    ("architect", Seniority::Lead),
    ("staff", Seniority::Lead),
    ("director", Seniority::Lead),
];

/// Academic disciplines, in canonical casing. More specific names first.
pub const DISCIPLINES: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Software Engineering",
    "Electrical Engineering",
    "Electronics and Communication",
    "Mechanical Engineering",
    "Civil Engineering",
    "Data Science",
    "Artificial Intelligence",
    "Business Administration",
    "Engineering",
    "Business",
    "Finance",
    "Marketing",
    "Commerce",
    "Physics",
    "Chemistry",
    "Mathematics",
    "Statistics",
    "Economics",
];

/// Certification vendors, acronyms and generic terms, in canonical casing.
pub const CERTIFICATIONS: &[&str] = &[
    "AWS",
    "Google Cloud",
    "Azure",
    "Kubernetes",
    "Docker",
    "Jenkins",
    "Terraform",
    "Certified",
    "Certification",
    "Certificate",
    "CISSP",
    "CEH",
    "CompTIA",
    "CCNA",
    "PMP",
    "Scrum Master",
    "Six Sigma",
    "ITIL",
    "TOGAF",
    "Salesforce",
    "SAP",
    "Oracle",
    "IBM",
    "Microsoft",
    "Coursera",
    "Udacity",
    "edX",
];
