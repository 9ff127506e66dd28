// src/analysis/vocab.rs
//! Curated vocabularies for closed-vocabulary extraction. Static
//! configuration data: loaded once, never mutated. Matching everywhere is
//! case-insensitive substring containment against normalized text.

/// Job-title tokens checked against the normalized résumé text.
pub const JOB_TITLES: &[&str] = &[
    "software engineer",
    "software developer",
    "web developer",
    "frontend developer",
    "front end developer",
    "backend developer",
    "back end developer",
    "full stack developer",
    "mobile developer",
    "android developer",
    "ios developer",
    "data scientist",
    "data analyst",
    "data engineer",
    "machine learning engineer",
    "ml engineer",
    "devops engineer",
    "site reliability engineer",
    "cloud engineer",
    "platform engineer",
    "security engineer",
    "qa engineer",
    "test engineer",
    "systems engineer",
    "embedded engineer",
    "database administrator",
    "network engineer",
    "solutions architect",
    "software architect",
    "engineering manager",
    "product manager",
    "project manager",
    "program manager",
    "business analyst",
    "ux designer",
    "ui designer",
    "technical writer",
    "scrum master",
    "consultant",
    "researcher",
];

/// Seniority prefixes combined with each title ("senior" + " " + title).
pub const SENIORITY_LEVELS: &[&str] = &["junior", "senior", "lead", "principal"];

/// Technical and professional skill tokens.
pub const SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "go",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "sql",
    "nosql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "docker",
    "kubernetes",
    "terraform",
    "aws",
    "azure",
    "gcp",
    "linux",
    "git",
    "ci/cd",
    "machine learning",
    "deep learning",
    "data analysis",
    "agile",
    "scrum",
    "project management",
    "communication",
];

/// Action verbs the suggestion rules look for among important terms.
pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "created",
    "implemented",
    "designed",
    "improved",
    "launched",
];

/// Tokens indicating measurable achievements in work-experience sentences.
pub const QUANTIFIER_WORDS: &[&str] = &[
    "percent",
    "%",
    "increased",
    "decreased",
    "reduced",
    "improved",
];
