// src/jobs/mod.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod gateway;
pub mod matcher;
pub mod providers;

pub use gateway::JobPostingGateway;
pub use matcher::MatchScorer;

/// Sentinel for optional provider fields. Normalized records never carry
/// absent values, only this explicit default.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Normalized job posting produced at the provider-adapter boundary. The
/// rest of the pipeline never sees provider-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    pub apply_link: String,
    pub location: String,
    pub salary_min: String,
    pub salary_max: String,
    pub qualifications: Vec<String>,
}

/// One ranked search result returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJob {
    pub title: String,
    pub company: String,
    /// Percentage in [0, 100], rounded to 2 decimals.
    pub match_score: f64,
    pub job_link: String,
    pub skill_match: usize,
    pub experience_match: bool,
    pub location: String,
    pub salary_min: String,
    pub salary_max: String,
    pub description: String,
}

/// One outbound query against an external job-search provider. Adapters
/// normalize the provider payload into `JobPosting` records; retry and
/// failure-absorption policy live in the gateway, not here.
#[rocket::async_trait]
pub trait JobSearchProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobPosting>>;
}
