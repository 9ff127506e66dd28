// src/jobs/gateway.rs
//! Gateway in front of a `JobSearchProvider`. Owns the retry and
//! failure-absorption policy: a zero-result query with a non-empty location
//! is retried exactly once against the broad fallback location, and any
//! transport failure yields an empty posting list instead of propagating.

use super::{JobPosting, JobSearchProvider};
use tracing::{info, warn};

pub struct JobPostingGateway {
    provider: Box<dyn JobSearchProvider>,
    fallback_location: String,
}

impl JobPostingGateway {
    pub fn new(provider: Box<dyn JobSearchProvider>, fallback_location: String) -> Self {
        Self {
            provider,
            fallback_location,
        }
    }

    pub async fn search(&self, query: &str, location: &str) -> Vec<JobPosting> {
        let postings = match self.provider.search(query, location).await {
            Ok(postings) => postings,
            Err(e) => {
                warn!(
                    "Job search failed against {} provider: {}",
                    self.provider.name(),
                    e
                );
                return Vec::new();
            }
        };

        if !postings.is_empty() || location.is_empty() {
            return postings;
        }

        info!(
            "No postings for '{}' in '{}', retrying with '{}'",
            query, location, self.fallback_location
        );

        match self.provider.search(query, &self.fallback_location).await {
            Ok(postings) => postings,
            Err(e) => {
                warn!("Fallback job search failed: {}", e);
                Vec::new()
            }
        }
    }
}
