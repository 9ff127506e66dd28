// src/config.rs
//! Environment-driven configuration. Loaded once at startup, read-only
//! afterwards.

use crate::jobs::providers::{DirectSearchProvider, PagedSearchProvider};
use crate::jobs::JobSearchProvider;
use anyhow::Result;
use tracing::info;

const DEFAULT_FALLBACK_LOCATION: &str = "United States";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Direct,
    Paged,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderKind,
    pub direct_api_url: String,
    pub direct_api_key: String,
    pub paged_api_url: String,
    pub paged_app_id: String,
    pub paged_app_key: String,
    /// Broadened location used for the single zero-result retry.
    pub fallback_location: String,
    /// Location attached to the first query when the caller supplies none.
    pub default_location: String,
    pub timeout_seconds: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let provider = match std::env::var("JOB_PROVIDER").as_deref() {
            Ok("paged") => ProviderKind::Paged,
            _ => ProviderKind::Direct,
        };
        info!("Configured job provider: {:?}", provider);

        let timeout_seconds = std::env::var("JOB_SEARCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            provider,
            direct_api_url: std::env::var("DIRECT_API_URL")
                .unwrap_or_else(|_| "https://api.jobsearch.example.com".to_string()),
            direct_api_key: std::env::var("DIRECT_API_KEY").unwrap_or_default(),
            paged_api_url: std::env::var("PAGED_API_URL")
                .unwrap_or_else(|_| "https://api.pagedjobs.example.com/v1/jobs/us".to_string()),
            paged_app_id: std::env::var("PAGED_APP_ID").unwrap_or_default(),
            paged_app_key: std::env::var("PAGED_APP_KEY").unwrap_or_default(),
            fallback_location: std::env::var("FALLBACK_LOCATION")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_LOCATION.to_string()),
            default_location: std::env::var("DEFAULT_LOCATION").unwrap_or_default(),
            timeout_seconds,
        })
    }

    pub fn build_provider(&self) -> Result<Box<dyn JobSearchProvider>> {
        match self.provider {
            ProviderKind::Direct => Ok(Box::new(DirectSearchProvider::new(
                self.direct_api_url.clone(),
                self.direct_api_key.clone(),
                self.timeout_seconds,
            )?)),
            ProviderKind::Paged => Ok(Box::new(PagedSearchProvider::new(
                self.paged_api_url.clone(),
                self.paged_app_id.clone(),
                self.paged_app_key.clone(),
                self.timeout_seconds,
            )?)),
        }
    }
}
