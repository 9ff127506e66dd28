// src/jobs/providers.rs
//! Provider adapters. Two interchangeable external services back the same
//! `JobSearchProvider` interface: a direct-search provider returning a flat
//! payload, and a paged provider requiring explicit page/app-id/app-key
//! parameters. All normalization into `JobPosting` happens here.

use super::{JobPosting, JobSearchProvider, NOT_SPECIFIED};
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

fn build_client(timeout_seconds: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .context("Failed to create HTTP client")
}

/// Provider descriptions arrive as HTML fragments; reduce them to
/// whitespace-collapsed plain text before they enter the scorer.
fn strip_html(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_salary(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0}", v),
        None => NOT_SPECIFIED.to_string(),
    }
}

fn or_not_specified(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED.to_string(),
    }
}

// Direct-search provider

#[derive(Debug, Deserialize)]
struct DirectSearchPayload {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Vec<DirectJob>,
}

#[derive(Debug, Deserialize)]
struct DirectJob {
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    employer_name: Option<String>,
    #[serde(default)]
    job_description: Option<String>,
    #[serde(default)]
    job_apply_link: Option<String>,
    #[serde(default)]
    job_city: Option<String>,
    #[serde(default)]
    job_min_salary: Option<f64>,
    #[serde(default)]
    job_max_salary: Option<f64>,
    #[serde(default)]
    job_highlights: Option<DirectHighlights>,
}

#[derive(Debug, Deserialize)]
struct DirectHighlights {
    #[serde(rename = "Qualifications", default)]
    qualifications: Vec<String>,
}

pub struct DirectSearchProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DirectSearchProvider {
    pub fn new(base_url: String, api_key: String, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            base_url,
            api_key,
        })
    }
}

#[rocket::async_trait]
impl JobSearchProvider for DirectSearchProvider {
    fn name(&self) -> &'static str {
        "direct"
    }

    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobPosting>> {
        let url = format!("{}/search", self.base_url);
        let full_query = if location.is_empty() {
            query.to_string()
        } else {
            format!("{} in {}", query, location)
        };

        info!("Querying direct provider: {}", full_query);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&[("query", full_query.as_str()), ("num_pages", "1")])
            .send()
            .await
            .context("Direct provider request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Direct provider returned error status {}", status);
        }

        let payload: DirectSearchPayload = response
            .json()
            .await
            .context("Failed to parse direct provider payload")?;

        if let Some(status) = payload.status.as_deref() {
            if status != "OK" {
                anyhow::bail!("Direct provider reported status {}", status);
            }
        }

        Ok(payload.data.into_iter().map(normalize_direct_job).collect())
    }
}

fn normalize_direct_job(job: DirectJob) -> JobPosting {
    JobPosting {
        title: or_not_specified(job.job_title),
        company: or_not_specified(job.employer_name),
        description: strip_html(&job.job_description.unwrap_or_default()),
        apply_link: or_not_specified(job.job_apply_link),
        location: or_not_specified(job.job_city),
        salary_min: format_salary(job.job_min_salary),
        salary_max: format_salary(job.job_max_salary),
        qualifications: job
            .job_highlights
            .map(|h| h.qualifications)
            .unwrap_or_default(),
    }
}

// Paged provider

#[derive(Debug, Deserialize)]
struct PagedSearchPayload {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    results: Vec<PagedJob>,
}

#[derive(Debug, Deserialize)]
struct PagedJob {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    company: Option<PagedName>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    redirect_url: Option<String>,
    #[serde(default)]
    location: Option<PagedName>,
    #[serde(default)]
    salary_min: Option<f64>,
    #[serde(default)]
    salary_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PagedName {
    #[serde(default)]
    display_name: Option<String>,
}

pub struct PagedSearchProvider {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl PagedSearchProvider {
    pub fn new(
        base_url: String,
        app_id: String,
        app_key: String,
        timeout_seconds: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            base_url,
            app_id,
            app_key,
        })
    }
}

#[rocket::async_trait]
impl JobSearchProvider for PagedSearchProvider {
    fn name(&self) -> &'static str {
        "paged"
    }

    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobPosting>> {
        // First page only; one query per pipeline run.
        let url = format!("{}/search/1", self.base_url);

        info!("Querying paged provider: {} ({})", query, location);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("what", query),
                ("where", location),
                ("results_per_page", "20"),
            ])
            .send()
            .await
            .context("Paged provider request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Paged provider returned error status {}", status);
        }

        let payload: PagedSearchPayload = response
            .json()
            .await
            .context("Failed to parse paged provider payload")?;

        info!("Paged provider reports {} total results", payload.count);

        Ok(payload.results.into_iter().map(normalize_paged_job).collect())
    }
}

fn normalize_paged_job(job: PagedJob) -> JobPosting {
    JobPosting {
        title: or_not_specified(job.title),
        company: or_not_specified(job.company.and_then(|c| c.display_name)),
        description: strip_html(&job.description.unwrap_or_default()),
        apply_link: or_not_specified(job.redirect_url),
        location: or_not_specified(job.location.and_then(|l| l.display_name)),
        salary_min: format_salary(job.salary_min),
        salary_max: format_salary(job.salary_max),
        qualifications: Vec::new(),
    }
}
