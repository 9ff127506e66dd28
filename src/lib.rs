//! Resume analysis and job-matching engine: turns raw résumé text into
//! structured features, scores it, generates improvement suggestions, and
//! ranks externally retrieved job postings against it.

pub mod analysis;
pub mod config;
pub mod documents;
pub mod jobs;
pub mod nlp;
pub mod pipeline;
pub mod web;

pub use config::AppConfig;
pub use pipeline::{AnalysisOrchestrator, AnalysisOutcome};
pub use web::start_web_server;
