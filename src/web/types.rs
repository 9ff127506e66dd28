// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
}

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    /// Optional at the form level so a missing part surfaces as the
    /// documented 400 instead of failing the form guard with 422.
    pub file: Option<TempFile<'f>>,
    /// Optional location to scope the job search; the configured default
    /// applies when absent.
    pub location: Option<String>,
}
