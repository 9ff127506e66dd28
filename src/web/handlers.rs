// src/web/handlers.rs
//! Request handlers. Input validation (missing file, empty filename,
//! unsupported extension, undecodable bytes) is rejected here with 400
//! before the pipeline runs; everything after that degrades inside the
//! pipeline instead of failing the request.

use crate::documents;
use crate::pipeline::{AnalysisOrchestrator, AnalysisOutcome};
use crate::web::types::{ErrorResponse, HealthResponse, ResumeUploadForm};
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

type BadRequest = Custom<Json<ErrorResponse>>;

fn bad_request(message: impl Into<String>) -> BadRequest {
    Custom(Status::BadRequest, Json(ErrorResponse::new(message)))
}

pub async fn process_resume_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
    orchestrator: &State<AnalysisOrchestrator>,
) -> Result<Json<AnalysisOutcome>, BadRequest> {
    let location = upload.location.clone();
    let file = match upload.file.as_mut() {
        Some(file) => file,
        None => return Err(bad_request("No file part")),
    };

    let filename = file
        .raw_name()
        .and_then(|n| n.as_str())
        .unwrap_or_default()
        .to_string();

    if filename.is_empty() {
        return Err(bad_request("No selected file"));
    }

    if let Err(e) = documents::validate_file_extension(&filename) {
        return Err(bad_request(e.to_string()));
    }

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));
    if let Err(e) = file.persist_to(&temp_path).await {
        error!("Failed to save uploaded file: {}", e);
        return Err(bad_request("Failed to read uploaded file"));
    }

    let raw = match tokio::fs::read(&temp_path).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Failed to read uploaded file: {}", e);
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(bad_request("Failed to read uploaded file"));
        }
    };
    let _ = tokio::fs::remove_file(&temp_path).await;

    let text = match documents::decode_text(&raw) {
        Ok(text) => text,
        Err(_) => {
            return Err(bad_request(
                "Unable to decode file. Unsupported encoding.",
            ));
        }
    };

    info!("Processing resume upload: {} ({} bytes)", filename, raw.len());

    let outcome = orchestrator.analyze(&text, location.as_deref()).await;

    Ok(Json(outcome))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
