// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::config::AppConfig;
use crate::jobs::JobPostingGateway;
use crate::nlp::{LanguageModel, RuleLanguageModel};
use crate::pipeline::{AnalysisOrchestrator, AnalysisOutcome};
use anyhow::{Context, Result};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use std::sync::Arc;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/process_resume", data = "<upload>")]
pub async fn process_resume(
    upload: Form<ResumeUploadForm<'_>>,
    orchestrator: &State<AnalysisOrchestrator>,
) -> Result<Json<AnalysisOutcome>, rocket::response::status::Custom<Json<ErrorResponse>>> {
    handlers::process_resume_handler(upload, orchestrator).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers. The missing-file and validation responses are produced by
// the handler itself; these cover requests that never reach it.

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Bad request"))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Malformed form data"))
}

#[rocket::catch(413)]
pub fn payload_too_large() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Uploaded file is too large"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}

/// Assembles the Rocket instance around a ready orchestrator.
pub fn build_rocket(orchestrator: AnalysisOrchestrator) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .attach(Cors)
        .manage(orchestrator)
        .register(
            "/",
            catchers![bad_request, unprocessable, payload_too_large, internal_error],
        )
        .mount("/", routes![process_resume, health, options])
}

/// Builds the shared state and launches the server. The language model and
/// curated vocabularies are the only process-wide state; both are read-only
/// after this point.
pub async fn start_web_server(config: AppConfig, port: u16) -> Result<()> {
    let model: Arc<dyn LanguageModel> =
        Arc::new(RuleLanguageModel::new().context("Failed to build language model")?);

    let provider = config.build_provider()?;
    let gateway = JobPostingGateway::new(provider, config.fallback_location.clone());
    let orchestrator =
        AnalysisOrchestrator::new(model, gateway, config.default_location.clone());

    info!("Starting resume analysis API server on port {}", port);

    let figment = rocket::Config::figment().merge(("port", port));

    let _rocket = build_rocket(orchestrator)
        .configure(figment)
        .launch()
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobPosting;
    use crate::nlp::RuleLanguageModel;
    use anyhow::Result as AnyResult;
    use rocket::http::ContentType;
    use rocket::local::blocking::Client;

    struct StubProvider;

    #[rocket::async_trait]
    impl crate::jobs::JobSearchProvider for StubProvider {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn search(&self, _query: &str, _location: &str) -> AnyResult<Vec<JobPosting>> {
            Ok(Vec::new())
        }
    }

    fn client() -> Client {
        let model: Arc<dyn LanguageModel> = Arc::new(RuleLanguageModel::new().unwrap());
        let gateway = JobPostingGateway::new(Box::new(StubProvider), "United States".to_string());
        let orchestrator = AnalysisOrchestrator::new(model, gateway, String::new());
        Client::tracked(build_rocket(orchestrator)).unwrap()
    }

    const BOUNDARY: &str = "X-RESUME-UPLOAD-BOUNDARY";

    fn multipart_content_type() -> ContentType {
        ContentType::parse_flexible(&format!("multipart/form-data; boundary={BOUNDARY}")).unwrap()
    }

    fn field_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(filename: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: text/plain\r\n\r\n{content}\r\n"
        )
    }

    fn close_delimiter() -> String {
        format!("--{BOUNDARY}--\r\n")
    }

    #[test]
    fn test_health_endpoint() {
        let client = client();
        let response = client.get("/health").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert!(response.into_string().unwrap().contains("ok"));
    }

    #[test]
    fn test_upload_without_file_part_is_json_400() {
        let client = client();
        let body = format!("{}{}", field_part("location", "Boston"), close_delimiter());

        let response = client
            .post("/process_resume")
            .header(multipart_content_type())
            .body(body)
            .dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_string().unwrap();
        assert_eq!(body, r#"{"error":"No file part"}"#);
    }

    #[test]
    fn test_upload_with_unsupported_extension_is_json_400() {
        let client = client();
        let body = format!("{}{}", file_part("resume.exe", "text"), close_delimiter());

        let response = client
            .post("/process_resume")
            .header(multipart_content_type())
            .body(body)
            .dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        assert!(response.into_string().unwrap().contains("error"));
    }

    #[test]
    fn test_upload_txt_resume_returns_outcome() {
        let client = client();
        let resume = "John Smith\nWork Experience\nManaged a team.\nSkills\nPython.";
        let body = format!("{}{}", file_part("resume.txt", resume), close_delimiter());

        let response = client
            .post("/process_resume")
            .header(multipart_content_type())
            .body(body)
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().unwrap();
        assert!(body.contains("\"score\""));
        assert!(body.contains("\"suggestions\""));
        assert!(body.contains("\"matching_jobs\""));
    }
}
