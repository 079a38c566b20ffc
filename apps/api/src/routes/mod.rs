pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

/// Room for multipart framing around the largest accepted upload.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route("/api/analyze", post(analysis::handle_analyze_upload))
        .route("/api/analyze/text", post(analysis::handle_analyze_text))
        // Job search proxy
        .route("/api/jobs", get(jobs::handle_job_listings))
        .route("/api/jobSearch", post(jobs::handle_job_search))
        // Application tracking; GET takes a user id, PUT/DELETE an application id
        .route("/api/applications", post(applications::handle_create_application))
        .route(
            "/api/applications/:id",
            get(applications::handle_list_applications)
                .put(applications::handle_update_application)
                .delete(applications::handle_delete_application),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::analysis::orchestrator::AnalysisOrchestrator;
    use crate::config::Config;
    use crate::jobs::jooble::JoobleClient;

    fn test_state() -> AppState {
        let config = Config {
            database_url: "postgres://localhost/resume_test".to_string(),
            db_max_connections: 1,
            openai_api_key: None,
            use_gpt4: false,
            deepseek_api_key: None,
            jooble_api_key: None,
            port: 0,
            rust_log: "info".to_string(),
            max_resume_chars: 4000,
            max_upload_bytes: 1024,
        };
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy(&config.database_url)
                .unwrap(),
            orchestrator: AnalysisOrchestrator::new(Vec::new()),
            jobs: JoobleClient::new(None).unwrap(),
            config,
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_post(file_name: &str, content_type: &str, payload: &str) -> Request<Body> {
        let boundary = "resume-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {payload}\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_text_without_providers_falls_back() {
        let (status, body) = send(json_post(
            "/api/analyze/text",
            json!({ "text": "Senior Python developer with SQL and AWS. Bachelor degree. Led a team of 5." }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["providers"], json!([]));
        let skills = body["analysis"]["skills"].as_array().unwrap();
        assert!(skills.iter().any(|s| s == "Python"));
        assert!(body["analysis"]["resumeScore"].as_i64().unwrap() >= 0);
        assert!(!body["searchQuery"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_text_rejects_blank_text() {
        let (status, body) = send(json_post("/api/analyze/text", json!({ "text": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_upload_plain_text() {
        let (status, body) = send(multipart_post(
            "cv.txt",
            "text/plain",
            "Project manager experienced in Agile and Scrum delivery.",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
    }

    #[tokio::test]
    async fn test_analyze_upload_unsupported_type() {
        let (status, _) = send(multipart_post("cv.png", "image/png", "not really an image")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_upload_too_large() {
        let payload = "a".repeat(2048);
        let (status, body) = send(multipart_post("cv.txt", "text/plain", &payload)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_analyze_upload_over_body_limit() {
        let payload = "a".repeat(200 * 1024);
        let (status, body) = send(multipart_post("cv.txt", "text/plain", &payload)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_job_search_unconfigured() {
        let (status, body) = send(json_post(
            "/api/jobSearch",
            json!({ "keywords": "rust developer", "location": "Berlin" }),
        ))
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_job_listings_unconfigured() {
        let request = Request::builder()
            .uri("/api/jobs?query=nurse&page=2")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_update_requires_uuid() {
        let request = Request::builder()
            .method("PUT")
            .uri("/api/applications/not-a-uuid")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"status":"Interview"}"#))
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
