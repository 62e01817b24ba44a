pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::GeminiClient;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "test-boundary-7MA4YWxk";

    fn test_router() -> Router {
        // Dummy key: the paths under test never reach the network
        let state = AppState {
            llm: GeminiClient::new("test-key".to_string()),
        };
        build_router(state)
    }

    fn multipart_request(field_name: &str, filename: Option<&str>, content: &[u8]) -> Request<Body> {
        let disposition = match filename {
            Some(name) => {
                format!("Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{name}\"")
            }
            None => format!("Content-Disposition: form-data; name=\"{field_name}\""),
        };
        let mut body = Vec::new();
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\n{disposition}\r\nContent-Type: application/pdf\r\n\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_upload_page() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_probe() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_missing_file_field() {
        let request = multipart_request("attachment", Some("resume.pdf"), b"%PDF-1.4");
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"error": "No file uploaded"}));
    }

    #[tokio::test]
    async fn test_analyze_empty_filename() {
        let request = multipart_request("file", Some(""), b"%PDF-1.4");
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"error": "No file selected"}));
    }

    #[tokio::test]
    async fn test_analyze_textless_pdf_returns_sentinel() {
        // A parseable PDF with no text layer short-circuits to the sentinel
        // 200 body; the model is never called (the dummy key would fail if
        // it were)
        let pdf = crate::analysis::extract::textless_pdf_bytes();
        let request = multipart_request("file", Some("resume.pdf"), &pdf);
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"result": "ERROR: Resume text could not be extracted."})
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_pdf_extension() {
        let request = multipart_request("file", Some("resume.docx"), b"%PDF-1.4");
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Only PDF files are allowed"})
        );
    }

    #[tokio::test]
    async fn test_analyze_accepts_uppercase_extension_past_validation() {
        // Garbage bytes with a valid .PDF name make it past validation and
        // fail in extraction, which is the opaque server error
        let request = multipart_request("file", Some("RESUME.PDF"), b"not a pdf at all");
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Failed to analyze resume"})
        );
    }

    #[tokio::test]
    async fn test_analyze_unparseable_pdf_is_opaque_500() {
        let request = multipart_request("file", Some("resume.pdf"), b"garbage bytes");
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Failed to analyze resume"})
        );
    }
}
