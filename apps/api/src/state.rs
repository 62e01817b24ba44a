use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// The Gemini client is built once at start-up; requests share it read-only.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
}
