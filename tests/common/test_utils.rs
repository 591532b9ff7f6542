use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use forum_writer::{
    config::AuthConfig,
    llm::LlmClient,
    server::{self, AppState},
    writer::ForumWriter,
};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-static-token";

/// Build the full router around the given LLM client
pub fn create_test_app(llm_client: Arc<dyn LlmClient>) -> Router {
    server::router(AppState {
        writer: Arc::new(ForumWriter::new(llm_client)),
        auth: Arc::new(AuthConfig::new(TEST_TOKEN)),
    })
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

/// JSON POST request, optionally carrying an Authorization header
pub fn json_post(uri: &str, authorization: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
