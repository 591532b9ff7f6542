use super::types::{
    ApiError, JsonBody, ResponseRequest, ResponseResult, TopicRequest, TopicResult, api_error,
};
use crate::{config::AuthConfig, writer::ForumWriter};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub writer: Arc<ForumWriter>,
    pub auth: Arc<AuthConfig>,
}

pub async fn generate_response(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ResponseRequest>,
) -> Result<Json<ResponseResult>, ApiError> {
    info!(id = %request.id, tone = %request.tone, "Received generate-response request");

    match state
        .writer
        .generate_response(&request.text, &request.tone)
        .await
    {
        Ok(outcome) => {
            info!(id = %request.id, "Generated response");
            Ok(Json(ResponseResult {
                id: request.id,
                generated_response: outcome.into_text(),
            }))
        }
        Err(e) => {
            error!("Failed to generate response for {}: {}", request.id, e);
            Err(api_error(&e))
        }
    }
}

pub async fn generate_topic(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TopicRequest>,
) -> Result<Json<TopicResult>, ApiError> {
    info!(id = %request.id, tone = %request.tone, "Received generate-topic request");

    match state
        .writer
        .generate_topic(&request.topic, &request.tone)
        .await
    {
        Ok(generated_topic) => {
            info!(id = %request.id, "Generated topic");
            Ok(Json(TopicResult {
                id: request.id,
                generated_topic,
            }))
        }
        Err(e) => {
            error!("Failed to generate topic for {}: {}", request.id, e);
            Err(api_error(&e))
        }
    }
}
