use crate::Error;
use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// `Json` extractor whose rejections use the `{"detail"}` error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BodyRejection))]
pub struct JsonBody<T>(pub T);

#[derive(Debug)]
pub struct BodyRejection {
    status: StatusCode,
    detail: String,
}

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { detail: self.detail })).into_response()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRequest {
    pub id: String,
    pub text: String,
    pub tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseResult {
    pub id: String,
    pub generated_response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRequest {
    pub id: String,
    pub topic: String,
    pub tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicResult {
    pub id: String,
    pub generated_topic: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        Self {
            detail: error.to_string(),
        }
    }
}

pub fn api_error(error: &Error) -> ApiError {
    (error.status_code(), Json(ErrorResponse::from(error)))
}
