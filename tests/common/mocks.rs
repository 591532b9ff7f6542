use async_trait::async_trait;
use forum_writer::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
};
use std::sync::Mutex;

/// Mock LLM client that replays canned completions in order
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub responses: Mutex<Vec<String>>,
    pub requests: Mutex<Vec<ChatCompletionRequest>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: &[&str]) -> Self {
        *self.responses.lock().unwrap() = responses.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(create_mock_chat_response(&responses.remove(0)))
    }
}

/// Mock LLM client that answers with no choices at all
#[derive(Debug, Default)]
pub struct EmptyChoicesLlmClient;

#[async_trait]
impl LlmClient for EmptyChoicesLlmClient {
    async fn create_chat_completion(
        &self,
        _request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        Ok(ChatCompletionResponse {
            id: "test-id".to_string(),
            model: "test-model".to_string(),
            choices: vec![],
            usage: None,
        })
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}
