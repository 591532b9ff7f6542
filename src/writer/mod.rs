mod moderation;

pub use moderation::{ModerationVerdict, strip_quotes};

use crate::{
    Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
    prompt::{MODERATION_TEMPLATE, RESPONSE_TEMPLATE, TOPIC_TEMPLATE},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Value returned in place of a reply when moderation flags the input.
pub const DELETE_SENTINEL: &str = "delete";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    Deleted,
    Generated(String),
}

impl ResponseOutcome {
    pub fn into_text(self) -> String {
        match self {
            Self::Deleted => DELETE_SENTINEL.to_string(),
            Self::Generated(text) => text,
        }
    }
}

/// Runs the forum generation pipelines against an LLM client.
///
/// Holds no per-request state; a single instance is shared by all handlers.
pub struct ForumWriter {
    llm_client: Arc<dyn LlmClient>,
}

impl ForumWriter {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub async fn moderate(&self, text: &str) -> Result<ModerationVerdict> {
        let messages = MODERATION_TEMPLATE.render(&[("text", text)])?;
        let output = self.complete(messages).await?;
        let verdict = ModerationVerdict::from_output(&output);

        debug!("Moderation output {:?} -> {:?}", output, verdict);
        Ok(verdict)
    }

    /// Moderates `text`, then writes a reply to it in the given tone.
    /// Flagged text never reaches the generation call.
    pub async fn generate_response(&self, text: &str, tone: &str) -> Result<ResponseOutcome> {
        if self.moderate(text).await? == ModerationVerdict::Delete {
            info!("Input flagged by moderation, skipping generation");
            return Ok(ResponseOutcome::Deleted);
        }

        let messages = RESPONSE_TEMPLATE.render(&[("text", text), ("tone", tone)])?;
        let output = self.complete(messages).await?;
        Ok(ResponseOutcome::Generated(strip_quotes(&output)))
    }

    pub async fn generate_topic(&self, topic: &str, tone: &str) -> Result<String> {
        let messages = TOPIC_TEMPLATE.render(&[("topic", topic), ("tone", tone)])?;
        let output = self.complete(messages).await?;
        Ok(strip_quotes(&output))
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let response = self
            .llm_client
            .create_chat_completion(ChatCompletionRequest::new(messages))
            .await?;
        Ok(response.content()?.to_string())
    }
}
