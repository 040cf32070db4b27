//! Provider trait for LLM implementations

use async_trait::async_trait;
use futures::stream::Stream;
use futures::StreamExt;
use std::pin::Pin;

use super::{
    error::LlmError,
    types::{ContentDelta, GenerateRequest, StreamEvent},
};

/// Boxed stream of generation events returned by providers
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send>>;

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Stream generate content from the LLM
    ///
    /// This method sends a request to the LLM and returns a stream of events
    /// representing the incremental response.
    ///
    /// # Arguments
    /// * `request` - The generation request with its user messages
    ///
    /// # Returns
    /// A pinned boxed stream of `StreamEvent` results, or an error if the request fails
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError>;

    /// Generate a complete text answer
    ///
    /// Drains [`stream_generate`](Self::stream_generate) and concatenates every
    /// text delta in arrival order. The first error in the stream aborts the
    /// call. A stream that yields nothing at all is treated as a malformed
    /// response. The finish reason and token usage are logged, not returned.
    async fn generate_text(&self, request: GenerateRequest) -> Result<String, LlmError> {
        let mut stream = self.stream_generate(request).await?;

        let mut text = String::new();
        let mut saw_event = false;

        while let Some(event) = stream.next().await {
            saw_event = true;
            match event? {
                StreamEvent::ContentDelta {
                    delta: ContentDelta::TextDelta { text: chunk },
                    ..
                } => text.push_str(&chunk),
                StreamEvent::MessageEnd {
                    finish_reason,
                    usage,
                } => {
                    tracing::debug!(
                        ?finish_reason,
                        input_tokens = usage.input_tokens,
                        output_tokens = usage.output_tokens,
                        "Generation finished"
                    );
                }
            }
        }

        if !saw_event {
            return Err(LlmError::Other(
                "Provider returned an empty response".to_string(),
            ));
        }

        Ok(text)
    }
}
