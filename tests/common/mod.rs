use async_trait::async_trait;
use futures::stream;
use std::sync::{Arc, Mutex};

use doraemon_relay::llm::{
    ContentDelta, EventStream, FinishReason, GenerateRequest, LlmError, LlmProvider, StreamEvent,
    UsageMetadata,
};
use doraemon_relay::relay::Relay;

/// What the mock does when asked
enum Script {
    Answer(String),
    Fail(String),
}

/// An LLM provider that records every prompt and replays a fixed outcome
pub struct MockProvider {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Answer(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Fail(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError> {
        self.prompts.lock().unwrap().push(request.user_text());

        match &self.script {
            Script::Fail(message) => Err(LlmError::Other(message.clone())),
            Script::Answer(text) => {
                // Split the answer to exercise delta concatenation
                let mid = text.char_indices().nth(text.chars().count() / 2).map_or(0, |(i, _)| i);
                let (head, tail) = text.split_at(mid);

                let events = vec![
                    Ok(StreamEvent::ContentDelta {
                        index: 0,
                        delta: ContentDelta::TextDelta {
                            text: head.to_string(),
                        },
                    }),
                    Ok(StreamEvent::ContentDelta {
                        index: 0,
                        delta: ContentDelta::TextDelta {
                            text: tail.to_string(),
                        },
                    }),
                    Ok(StreamEvent::MessageEnd {
                        finish_reason: FinishReason::Stop,
                        usage: UsageMetadata::new(10, 5),
                    }),
                ];
                Ok(Box::pin(stream::iter(events)))
            }
        }
    }
}

/// A relay wired to the given mock
pub fn relay_with(provider: &Arc<MockProvider>) -> Arc<Relay> {
    Arc::new(Relay::new(provider.clone()))
}
