//! Mapping between abstraction types and Gemini types

use crate::llm::core::{
    error::LlmError,
    types::{ContentDelta, FinishReason, GenerateRequest, Message, StreamEvent, UsageMetadata},
};

use super::types::{ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, Part};

/// Convert our abstraction request to Gemini's request format
///
/// No generation config is sent, so the model's defaults apply.
pub fn to_gemini_request(request: GenerateRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: request.messages.iter().map(to_gemini_content).collect(),
    }
}

fn to_gemini_content(message: &Message) -> Content {
    Content {
        role: "user".to_string(),
        parts: vec![Part::text(message.text())],
    }
}

/// Convert one Gemini response chunk to stream events
///
/// Text parts of the first candidate become text deltas; a finish reason on
/// the candidate closes the message. A chunk whose prompt feedback carries a
/// block reason and no candidates is an error.
pub fn from_gemini_response(
    response: GenerateContentResponse,
) -> Result<Vec<StreamEvent>, LlmError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LlmError::Blocked(reason));
        }
        // Trailing usage-only chunk
        return Ok(Vec::new());
    };

    let mut events: Vec<StreamEvent> = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .map(|text| StreamEvent::ContentDelta {
            index: 0,
            delta: ContentDelta::TextDelta { text },
        })
        .collect();

    if let Some(reason) = candidate.finish_reason {
        let usage = response
            .usage_metadata
            .map(|u| UsageMetadata {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        events.push(StreamEvent::MessageEnd {
            finish_reason: map_finish_reason(&reason),
            usage,
        });
    }

    Ok(events)
}

/// Map Gemini's finish reason to our abstraction
fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        other => FinishReason::Other(other.to_string()),
    }
}

/// Convert a non-2xx response body into an error
///
/// Google's error envelope becomes a `ProviderError` keyed by its canonical
/// status; anything else keeps the raw body.
pub fn from_error_body(status: u16, body: String) -> LlmError {
    match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            let code = if envelope.error.status.is_empty() {
                status.to_string()
            } else {
                envelope.error.status
            };
            LlmError::ProviderError {
                code,
                message: envelope.error.message,
            }
        }
        _ => LlmError::HttpError { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::gemini::types::{Candidate, PromptFeedback};

    fn text_chunk(text: &str, finish_reason: Option<&str>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    role: "model".to_string(),
                    parts: vec![Part::text(text)],
                },
                finish_reason: finish_reason.map(str::to_string),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_to_gemini_request_single_prompt() {
        let request = to_gemini_request(GenerateRequest::from_prompt("What time is it?"));
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");
        assert_eq!(
            request.contents[0].parts[0].text.as_deref(),
            Some("What time is it?")
        );
    }

    #[test]
    fn test_map_finish_reason() {
        assert_eq!(map_finish_reason("STOP"), FinishReason::Stop);
        assert_eq!(map_finish_reason("MAX_TOKENS"), FinishReason::MaxTokens);
        assert_eq!(map_finish_reason("SAFETY"), FinishReason::Safety);
        assert_eq!(
            map_finish_reason("RECITATION"),
            FinishReason::Other("RECITATION".to_string())
        );
    }

    #[test]
    fn test_from_gemini_response_text() {
        let events = from_gemini_response(text_chunk("Hello!", None)).unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            StreamEvent::ContentDelta {
                delta: ContentDelta::TextDelta { text },
                ..
            } => assert_eq!(text, "Hello!"),
            other => panic!("Expected text delta, got {:?}", other),
        }
    }

    #[test]
    fn test_from_gemini_response_with_finish() {
        let mut chunk = text_chunk("Done", Some("STOP"));
        chunk.usage_metadata = Some(super::super::types::UsageMetadata {
            prompt_token_count: 10,
            candidates_token_count: 5,
            total_token_count: 15,
        });

        let events = from_gemini_response(chunk).unwrap();
        assert_eq!(events.len(), 2);
        match &events[1] {
            StreamEvent::MessageEnd {
                finish_reason,
                usage,
            } => {
                assert_eq!(*finish_reason, FinishReason::Stop);
                assert_eq!(usage.total_tokens, 15);
            }
            other => panic!("Expected message end, got {:?}", other),
        }
    }

    #[test]
    fn test_from_gemini_response_blocked() {
        let chunk = GenerateContentResponse {
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some("PROHIBITED_CONTENT".to_string()),
            }),
            ..Default::default()
        };

        let err = from_gemini_response(chunk).unwrap_err();
        assert!(matches!(err, LlmError::Blocked(reason) if reason == "PROHIBITED_CONTENT"));
    }

    #[test]
    fn test_from_gemini_response_usage_only_chunk() {
        let events = from_gemini_response(GenerateContentResponse::default()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_from_error_body_envelope() {
        let body = r#"{"error":{"code":403,"message":"Permission denied","status":"PERMISSION_DENIED"}}"#;
        let err = from_error_body(403, body.to_string());
        assert_eq!(
            err.to_string(),
            "Provider error (PERMISSION_DENIED): Permission denied"
        );
    }

    #[test]
    fn test_from_error_body_plain_text() {
        let err = from_error_body(502, "Bad Gateway".to_string());
        assert!(matches!(err, LlmError::HttpError { status: 502, ref body } if body == "Bad Gateway"));
    }
}
