//! Gemini-specific request and response types
//!
//! These types map directly to the Generative Language API schema. Response
//! types are lenient: absent fields default, unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Request to generate content from Gemini
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Array of content items representing the conversation
    pub contents: Vec<Content>,
}

/// A single content item in the conversation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    #[serde(default)]
    pub role: String,
    /// Parts of the content (may be empty when hitting limits like MAX_TOKENS)
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A part of content
///
/// Only text is produced by the relay; non-text parts in responses
/// deserialize with `text: None` and are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Response chunk from Gemini's streaming endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates (usually just one; empty when the prompt is blocked)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Why the prompt was rejected, if it was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A candidate response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content (absent when the candidate was filtered)
    #[serde(default)]
    pub content: Content,
    /// Why the candidate finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

/// Usage metadata from Gemini
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

/// Error envelope returned by Google APIs on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// Canonical status name, e.g. `INVALID_ARGUMENT`
    #[serde(default)]
    pub status: String,
}
