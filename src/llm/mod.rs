//! LLM Abstraction Layer
//!
//! A provider-neutral interface for text generation, with a Google Gemini
//! implementation backed by the Generative Language API.

pub mod core;
pub mod gemini;

// Re-export commonly used types
pub use core::{
    error::LlmError,
    provider::{EventStream, LlmProvider},
    types::{
        ContentBlock, ContentDelta, FinishReason, GenerateRequest, Message, StreamEvent,
        UsageMetadata,
    },
};

pub use gemini::{GeminiClient, GeminiModel};
