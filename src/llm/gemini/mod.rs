//! Gemini provider implementation
//!
//! A client for Google's Gemini models via the Generative Language API,
//! implementing the LlmProvider trait.

pub mod client;
pub mod mapper;
pub mod sse;
pub mod types;

// Re-export main types for convenience
pub use client::{GeminiClient, GeminiModel};
