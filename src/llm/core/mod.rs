//! Provider-neutral core of the LLM layer

pub mod error;
pub mod provider;
pub mod types;
