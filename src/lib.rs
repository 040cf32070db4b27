// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Relay core
pub mod config;
pub mod prompt;
pub mod relay;

// LLM abstraction layer
pub mod llm;
