//! Live tests against the real Gemini API
//!
//! These make real API calls and need a key. To run them:
//! 1. Put `GEMINI_API_KEY=...` in `.env` (or export it)
//! 2. Run: `cargo test --test gemini_live_test -- --ignored`

use doraemon_relay::llm::{GeminiClient, GeminiModel, GenerateRequest, LlmProvider};
use doraemon_relay::models::AskRequest;
use doraemon_relay::relay::Relay;
use std::env;
use std::sync::Arc;

fn create_test_client() -> GeminiClient {
    dotenvy::dotenv().ok();

    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY required in .env");
    GeminiClient::new(api_key, GeminiModel::Gemini20Flash).expect("Failed to create Gemini client")
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_gemini_simple_generation() {
    let client = create_test_client();

    let text = client
        .generate_text(GenerateRequest::from_prompt(
            "What is 2+2? Answer with just the number.",
        ))
        .await
        .expect("Generation failed");

    println!("Response: {}", text);
    assert!(text.contains('4'));
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_relay_answers_in_character() {
    let relay = Relay::new(Arc::new(create_test_client()));

    let answer = relay
        .ask(&AskRequest::new("Who is your best friend?"))
        .await
        .expect("Relay failed");

    println!("Doraemon says: {}", answer);
    assert!(!answer.trim().is_empty());
}
