//! The question-to-answer pass-through
//!
//! One call validates the question, wraps it in the persona prompt, asks the
//! provider once, and hands back either the answer text or a `RelayError`.
//! Nothing is kept between calls.

use std::sync::Arc;
use thiserror::Error;
use warp::http::StatusCode;

use crate::llm::{GenerateRequest, LlmError, LlmProvider};
use crate::models::AskRequest;
use crate::prompt::{Persona, PromptTemplate, TemplateError, QUESTION_VAR};

#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing, empty, or whitespace-only question
    #[error("No question provided.")]
    MissingQuestion,

    /// Body was not a JSON object of the expected shape
    #[error("Invalid request body.")]
    InvalidBody,

    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Any failure while obtaining the completion, reported as-is
    #[error(transparent)]
    Provider(#[from] LlmError),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingQuestion | RelayError::InvalidBody => StatusCode::BAD_REQUEST,
            RelayError::Template(_) | RelayError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Relays persona-wrapped questions to an LLM provider
pub struct Relay {
    provider: Arc<dyn LlmProvider>,
    template: PromptTemplate,
}

impl Relay {
    /// A relay speaking as Doraemon
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            template: PromptTemplate::for_persona(&Persona::doraemon()),
        }
    }

    /// A relay with a custom template
    ///
    /// The template must leave exactly one placeholder open: `{question}`.
    pub fn with_template(
        provider: Arc<dyn LlmProvider>,
        template: PromptTemplate,
    ) -> Result<Self, TemplateError> {
        if let Some(extra) = template.variables().into_iter().find(|v| *v != QUESTION_VAR) {
            return Err(TemplateError::MissingVariable(extra.to_string()));
        }
        Ok(Self { provider, template })
    }

    /// Build the exact prompt sent for `question`
    pub fn prompt_for(&self, question: &str) -> Result<String, TemplateError> {
        self.template.render_question(question)
    }

    /// Answer one request
    ///
    /// The provider is only contacted once the question has passed validation.
    pub async fn ask(&self, request: &AskRequest) -> Result<String, RelayError> {
        let question = request.question().ok_or(RelayError::MissingQuestion)?;
        let prompt = self.prompt_for(question)?;

        let answer = self
            .provider
            .generate_text(GenerateRequest::from_prompt(prompt))
            .await?;

        Ok(answer)
    }
}
