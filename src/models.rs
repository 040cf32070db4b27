// Request and response bodies for the relay API

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

// POST /api/doraemon request
#[derive(Debug, Clone, Default, Serialize)]
pub struct AskRequest {
    // Optional so that a missing field reaches validation instead of failing decode
    pub question: Option<String>,
}

// Only a JSON object decodes; the derived impl would also take `["hi"]` as a sequence.
impl<'de> Deserialize<'de> for AskRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AskRequestVisitor;

        impl<'de> Visitor<'de> for AskRequestVisitor {
            type Value = AskRequest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with an optional \"question\" string")
            }

            fn visit_map<A>(self, mut map: A) -> Result<AskRequest, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut question: Option<Option<String>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "question" {
                        if question.is_some() {
                            return Err(de::Error::duplicate_field("question"));
                        }
                        question = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(AskRequest {
                    question: question.flatten(),
                })
            }
        }

        deserializer.deserialize_map(AskRequestVisitor)
    }
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
        }
    }

    /// The question, if it has any non-whitespace content
    ///
    /// Returned untrimmed; trimming only decides validity.
    pub fn question(&self) -> Option<&str> {
        self.question
            .as_deref()
            .filter(|q| !q.trim().is_empty())
    }
}

// Response body: `{"answer": ...}` or `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayReply {
    Answer { answer: String },
    Error { error: String },
}

impl RelayReply {
    pub fn answer(text: impl Into<String>) -> Self {
        RelayReply::Answer {
            answer: text.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        RelayReply::Error {
            error: message.into(),
        }
    }
}
