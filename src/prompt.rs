//! Persona prompt templates
//!
//! A template such as `"Answer like {name}: {question}"` is parsed once into
//! literal and placeholder segments. Rendering walks the segments a single
//! time, so placeholder-looking text inside a substituted value is never
//! expanded again.

use std::collections::HashMap;
use thiserror::Error;

/// Instruction wrapped around every question before it reaches the model
pub const PERSONA_TEMPLATE: &str =
    "You are {name}, {description}. Answer this question like {name}: {question}";

/// Name of the placeholder that carries the caller's question
pub const QUESTION_VAR: &str = "question";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unclosed placeholder starting at byte {0}")]
    UnclosedPlaceholder(usize),

    #[error("Empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),

    #[error("Unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),

    #[error("No value supplied for placeholder '{0}'")]
    MissingVariable(String),
}

/// Who the model is asked to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub description: String,
}

impl Persona {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn doraemon() -> Self {
        Self::new("Doraemon", "the robotic cat from the future")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// A parsed `{placeholder}` template
///
/// `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse a template string
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::UnclosedPlaceholder(pos));
                    }
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder(pos));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable(name.to_string()));
                }
                '}' => return Err(TemplateError::UnmatchedBrace(pos)),
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// The standard persona template with the persona already bound
    ///
    /// Only `{question}` is left open.
    pub fn for_persona(persona: &Persona) -> Self {
        Self {
            segments: vec![
                Segment::Literal(format!(
                    "You are {}, {}. Answer this question like {}: ",
                    persona.name, persona.description, persona.name
                )),
                Segment::Variable(QUESTION_VAR.to_string()),
            ],
        }
    }

    /// Placeholder names in order of first appearance
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Variable(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Fix a placeholder to a value, turning it into literal text
    pub fn bind(self, name: &str, value: &str) -> Self {
        let mut segments: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in self.segments {
            let segment = match segment {
                Segment::Variable(var) if var == name => Segment::Literal(value.to_string()),
                other => other,
            };
            if let Segment::Literal(next) = &segment {
                if let Some(Segment::Literal(prev)) = segments.last_mut() {
                    prev.push_str(next);
                    continue;
                }
            }
            segments.push(segment);
        }
        Self { segments }
    }

    /// Render with the given values, substituting each placeholder once
    pub fn render(&self, values: &HashMap<&str, &str>) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(name) => {
                    let value = values
                        .get(name.as_str())
                        .ok_or_else(|| TemplateError::MissingVariable(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }

    /// Render a template whose only open placeholder is `{question}`
    pub fn render_question(&self, question: &str) -> Result<String, TemplateError> {
        self.render(&HashMap::from([(QUESTION_VAR, question)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doraemon_prompt() {
        let template = PromptTemplate::for_persona(&Persona::doraemon());
        let prompt = template.render_question("What time is it?").unwrap();
        assert_eq!(
            prompt,
            "You are Doraemon, the robotic cat from the future. Answer this question like Doraemon: What time is it?"
        );
    }

    #[test]
    fn test_parsed_persona_template_matches_builtin() {
        let persona = Persona::doraemon();
        let parsed = PromptTemplate::parse(PERSONA_TEMPLATE)
            .unwrap()
            .bind("name", &persona.name)
            .bind("description", &persona.description);

        assert_eq!(parsed, PromptTemplate::for_persona(&persona));
        assert_eq!(parsed.variables(), vec!["question"]);
    }

    #[test]
    fn test_question_is_interpolated_verbatim() {
        let template = PromptTemplate::for_persona(&Persona::doraemon());
        let question = "  <b>{question}</b> and {name} stay literal  ";
        let prompt = template.render_question(question).unwrap();
        assert_eq!(
            prompt,
            format!(
                "You are Doraemon, the robotic cat from the future. Answer this question like Doraemon: {}",
                question
            )
        );
    }

    #[test]
    fn test_variables_in_order_without_duplicates() {
        let template = PromptTemplate::parse(PERSONA_TEMPLATE).unwrap();
        assert_eq!(template.variables(), vec!["name", "description", "question"]);
    }

    #[test]
    fn test_escaped_braces() {
        let template = PromptTemplate::parse("{{literal}} {x}").unwrap();
        let out = template.render(&HashMap::from([("x", "y")])).unwrap();
        assert_eq!(out, "{literal} y");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PromptTemplate::parse("Hello {name"),
            Err(TemplateError::UnclosedPlaceholder(6))
        );
        assert_eq!(
            PromptTemplate::parse("Hello {}"),
            Err(TemplateError::EmptyPlaceholder(6))
        );
        assert_eq!(
            PromptTemplate::parse("Hello }"),
            Err(TemplateError::UnmatchedBrace(6))
        );
    }

    #[test]
    fn test_render_missing_variable() {
        let template = PromptTemplate::parse("Hi {name}").unwrap();
        assert_eq!(
            template.render_question("q"),
            Err(TemplateError::MissingVariable("name".to_string()))
        );
    }
}
