//! Prompt Assembler: joins a question with retrieved record text.

use serde::Serialize;
use thiserror::Error;

use crate::pipeline::sanitize::QuoteMode;

/// Separator between the question and a single record body.
pub const SINGLE_RECORD_SEPARATOR: &str = "\n\n\n\n";

#[derive(Debug, Error, PartialEq)]
pub enum PromptError {
    #[error("question cannot be empty")]
    EmptyQuestion,

    #[error("no records to assemble")]
    NoRecords,

    #[error("assembled prompt is {actual} characters, limit is {limit}")]
    TooLarge { actual: usize, limit: usize },
}

/// One retrieved row of text used as context for a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub label: String,
    pub body: String,
}

impl Record {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

/// How records are laid out after the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// All bodies joined with a single space, separated from the question by
    /// [`SINGLE_RECORD_SEPARATOR`]. Used when the records are one logical document.
    Concatenated,
    /// Each record wrapped as `<tag name="label">body</tag>`, wrappers joined
    /// with a single space and appended after the question.
    Tagged(&'static str),
}

/// Assembled question-plus-context text, ready to become a user message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    pub text: String,
    pub record_count: usize,
}

impl Prompt {
    /// Length in characters, the unit the length guard uses.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone)]
pub struct PromptAssembler {
    pub layout: Layout,
    pub quote_mode: QuoteMode,
    /// Upper bound on the assembled text in characters. `None` leaves the
    /// bound to the completion service.
    pub max_chars: Option<usize>,
}

impl PromptAssembler {
    pub fn new(layout: Layout, quote_mode: QuoteMode) -> Self {
        Self {
            layout,
            quote_mode,
            max_chars: None,
        }
    }

    pub fn with_max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Builds the prompt. Every piece of embedded text is sanitized before it is
    /// placed into the result.
    pub fn assemble(&self, question: &str, records: &[Record]) -> Result<Prompt, PromptError> {
        if question.trim().is_empty() {
            return Err(PromptError::EmptyQuestion);
        }
        if records.is_empty() {
            return Err(PromptError::NoRecords);
        }

        let escape = |s: &str| self.quote_mode.apply(s);
        let question = escape(question);

        let text = match self.layout {
            Layout::Concatenated => {
                let context = records
                    .iter()
                    .map(|r| escape(&r.body))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{question}{SINGLE_RECORD_SEPARATOR}{context}")
            }
            Layout::Tagged(tag) => {
                let context = records
                    .iter()
                    .map(|r| {
                        format!(
                            "<{tag} name=\"{}\">{}</{tag}>",
                            escape(&r.label),
                            escape(&r.body)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{question} {context}")
            }
        };

        if let Some(limit) = self.max_chars {
            let actual = text.chars().count();
            if actual > limit {
                return Err(PromptError::TooLarge { actual, limit });
            }
        }

        Ok(Prompt {
            text,
            record_count: records.len(),
        })
    }
}
