// The three long-context demos: 10-K decoder, contract companion, plan comparison.
// Each one owns its fixed record filter, prompt layout, and sampling options,
// and runs through the shared pipeline.

pub mod contracts;
pub mod filings;
pub mod handlers;
pub mod plans;
pub mod prompts;

use serde::Serialize;
use serde_json::Value;

use crate::completion::Model;
use crate::pipeline::extract::Usage;
use crate::pipeline::sanitize::escape_markdown;
use crate::pipeline::Exchange;

/// Response body shared by every ask endpoint.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub model: Model,
    /// Exactly what was sent as the user message, for inspection.
    pub prompt: String,
    pub answer: String,
    /// `answer` with markdown controls escaped, safe to hand to a markdown renderer.
    pub answer_markdown: String,
    /// Full decoded envelope. `null` when the service returned non-JSON text.
    pub response: Option<Value>,
    pub raw: String,
    pub malformed: bool,
    pub usage: Option<Usage>,
}

impl From<Exchange> for AskResponse {
    fn from(exchange: Exchange) -> Self {
        let Exchange {
            model,
            prompt,
            raw,
            answer,
        } = exchange;
        Self {
            model,
            prompt: prompt.text,
            answer_markdown: escape_markdown(&answer.answer),
            answer: answer.answer,
            response: answer.envelope,
            raw,
            malformed: answer.malformed,
            usage: answer.usage,
        }
    }
}
