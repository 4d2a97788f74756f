//! Response Extractor: decodes the completion envelope and finds the answer text.
//!
//! Extraction never fails past [`interpret`]: a caller always gets something it
//! can display, even when the service returns text that is not JSON at all.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Key the completion service puts the answer under.
pub const ANSWER_KEY: &str = "messages";

/// Misspelled answer key seen in older service output. Compatibility shim only.
pub const ANSWER_KEY_MISSPELLED: &str = "mesages";

#[derive(Debug, Error)]
#[error("completion response is not valid JSON: {0}")]
pub struct MalformedResponse(#[from] serde_json::Error);

/// Token accounting block, when the envelope carries one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

/// Displayable result of one completion call.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub answer: String,
    /// Full decoded envelope, for debugging views. `None` when malformed.
    pub envelope: Option<Value>,
    pub usage: Option<Usage>,
    pub malformed: bool,
}

pub fn decode(raw: &str) -> Result<Value, MalformedResponse> {
    Ok(serde_json::from_str(raw)?)
}

/// Locates the answer in a decoded envelope.
///
/// Order: `choices[0].messages`, then `choices[0].mesages`, then the whole first
/// choice, then the whole envelope. Null or blank values count as missing.
pub fn extract_answer(envelope: &Value) -> String {
    let first_choice = envelope
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first());

    if let Some(choice) = first_choice {
        if let Some(answer) = displayable(choice.get(ANSWER_KEY)) {
            return answer;
        }
        if let Some(answer) = displayable(choice.get(ANSWER_KEY_MISSPELLED)) {
            warn!("Completion response used misspelled answer key '{ANSWER_KEY_MISSPELLED}'");
            return answer;
        }
        if let Some(answer) = displayable(Some(choice)) {
            return answer;
        }
    }
    render(envelope)
}

/// Reads the `usage` block if present and well-formed.
pub fn extract_usage(envelope: &Value) -> Option<Usage> {
    envelope
        .get("usage")
        .and_then(|u| serde_json::from_value(u.clone()).ok())
}

/// Decodes and extracts in one step. Malformed text is returned as the answer.
pub fn interpret(raw: &str) -> Answer {
    match decode(raw) {
        Ok(envelope) => {
            let answer = extract_answer(&envelope);
            Answer {
                // A bare `""` envelope still has its raw text to show.
                answer: if answer.trim().is_empty() {
                    raw.to_string()
                } else {
                    answer
                },
                usage: extract_usage(&envelope),
                envelope: Some(envelope),
                malformed: false,
            }
        }
        Err(e) => {
            warn!("{e}; returning raw response text");
            Answer {
                answer: raw.to_string(),
                envelope: None,
                usage: None,
                malformed: true,
            }
        }
    }
}

fn displayable(value: Option<&Value>) -> Option<String> {
    value
        .filter(|v| !v.is_null())
        .map(render)
        .filter(|s| !s.trim().is_empty())
}

/// Strings are returned as-is; anything else is rendered as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
