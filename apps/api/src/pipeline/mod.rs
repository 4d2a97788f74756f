// Prompt-assembly and response-extraction pipeline.
// records -> sanitize + assemble -> one completion call -> extract answer.
// Stateless: every call builds its prompt fresh and keeps nothing afterwards.

pub mod extract;
pub mod prompt;
pub mod sanitize;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::completion::{
    CompletionClient, CompletionError, CompletionRequest, Model, SamplingOptions,
};
use crate::pipeline::extract::{interpret, Answer};
use crate::pipeline::prompt::{Prompt, PromptAssembler, PromptError, Record};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no records available")]
    NoData,

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("no result returned")]
    NoResult,
}

/// Everything one ask needs besides the client.
pub struct AskParams<'a> {
    pub assembler: &'a PromptAssembler,
    pub system: Option<&'a str>,
    pub model: Model,
    pub options: SamplingOptions,
    pub question: &'a str,
    pub records: &'a [Record],
}

/// The prompt that was sent alongside what came back.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub model: Model,
    pub prompt: Prompt,
    pub raw: String,
    pub answer: Answer,
}

/// Runs one question through the pipeline. Issues at most one completion call.
pub async fn ask(
    client: &CompletionClient,
    params: AskParams<'_>,
) -> Result<Exchange, PipelineError> {
    let AskParams {
        assembler,
        system,
        model,
        options,
        question,
        records,
    } = params;

    if records.is_empty() {
        return Err(PipelineError::NoData);
    }

    let prompt = assembler.assemble(question, records)?;
    info!(
        "Asking {model} over {} record(s), {} chars",
        prompt.record_count,
        prompt.char_count()
    );

    let request = CompletionRequest::new(model, system, prompt.text.clone(), options);
    let raw = client.complete(&request).await?.ok_or(PipelineError::NoResult)?;
    let answer = interpret(&raw);

    Ok(Exchange {
        model,
        prompt,
        raw,
        answer,
    })
}
