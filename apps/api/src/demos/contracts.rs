//! Contract Companion: Q&A over one long procurement contract description.

use serde::Serialize;

use crate::completion::{CompletionClient, Model, SamplingOptions};
use crate::demos::prompts::{CONTRACT_DEFAULT_QUESTION, CONTRACT_SYSTEM};
use crate::errors::AppError;
use crate::models::contract::ContractRow;
use crate::pipeline::prompt::{Layout, PromptAssembler, Record};
use crate::pipeline::sanitize::QuoteMode;
use crate::pipeline::{self, AskParams, Exchange};
use crate::records::postgres::CONTRACT_QUERY;
use crate::records::{ContractFilter, RecordSource};

pub const OPTIONS: SamplingOptions = SamplingOptions::new(0.7, 3000);

const CONTRACT_TITLE: &str = "MAN DIESEL BRAND NAME ENGINE PARTS";
const MIN_DESCRIPTION_LENGTH: i32 = 25_000;
const MAX_DESCRIPTION_LENGTH: i32 = 32_000;

#[derive(Debug, Serialize)]
pub struct ContractView {
    pub query: &'static str,
    pub filter: ContractFilter,
    pub contract: ContractRow,
}

pub fn filter() -> ContractFilter {
    ContractFilter {
        title: CONTRACT_TITLE.to_string(),
        min_length: MIN_DESCRIPTION_LENGTH,
        max_length: MAX_DESCRIPTION_LENGTH,
    }
}

pub fn assembler(max_chars: Option<usize>) -> PromptAssembler {
    PromptAssembler::new(Layout::Concatenated, QuoteMode::Strip).with_max_chars(max_chars)
}

pub async fn view(records: &dyn RecordSource) -> Result<ContractView, AppError> {
    let filter = filter();
    let contract = records
        .fetch_contract(&filter)
        .await?
        .ok_or_else(|| AppError::NoData("No contract data available".to_string()))?;
    Ok(ContractView {
        query: CONTRACT_QUERY.trim(),
        filter,
        contract,
    })
}

pub async fn ask(
    records: &dyn RecordSource,
    client: &CompletionClient,
    max_prompt_chars: Option<usize>,
    model: Model,
    question: Option<&str>,
) -> Result<Exchange, AppError> {
    let context: Vec<Record> = records
        .fetch_contract(&filter())
        .await?
        .iter()
        .map(Record::from)
        .collect();
    let question = question
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(CONTRACT_DEFAULT_QUESTION);
    let assembler = assembler(max_prompt_chars);

    pipeline::ask(
        client,
        AskParams {
            assembler: &assembler,
            system: Some(CONTRACT_SYSTEM),
            model,
            options: OPTIONS,
            question,
            records: &context,
        },
    )
    .await
    .map_err(|e| AppError::from_pipeline(e, "contract"))
}
