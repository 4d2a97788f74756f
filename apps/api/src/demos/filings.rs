//! 10-K Decoder: three fiscal years of one company's 10-K text in a single prompt.

use chrono::NaiveDate;
use serde::Serialize;

use crate::completion::{CompletionClient, Model, SamplingOptions};
use crate::demos::prompts::{FILINGS_DEFAULT_QUESTION, FILINGS_QUESTION_SUFFIX};
use crate::errors::AppError;
use crate::models::filing::FilingRow;
use crate::pipeline::prompt::{Layout, PromptAssembler, Record};
use crate::pipeline::sanitize::QuoteMode;
use crate::pipeline::{self, AskParams, Exchange};
use crate::records::postgres::FILINGS_QUERY;
use crate::records::{FilingFilter, FilingPeriod, RecordSource};

pub const OPTIONS: SamplingOptions = SamplingOptions::new(0.3, 2000);

const COMPANY: &str = "NVIDIA CORP";

/// (period end, fiscal year) of the last three annual filings.
const PERIODS: [(i32, u32, u32, i32); 3] = [
    (2024, 1, 28, 2023),
    (2023, 1, 29, 2022),
    (2022, 1, 30, 2021),
];

#[derive(Debug, Serialize)]
pub struct FilingsView {
    pub query: &'static str,
    pub filter: FilingFilter,
    pub filings: Vec<FilingRow>,
}

pub fn filter() -> FilingFilter {
    FilingFilter {
        company_name: COMPANY.to_string(),
        form_type: "10-K".to_string(),
        variable_name: "10-K Filing Text".to_string(),
        periods: PERIODS
            .iter()
            .filter_map(|&(y, m, d, fiscal_year)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|period_end_date| FilingPeriod {
                    period_end_date,
                    fiscal_year,
                })
            })
            .collect(),
    }
}

pub fn assembler(max_chars: Option<usize>) -> PromptAssembler {
    PromptAssembler::new(Layout::Concatenated, QuoteMode::Strip).with_max_chars(max_chars)
}

/// Blank questions fall back to the default; every question gets the fence suffix.
pub fn question_or_default(question: Option<&str>) -> String {
    let question = question
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(FILINGS_DEFAULT_QUESTION);
    format!("{question}{FILINGS_QUESTION_SUFFIX}")
}

pub async fn view(records: &dyn RecordSource) -> Result<FilingsView, AppError> {
    let filter = filter();
    let filings = records.fetch_filings(&filter).await?;
    if filings.is_empty() {
        return Err(AppError::NoData("No filing data available".to_string()));
    }
    Ok(FilingsView {
        query: FILINGS_QUERY.trim(),
        filter,
        filings,
    })
}

pub async fn ask(
    records: &dyn RecordSource,
    client: &CompletionClient,
    max_prompt_chars: Option<usize>,
    model: Model,
    question: Option<&str>,
) -> Result<Exchange, AppError> {
    let rows = records.fetch_filings(&filter()).await?;
    let context: Vec<Record> = rows.iter().map(Record::from).collect();
    let question = question_or_default(question);
    let assembler = assembler(max_prompt_chars);

    pipeline::ask(
        client,
        AskParams {
            assembler: &assembler,
            system: None,
            model,
            options: OPTIONS,
            question: &question,
            records: &context,
        },
    )
    .await
    .map_err(|e| AppError::from_pipeline(e, "filing"))
}
