//! Plan Comparison: up to two insurance plans, tagged, in one long-context prompt.

use crate::completion::{CompletionClient, Model, SamplingOptions};
use crate::errors::AppError;
use crate::pipeline::prompt::{Layout, PromptAssembler, Record};
use crate::pipeline::sanitize::QuoteMode;
use crate::pipeline::{self, AskParams, Exchange};
use crate::records::RecordSource;

/// Plan details are long; only the 256k-context model is offered here.
pub const MODEL: Model = Model::Jamba15Large;
pub const OPTIONS: SamplingOptions = SamplingOptions::new(0.3, 5000);
pub const MAX_PLANS: usize = 2;

pub fn assembler(max_chars: Option<usize>) -> PromptAssembler {
    PromptAssembler::new(Layout::Tagged("plan"), QuoteMode::Double).with_max_chars(max_chars)
}

/// Trims, drops blanks and repeats, keeping first-seen order. Rejects an empty
/// selection or more than [`MAX_PLANS`] plans.
pub fn normalize_selection(plans: &[String]) -> Result<Vec<String>, AppError> {
    let mut selected: Vec<String> = Vec::with_capacity(plans.len());
    for name in plans.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
        if !selected.iter().any(|s| s == name) {
            selected.push(name.to_string());
        }
    }

    if selected.is_empty() {
        return Err(AppError::Validation(
            "Select at least one plan to compare".to_string(),
        ));
    }
    if selected.len() > MAX_PLANS {
        return Err(AppError::Validation(format!(
            "At most {MAX_PLANS} plans can be compared, got {}",
            selected.len()
        )));
    }
    Ok(selected)
}

pub async fn list(records: &dyn RecordSource) -> Result<Vec<String>, AppError> {
    Ok(records.list_plans().await?)
}

pub async fn compare(
    records: &dyn RecordSource,
    client: &CompletionClient,
    max_prompt_chars: Option<usize>,
    question: &str,
    plans: &[String],
) -> Result<Exchange, AppError> {
    if question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    let selected = normalize_selection(plans)?;

    let rows = records.fetch_plan_details(&selected).await?;
    let context: Vec<Record> = rows.iter().map(Record::from).collect();
    let assembler = assembler(max_prompt_chars);

    pipeline::ask(
        client,
        AskParams {
            assembler: &assembler,
            system: None,
            model: MODEL,
            options: OPTIONS,
            question,
            records: &context,
        },
    )
    .await
    .map_err(|e| AppError::from_pipeline(e, "plan"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selection_dedups_and_trims() {
        let selected = normalize_selection(&names(&[" HMO Blue ", "HMO Blue", "", "Access Blue"]))
            .unwrap();
        assert_eq!(selected, names(&["HMO Blue", "Access Blue"]));
    }

    #[test]
    fn test_selection_rejects_empty() {
        assert!(matches!(
            normalize_selection(&names(&["  "])),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_selection_rejects_three_plans() {
        assert!(matches!(
            normalize_selection(&names(&["a", "b", "c"])),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_plan_prompt_is_tagged_and_escaped() {
        let prompt = assembler(None)
            .assemble(
                "Which is cheaper?",
                &[
                    Record::new("HMO Blue", "PCP copay $25"),
                    Record::new("Access Blue", "isn't covered"),
                ],
            )
            .unwrap();
        assert_eq!(
            prompt.text,
            r#"Which is cheaper? <plan name="HMO Blue">PCP copay $25</plan> <plan name="Access Blue">isn''t covered</plan>"#
        );
    }
}
