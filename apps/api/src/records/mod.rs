//! Record Source: fixed, parameterized warehouse queries behind a trait.
//!
//! `AppState` holds an `Arc<dyn RecordSource>`. Production uses
//! [`postgres::PgRecordSource`]; tests swap in an in-memory source.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::models::contract::ContractRow;
use crate::models::filing::FilingRow;
use crate::models::plan::PlanDetailRow;
use crate::pipeline::prompt::Record;

pub mod postgres;

#[cfg(test)]
pub mod memory;

/// A (period end date, fiscal year) pair identifying one annual filing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilingPeriod {
    pub period_end_date: NaiveDate,
    pub fiscal_year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilingFilter {
    pub company_name: String,
    pub form_type: String,
    pub variable_name: String,
    pub periods: Vec<FilingPeriod>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractFilter {
    pub title: String,
    pub min_length: i32,
    pub max_length: i32,
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Filing rows, newest filing first.
    async fn fetch_filings(&self, filter: &FilingFilter) -> Result<Vec<FilingRow>, sqlx::Error>;

    /// The longest contract matching the filter, if any.
    async fn fetch_contract(
        &self,
        filter: &ContractFilter,
    ) -> Result<Option<ContractRow>, sqlx::Error>;

    /// Distinct plan names, sorted.
    async fn list_plans(&self) -> Result<Vec<String>, sqlx::Error>;

    /// Detail rows for the named plans, in the order the names were given.
    async fn fetch_plan_details(
        &self,
        plan_names: &[String],
    ) -> Result<Vec<PlanDetailRow>, sqlx::Error>;
}

impl From<&FilingRow> for Record {
    fn from(row: &FilingRow) -> Self {
        Record::new(
            format!("{} FY{}", row.company_name, row.fiscal_year),
            row.value.clone(),
        )
    }
}

impl From<&ContractRow> for Record {
    fn from(row: &ContractRow) -> Self {
        Record::new(
            row.original_contract_title.clone(),
            row.original_contract_description.clone(),
        )
    }
}

impl From<&PlanDetailRow> for Record {
    fn from(row: &PlanDetailRow) -> Self {
        Record::new(row.planname.clone(), row.detail.clone())
    }
}
