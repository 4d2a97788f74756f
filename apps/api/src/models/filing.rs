use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One 10-K filing text attribute joined with its report index entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FilingRow {
    pub sec_document_id: String,
    pub variable_name: String,
    pub company_name: String,
    pub filed_date: NaiveDate,
    pub fiscal_year: i32,
    pub value: String,
}
