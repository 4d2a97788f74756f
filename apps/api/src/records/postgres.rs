use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::contract::ContractRow;
use crate::models::filing::FilingRow;
use crate::models::plan::PlanDetailRow;
use crate::records::{ContractFilter, FilingFilter, RecordSource};

pub const FILINGS_QUERY: &str = r#"
SELECT a.sec_document_id, a.variable_name, b.company_name, b.filed_date, b.fiscal_year, a.value
FROM sec_report_text_attributes a
LEFT JOIN sec_report_index b ON a.cik = b.cik
WHERE b.company_name = $1
  AND b.form_type = $2
  AND a.variable_name = $3
  AND (a.period_end_date, b.fiscal_year) IN (
      SELECT * FROM UNNEST($4::date[], $5::int[])
  )
ORDER BY b.filed_date DESC, a.period_end_date DESC
"#;

pub const CONTRACT_QUERY: &str = r#"
SELECT agency, department, original_contract_title, original_contract_description, ccount
FROM (
    SELECT agency, department, original_contract_title, original_contract_description,
           length(original_contract_description) AS ccount
    FROM government_contract_index
) c
WHERE original_contract_title = $1
  AND ccount BETWEEN $2 AND $3
  AND original_contract_description <> 'null'
  AND department <> 'null'
  AND agency <> 'null'
ORDER BY ccount DESC
LIMIT 1
"#;

/// The source table carries its CSV header as a row under this plan name.
pub const PLAN_HEADER_ROW: &str = "filename";

pub const PLANS_QUERY: &str = r#"
SELECT DISTINCT planname
FROM insurance_plans
WHERE planname <> $1
ORDER BY planname
"#;

pub const PLAN_DETAILS_QUERY: &str = r#"
SELECT planname, detail
FROM insurance_plans
WHERE planname = ANY($1)
ORDER BY array_position($1::text[], planname)
"#;

/// Record source backed by the warehouse connection pool.
#[derive(Clone)]
pub struct PgRecordSource {
    pool: PgPool,
}

impl PgRecordSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordSource for PgRecordSource {
    async fn fetch_filings(&self, filter: &FilingFilter) -> Result<Vec<FilingRow>, sqlx::Error> {
        let (dates, years): (Vec<_>, Vec<_>) = filter
            .periods
            .iter()
            .map(|p| (p.period_end_date, p.fiscal_year))
            .unzip();

        sqlx::query_as::<_, FilingRow>(FILINGS_QUERY)
            .bind(&filter.company_name)
            .bind(&filter.form_type)
            .bind(&filter.variable_name)
            .bind(dates)
            .bind(years)
            .fetch_all(&self.pool)
            .await
    }

    async fn fetch_contract(
        &self,
        filter: &ContractFilter,
    ) -> Result<Option<ContractRow>, sqlx::Error> {
        sqlx::query_as::<_, ContractRow>(CONTRACT_QUERY)
            .bind(&filter.title)
            .bind(filter.min_length)
            .bind(filter.max_length)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_plans(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(PLANS_QUERY)
            .bind(PLAN_HEADER_ROW)
            .fetch_all(&self.pool)
            .await
    }

    async fn fetch_plan_details(
        &self,
        plan_names: &[String],
    ) -> Result<Vec<PlanDetailRow>, sqlx::Error> {
        sqlx::query_as::<_, PlanDetailRow>(PLAN_DETAILS_QUERY)
            .bind(plan_names)
            .fetch_all(&self.pool)
            .await
    }
}
