use async_trait::async_trait;

use crate::models::contract::ContractRow;
use crate::models::filing::FilingRow;
use crate::models::plan::PlanDetailRow;
use crate::records::postgres::PLAN_HEADER_ROW;
use crate::records::{ContractFilter, FilingFilter, RecordSource};

/// Fixed rows served from memory. Filters are ignored except plan selection,
/// which follows the warehouse queries: no `filename` header row, details in
/// selection order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordSource {
    pub filings: Vec<FilingRow>,
    pub contract: Option<ContractRow>,
    pub plans: Vec<PlanDetailRow>,
}

#[async_trait]
impl RecordSource for MemoryRecordSource {
    async fn fetch_filings(&self, _filter: &FilingFilter) -> Result<Vec<FilingRow>, sqlx::Error> {
        Ok(self.filings.clone())
    }

    async fn fetch_contract(
        &self,
        _filter: &ContractFilter,
    ) -> Result<Option<ContractRow>, sqlx::Error> {
        Ok(self.contract.clone())
    }

    async fn list_plans(&self) -> Result<Vec<String>, sqlx::Error> {
        let mut names: Vec<String> = self
            .plans
            .iter()
            .map(|p| p.planname.clone())
            .filter(|name| name != PLAN_HEADER_ROW)
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    async fn fetch_plan_details(
        &self,
        plan_names: &[String],
    ) -> Result<Vec<PlanDetailRow>, sqlx::Error> {
        Ok(plan_names
            .iter()
            .flat_map(|name| self.plans.iter().filter(move |p| &p.planname == name))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str, detail: &str) -> PlanDetailRow {
        PlanDetailRow {
            planname: name.to_string(),
            detail: detail.to_string(),
        }
    }

    fn source() -> MemoryRecordSource {
        MemoryRecordSource {
            plans: vec![
                plan("filename", "detail"),
                plan("HMO Blue", "copays"),
                plan("Access Blue", "deductible"),
                plan("HMO Blue", "pharmacy"),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_plans_skips_header_row() {
        let names = source().list_plans().await.unwrap();
        assert_eq!(names, vec!["Access Blue", "HMO Blue"]);
    }

    #[tokio::test]
    async fn test_plan_details_keep_every_row_in_selection_order() {
        let rows = source()
            .fetch_plan_details(&["HMO Blue".to_string(), "Access Blue".to_string()])
            .await
            .unwrap();
        let details: Vec<&str> = rows.iter().map(|r| r.detail.as_str()).collect();
        assert_eq!(details, vec!["copays", "pharmacy", "deductible"]);
    }
}
