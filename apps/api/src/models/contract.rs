use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A government procurement contract with its description length.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContractRow {
    pub agency: String,
    pub department: String,
    pub original_contract_title: String,
    pub original_contract_description: String,
    pub ccount: i32,
}
