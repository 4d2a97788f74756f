pub mod contract;
pub mod filing;
pub mod plan;
