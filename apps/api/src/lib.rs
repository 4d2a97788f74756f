//! Long-context Q&A demos over warehouse records: filings, contracts and plans.

pub mod completion;
pub mod config;
pub mod db;
pub mod demos;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod records;
pub mod routes;
pub mod state;
