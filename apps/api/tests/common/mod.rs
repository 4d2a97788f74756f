// Shared setup for tests that run against a real Postgres warehouse.

pub mod fixtures;
pub mod harness;

pub use harness::*;
