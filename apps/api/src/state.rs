use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::records::RecordSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Warehouse access. Default: PgRecordSource over the startup pool.
    pub records: Arc<dyn RecordSource>,
    pub completion: CompletionClient,
    pub config: Config,
}
