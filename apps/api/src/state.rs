use std::sync::Arc;

use sqlx::PgPool;

use crate::classification::classifier::FitClassifier;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable classifier backend. Default: ThresholdClassifier.
    pub classifier: Arc<dyn FitClassifier>,
}
