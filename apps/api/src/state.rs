use sqlx::PgPool;

use crate::analysis::orchestrator::AnalysisOrchestrator;
use crate::config::Config;
use crate::jobs::jooble::JoobleClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Providers in precedence order; OpenAI first.
    pub orchestrator: AnalysisOrchestrator,
    pub jobs: JoobleClient,
    pub config: Config,
}
