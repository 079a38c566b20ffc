use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::jooble::JobSearchRequest;
use crate::jobs::listing::{listings_from_jooble, JobListingQuery, JobListingResponse, LISTING_SOURCE};
use crate::jobs::query::listing_search_query;
use crate::state::AppState;

/// GET /api/jobs
/// Listing page: keywords come from `analysis` when given, results are normalized.
pub async fn handle_job_listings(
    State(state): State<AppState>,
    Query(params): Query<JobListingQuery>,
) -> Result<Json<JobListingResponse>, AppError> {
    let search_query = listing_search_query(params.query.as_deref(), params.analysis.as_deref());
    let location = params.location.unwrap_or_default();
    let page = params.page.unwrap_or(1).max(1);

    let body = state.jobs.search_page(&search_query, &location, page).await?;
    let (jobs, total_results) = listings_from_jooble(&body)?;
    info!("Job search '{search_query}' returned {} listings", jobs.len());

    Ok(Json(JobListingResponse {
        jobs,
        total_results,
        current_page: page,
        search_query,
        api_used: LISTING_SOURCE,
    }))
}

/// POST /api/jobSearch
pub async fn handle_job_search(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<Value>, AppError> {
    let results = state.jobs.search(&request).await?;
    Ok(Json(results))
}
