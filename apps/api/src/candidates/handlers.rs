use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::candidates::loader::load_candidates;
use crate::candidates::pipeline::{self, ResultPage};
use crate::candidates::query::CandidateQuery;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/candidates
///
/// Query pairs are taken raw so `job_id=a&job_id=b` keeps both values.
/// Parameters are validated before the data file is touched.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ResultPage>, AppError> {
    let query = CandidateQuery::from_pairs(pairs)?;
    let records = load_candidates(&state.candidates_file).await?;

    let page = pipeline::run(&records, &query);
    debug!(
        "Candidate query matched {} of {} (page {}/{})",
        page.total,
        records.len(),
        page.page,
        page.total_pages
    );

    Ok(Json(page))
}
