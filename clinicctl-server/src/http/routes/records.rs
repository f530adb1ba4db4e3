//! Dated-record endpoints, generic over the record kind
//!
//! Mounted once per table: `GET` lists every row, `POST` creates one from
//! flat request parameters.

use axum::{extract::State, routing::get, Json, Router};

use crate::db::{RecordRepo, Table};
use crate::http::error::ApiError;
use crate::http::extractors::Params;
use crate::state::AppState;

/// GET {path}/ - list all records
async fn list_records<R: Table>(State(state): State<AppState>) -> Result<Json<Vec<R>>, ApiError> {
    let records = RecordRepo::<R>::new(state.pool()).list().await?;
    Ok(Json(records))
}

/// POST {path}/ - create a record from request parameters
async fn create_record<R: Table>(
    State(state): State<AppState>,
    Params(params): Params<R::Params>,
) -> Result<Json<R>, ApiError> {
    // Coerce before touching storage
    let new = R::parse(params)?;
    let record = RecordRepo::<R>::new(state.pool()).create(new).await?;
    Ok(Json(record))
}

/// Routes for one record kind, reachable with and without a trailing slash
pub fn router<R: Table>(path: &str) -> Router<AppState> {
    let handlers = get(list_records::<R>).post(create_record::<R>);

    Router::new()
        .route(&format!("{path}/"), handlers.clone())
        .route(path, handlers)
}
