//! Fee status lookup endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use common::StudentId;
use domain::{FeeStatusResult, FeeStatusService};
use fee_store::StudentRepository;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: StudentRepository> {
    pub fee_status_service: FeeStatusService<R>,
}

impl<R: StudentRepository> AppState<R> {
    pub fn new(repository: R) -> Self {
        Self {
            fee_status_service: FeeStatusService::new(repository),
        }
    }
}

const STUDENT_ID_PARAM: &str = "StudentID";

/// GET /GetFeeStatus?StudentID=... — report a student's fee status.
///
/// When `StudentID` is repeated the first occurrence wins. An undecodable
/// query string is treated the same as a missing `StudentID`.
#[tracing::instrument(skip(state, query))]
pub async fn get<R: StudentRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FeeStatusResult>, ApiError> {
    let student_id = query
        .ok()
        .and_then(|Query(params)| {
            params
                .into_iter()
                .find(|(key, _)| key == STUDENT_ID_PARAM)
                .map(|(_, value)| value)
        })
        .and_then(StudentId::parse)
        .ok_or(ApiError::MissingParameter)?;

    let result = state.fee_status_service.get_fee_status(&student_id).await?;

    Ok(Json(result))
}
