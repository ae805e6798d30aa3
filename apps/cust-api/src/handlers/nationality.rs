//! Nationality handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info};

use custsvc_domain::customer::CustomerUsecase;

use crate::dto::error::ErrorResponse;
use crate::dto::nationality::NationalityResponse;
use crate::handlers::internal_error;
use crate::AppState;

/// List the nationality reference data, ordered by name
#[utoipa::path(
    get,
    path = "/nationalities",
    responses(
        (status = 200, description = "All nationalities ordered by name", body = [NationalityResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "nationalities"
)]
pub async fn list_nationalities<U: CustomerUsecase>(
    State(state): State<AppState<U>>,
) -> impl IntoResponse {
    match state.usecase.list_nationalities().await {
        Ok(nationalities) => {
            info!(count = nationalities.len(), "list_nationalities ok");
            let data: Vec<NationalityResponse> = nationalities
                .iter()
                .map(NationalityResponse::from_nationality)
                .collect();
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(err) => {
            error!(error = %err, "list_nationalities failed");
            internal_error().into_response()
        }
    }
}
