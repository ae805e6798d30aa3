//! Nationality routes

use axum::routing::get;
use axum::Router;

use custsvc_domain::customer::CustomerUsecase;

use crate::handlers::nationality::list_nationalities;
use crate::AppState;

/// Create nationality routes
pub fn routes<U: CustomerUsecase + 'static>() -> Router<AppState<U>> {
    Router::new().route("/nationalities", get(list_nationalities::<U>))
}
