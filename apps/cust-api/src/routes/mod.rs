//! API routes

pub mod customer;
pub mod nationality;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use custsvc_domain::customer::CustomerUsecase;

use crate::dto::customer::{
    AckResponse, CustomerListItem, CustomerListResponse, CustomerPayload, CustomerResponse,
    FamilyMemberResponse, FamilyPayload,
};
use crate::dto::error::ErrorResponse;
use crate::dto::nationality::NationalityResponse;
use crate::{handlers, middleware, AppState};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::customer::list_users,
        handlers::customer::get_user,
        handlers::customer::create_user,
        handlers::customer::update_user,
        handlers::customer::delete_user,
        handlers::nationality::list_nationalities,
        healthz_handler
    ),
    components(
        schemas(
            CustomerPayload,
            FamilyPayload,
            CustomerResponse,
            FamilyMemberResponse,
            CustomerListItem,
            CustomerListResponse,
            NationalityResponse,
            AckResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "users", description = "Customer management endpoints"),
        (name = "nationalities", description = "Nationality reference data"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Customer Service API",
        version = "0.1.0",
        description = "CRUD service for customers and their family members"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router<U: CustomerUsecase + 'static>(
    state: AppState<U>,
    allow_origins: Vec<String>,
) -> Router {
    let allow_origins = Arc::new(allow_origins);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(customer::routes::<U>())
        .merge(nationality::routes::<U>())
        .route("/healthz", axum::routing::get(healthz_handler))
        .layer(axum::middleware::from_fn(move |request, next| {
            let allow_origins = allow_origins.clone();
            async move { middleware::cors::enforce(allow_origins, request, next).await }
        }))
        .with_state(state)
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = "health"
)]
async fn healthz_handler() -> StatusCode {
    StatusCode::OK
}
