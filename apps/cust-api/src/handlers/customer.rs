//! Customer handlers
//!
//! Decode transport input, validate it, call the usecase port, and map
//! outcomes onto status codes and the error envelope.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::{error, info, warn};

use custsvc_domain::customer::{CustomerError, CustomerUsecase, DEFAULT_PAGE_SIZE};

use crate::dto::customer::{
    AckResponse, CustomerListItem, CustomerListResponse, CustomerPayload, CustomerResponse,
    PayloadError,
};
use crate::dto::error::ErrorResponse;
use crate::handlers::{internal_error, invalid_id, invalid_json, not_found, parse_id, MSG_CONFLICT};
use crate::AppState;

/// Sizes above this fall back to the default rather than erroring
const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters of the list endpoint
///
/// `page` and `size` are decoded as raw strings and parsed leniently: a
/// non-numeric value behaves like an absent one.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

fn lenient_number(value: &Option<String>) -> i64 {
    value
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(0)
}

fn payload_response(err: &PayloadError) -> (StatusCode, Json<ErrorResponse>) {
    let envelope = match err.field_hints() {
        Some(fields) => ErrorResponse::with_fields(err.to_string(), fields),
        None => ErrorResponse::new(err.to_string()),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(envelope))
}

fn conflict_response() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::CONFLICT,
        Json(ErrorResponse::with_fields(
            MSG_CONFLICT,
            HashMap::from([("cst_email".to_string(), "already exists".to_string())]),
        )),
    )
}

/// List customers with search and pagination
#[utoipa::path(
    get,
    path = "/users",
    params(
        ("search" = Option<String>, Query, description = "Substring matched against name or email"),
        ("page" = Option<i64>, Query, description = "1-based page number, defaults to 1"),
        ("size" = Option<i64>, Query, description = "Page size in [1,100], defaults to 10")
    ),
    responses(
        (status = 200, description = "Matched page plus total match count", body = CustomerListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn list_users<U: CustomerUsecase>(
    State(state): State<AppState<U>>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let mut page = lenient_number(&query.page);
    let mut size = lenient_number(&query.size);
    if page < 1 {
        page = 1;
    }
    if size < 1 || size > MAX_PAGE_SIZE {
        size = DEFAULT_PAGE_SIZE;
    }
    let search = query.search.unwrap_or_default();

    match state.usecase.list(&search, page, size).await {
        Ok((rows, total)) => {
            info!(total, returned = rows.len(), "list_users ok");
            let data: Vec<CustomerListItem> =
                rows.iter().map(CustomerListItem::from_customer).collect();
            (StatusCode::OK, Json(CustomerListResponse { data, total })).into_response()
        }
        Err(err) => {
            error!(error = %err, "list_users failed");
            internal_error().into_response()
        }
    }
}

/// Fetch one customer with its family list
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Customer id, positive")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "No such customer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user<U: CustomerUsecase>(
    State(state): State<AppState<U>>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&raw_id) else {
        warn!(id = %raw_id, "get_user invalid id");
        return invalid_id().into_response();
    };

    match state.usecase.get(id).await {
        // an explicit not-found signal and an empty result are reported
        // identically
        Ok(None) | Err(CustomerError::NotFound) => not_found().into_response(),
        Ok(Some(customer)) => {
            info!(customer_id = id, "get_user ok");
            (StatusCode::OK, Json(CustomerResponse::new(customer.id, &customer))).into_response()
        }
        Err(err) => {
            error!(customer_id = id, error = %err, "get_user failed");
            internal_error().into_response()
        }
    }
}

/// Create a customer with its full family list in one transaction
#[utoipa::path(
    post,
    path = "/users",
    request_body = CustomerPayload,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 422, description = "Validation or date-format failure", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user<U: CustomerUsecase>(
    State(state): State<AppState<U>>,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(payload)) = payload else {
        warn!("create_user undecodable body");
        return invalid_json().into_response();
    };

    let customer = match payload.into_customer() {
        Ok(customer) => customer,
        Err(err) => {
            warn!(error = %err, "create_user payload rejected");
            return payload_response(&err).into_response();
        }
    };

    match state.usecase.create(&customer).await {
        Ok(id) => {
            info!(
                customer_id = id,
                email = %customer.email,
                family = customer.family.len(),
                "create_user ok"
            );
            (
                StatusCode::CREATED,
                Json(CustomerResponse::new(id, &customer)),
            )
                .into_response()
        }
        Err(CustomerError::Conflict) => {
            warn!(email = %customer.email, "create_user conflict");
            conflict_response().into_response()
        }
        Err(err) => {
            error!(email = %customer.email, error = %err, "create_user failed");
            internal_error().into_response()
        }
    }
}

/// Replace a customer's fields and entire family list
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Customer id, positive")),
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Customer updated", body = AckResponse),
        (status = 400, description = "Invalid id or malformed body", body = ErrorResponse),
        (status = 404, description = "No such customer", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 422, description = "Validation or date-format failure", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_user<U: CustomerUsecase>(
    State(state): State<AppState<U>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&raw_id) else {
        warn!(id = %raw_id, "update_user invalid id");
        return invalid_id().into_response();
    };
    let Ok(Json(payload)) = payload else {
        warn!(customer_id = id, "update_user undecodable body");
        return invalid_json().into_response();
    };

    let customer = match payload.into_customer() {
        Ok(customer) => customer,
        Err(err) => {
            warn!(customer_id = id, error = %err, "update_user payload rejected");
            return payload_response(&err).into_response();
        }
    };

    match state.usecase.update(id, &customer).await {
        Ok(()) => {
            info!(customer_id = id, family = customer.family.len(), "update_user ok");
            (StatusCode::OK, Json(AckResponse::ok())).into_response()
        }
        Err(CustomerError::NotFound) => not_found().into_response(),
        Err(CustomerError::Conflict) => {
            warn!(customer_id = id, email = %customer.email, "update_user conflict");
            conflict_response().into_response()
        }
        Err(err) => {
            error!(customer_id = id, error = %err, "update_user failed");
            internal_error().into_response()
        }
    }
}

/// Delete a customer; family rows go with it
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Customer id, positive")),
    responses(
        (status = 200, description = "Customer deleted", body = AckResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "No such customer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_user<U: CustomerUsecase>(
    State(state): State<AppState<U>>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&raw_id) else {
        warn!(id = %raw_id, "delete_user invalid id");
        return invalid_id().into_response();
    };

    match state.usecase.delete(id).await {
        Ok(()) => {
            info!(customer_id = id, "delete_user ok");
            (StatusCode::OK, Json(AckResponse::ok())).into_response()
        }
        Err(CustomerError::NotFound) => not_found().into_response(),
        Err(err) => {
            error!(customer_id = id, error = %err, "delete_user failed");
            internal_error().into_response()
        }
    }
}
