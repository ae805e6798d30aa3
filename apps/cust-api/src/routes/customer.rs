//! Customer routes

use axum::routing::get;
use axum::Router;

use custsvc_domain::customer::CustomerUsecase;

use crate::handlers::customer::{create_user, delete_user, get_user, list_users, update_user};
use crate::AppState;

/// Create customer routes
pub fn routes<U: CustomerUsecase + 'static>() -> Router<AppState<U>> {
    Router::new()
        .route("/users", get(list_users::<U>).post(create_user::<U>))
        .route(
            "/users/:id",
            get(get_user::<U>)
                .put(update_user::<U>)
                .delete(delete_user::<U>),
        )
}
