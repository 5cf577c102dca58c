use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::accounts::handlers;
use crate::features::accounts::services::AccountService;

/// Create routes for the accounts feature
///
/// Note: none of these routes require authentication, the listing and
/// delete endpoints included. Put them behind a gateway in production.
pub fn routes(service: Arc<AccountService>) -> Router {
    Router::new()
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/usuarios", get(handlers::list_accounts))
        .route("/api/usuarios/{id}", delete(handlers::delete_account))
        .with_state(service)
}
