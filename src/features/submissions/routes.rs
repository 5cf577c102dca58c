use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::submissions::handlers;
use crate::features::submissions::services::SubmissionService;

/// Create routes for the submissions feature
///
/// Note: `/api/contacto` is the public contact form; the listing and delete
/// routes are meant for the administrator.
pub fn routes(service: Arc<SubmissionService>) -> Router {
    Router::new()
        .route("/api/contacto", post(handlers::create_submission))
        .route("/api/solicitudes", get(handlers::list_submissions))
        .route("/api/solicitudes/{id}", delete(handlers::delete_submission))
        .with_state(service)
}
