use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/api/ticket",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route("/api/ticket/{id}", delete(handlers::delete_ticket))
        .with_state(service)
}
