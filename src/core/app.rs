//! Router assembly: feature routes, Swagger UI, and the HTTP layers shared by
//! every endpoint.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, Router};
use sqlx::PgPool;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, PasswordStorage, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::accounts::{
    routes as accounts_routes, AccountRepository, AccountService, PgAccountRepository,
};
use crate::features::health::routes as health_routes;
use crate::features::submissions::{
    routes as submissions_routes, PgSubmissionRepository, SubmissionRepository,
    SubmissionService,
};
use crate::features::tickets::{
    routes as tickets_routes, PgTicketRepository, TicketRepository, TicketService,
};

/// One service per feature, each owning its repository.
#[derive(Clone)]
pub struct AppServices {
    pub accounts: Arc<AccountService>,
    pub tickets: Arc<TicketService>,
    pub submissions: Arc<SubmissionService>,
}

impl AppServices {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        tickets: Arc<dyn TicketRepository>,
        submissions: Arc<dyn SubmissionRepository>,
        password_storage: PasswordStorage,
    ) -> Self {
        Self {
            accounts: Arc::new(AccountService::new(accounts, password_storage)),
            tickets: Arc::new(TicketService::new(tickets)),
            submissions: Arc::new(SubmissionService::new(submissions)),
        }
    }

    /// Services backed by Postgres through a shared pool
    pub fn postgres(pool: PgPool, password_storage: PasswordStorage) -> Self {
        Self::new(
            Arc::new(PgAccountRepository::new(pool.clone())),
            Arc::new(PgTicketRepository::new(pool.clone())),
            Arc::new(PgSubmissionRepository::new(pool)),
            password_storage,
        )
    }
}

/// Every API route, without cross-cutting layers
pub fn api_router(services: &AppServices) -> Router {
    Router::new()
        .merge(health_routes::routes())
        .merge(accounts_routes::routes(Arc::clone(&services.accounts)))
        .merge(tickets_routes::routes(Arc::clone(&services.tickets)))
        .merge(submissions_routes::routes(Arc::clone(&services.submissions)))
}

/// Swagger UI and the OpenAPI document, behind basic auth when configured
pub fn swagger_router(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::swagger_basic_auth,
            ))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger
        }
    }
}

/// Full application: API + Swagger wrapped in CORS, body limit, tracing and
/// request-id layers
pub fn build_app(services: &AppServices, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    Router::new()
        .merge(swagger_router(swagger))
        .merge(api_router(services))
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(middleware::cors_layer(&app.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
