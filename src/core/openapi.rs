use utoipa::{Modify, OpenApi};

use crate::features::accounts::{dtos as accounts_dtos, handlers as accounts_handlers};
use crate::features::health::handlers as health_handlers;
use crate::features::submissions::{dtos as submissions_dtos, handlers as submissions_handlers};
use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse, SuccessResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health_handlers::api_test,
        health_handlers::health_check,
        // Accounts
        accounts_handlers::register,
        accounts_handlers::login,
        accounts_handlers::list_accounts,
        accounts_handlers::delete_account,
        // Tickets
        tickets_handlers::create_ticket,
        tickets_handlers::list_tickets,
        tickets_handlers::delete_ticket,
        // Submissions
        submissions_handlers::create_submission,
        submissions_handlers::list_submissions,
        submissions_handlers::delete_submission,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            SuccessResponse,
            // Accounts
            accounts_dtos::RegisterAccountDto,
            accounts_dtos::LoginDto,
            accounts_dtos::AccountResponseDto,
            // Tickets
            tickets_dtos::CreateTicketDto,
            tickets_dtos::TicketResponseDto,
            // Submissions
            submissions_dtos::CreateSubmissionDto,
            submissions_dtos::SubmissionResponseDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness and smoke-test endpoints"),
        (name = "accounts", description = "Registration, login and account administration"),
        (name = "tickets", description = "Support tickets, filtered by requester dni"),
        (name = "submissions", description = "Account requests from the contact form"),
    ),
    info(
        title = "Mesa de Ayuda API",
        version = "0.1.0",
        description = "Usuarios, tickets de soporte y solicitudes de cuenta",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
