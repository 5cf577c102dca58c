use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{CreateTicketDto, TicketResponseDto};
use crate::features::tickets::models::NewTicket;
use crate::features::tickets::repositories::TicketRepository;
use crate::shared::constants::{
    CREATE_TICKET_FAILED, DELETE_TICKET_FAILED, DNI_REQUIRED, LIST_TICKETS_FAILED,
    TICKET_NOT_FOUND,
};

/// Service for ticket operations
pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
}

impl TicketService {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    /// Create a ticket. A missing field is treated like a rejected insert:
    /// 500 with the generic message, nothing persisted.
    pub async fn create(&self, dto: CreateTicketDto) -> Result<TicketResponseDto> {
        let new_ticket = NewTicket::try_from(dto).map_err(|reason| {
            tracing::error!("Failed to create ticket: {}", reason);
            AppError::Internal(CREATE_TICKET_FAILED.to_string())
        })?;

        let ticket = self.repository.insert(new_ticket).await.map_err(|e| {
            tracing::error!("Failed to create ticket: {:?}", e);
            AppError::Internal(CREATE_TICKET_FAILED.to_string())
        })?;

        tracing::info!("Ticket created: id={}, dni={}", ticket.id, ticket.dni);

        Ok(ticket.into())
    }

    /// List tickets for a requester, newest first
    pub async fn list_by_dni(&self, dni: Option<&str>) -> Result<Vec<TicketResponseDto>> {
        let dni = dni
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::Validation(DNI_REQUIRED.to_string()))?;

        let tickets = self.repository.list_by_dni(dni).await.map_err(|e| {
            tracing::error!("Failed to list tickets by dni: {:?}", e);
            AppError::Internal(LIST_TICKETS_FAILED.to_string())
        })?;

        Ok(tickets.into_iter().map(|t| t.into()).collect())
    }

    /// Delete a ticket by id; `None` is an id that could not be parsed
    pub async fn delete(&self, id: Option<i32>) -> Result<()> {
        let Some(id) = id else {
            return Err(AppError::NotFound(TICKET_NOT_FOUND.to_string()));
        };

        let deleted = self.repository.delete(id).await.map_err(|e| {
            tracing::error!("Failed to delete ticket {}: {:?}", id, e);
            AppError::Internal(DELETE_TICKET_FAILED.to_string())
        })?;

        if !deleted {
            return Err(AppError::NotFound(TICKET_NOT_FOUND.to_string()));
        }

        tracing::info!("Ticket deleted: id={}", id);
        Ok(())
    }
}
