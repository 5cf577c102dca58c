use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, RecordId};
use crate::features::tickets::dtos::{CreateTicketDto, ListTicketsQuery, TicketResponseDto};
use crate::features::tickets::services::TicketService;
use crate::shared::constants::TICKET_DELETED;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// Create a support ticket
#[utoipa::path(
    post,
    path = "/api/ticket",
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket created", body = TicketResponseDto),
        (status = 500, description = "Missing field or store failure", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = service.create(dto).await?;
    Ok(Json(ticket))
}

/// List a requester's tickets, newest first
#[utoipa::path(
    get,
    path = "/api/ticket",
    params(ListTicketsQuery),
    responses(
        (status = 200, description = "Tickets for the given dni", body = Vec<TicketResponseDto>),
        (status = 400, description = "dni missing", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
    Query(query): Query<ListTicketsQuery>,
) -> Result<Json<Vec<TicketResponseDto>>> {
    let tickets = service.list_by_dni(query.dni.as_deref()).await?;
    Ok(Json(tickets))
}

/// Delete a ticket by id
#[utoipa::path(
    delete,
    path = "/api/ticket/{id}",
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(service): State<Arc<TicketService>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new(TICKET_DELETED)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::core::config::PasswordStorage;
    use crate::shared::constants::{CREATE_TICKET_FAILED, DNI_REQUIRED, TICKET_NOT_FOUND};
    use crate::shared::test_helpers::{failing_server, test_server};

    use super::*;

    fn ticket(dni: &str, mensaje: &str) -> Value {
        json!({
            "nombre": "Ana Pérez",
            "fecha": "2025-06-01",
            "hora": "10:30",
            "mensaje": mensaje,
            "dni": dni
        })
    }

    async fn create(server: &TestServer, body: &Value) -> Value {
        let response = server.post("/api/ticket").json(body).await;
        response.assert_status_ok();
        response.json()
    }

    #[tokio::test]
    async fn test_create_returns_record_with_id_and_timestamp() {
        let server = test_server(PasswordStorage::Plaintext);
        let body = ticket("12345678", "La impresora no imprime");

        let created = create(&server, &body).await;

        assert!(created["id"].as_i64().is_some());
        assert!(created["createdAt"].is_string());
        assert!(created["updatedAt"].is_string());
        for field in ["nombre", "fecha", "hora", "mensaje", "dni"] {
            assert_eq!(created[field], body[field], "field {} changed", field);
        }
    }

    #[tokio::test]
    async fn test_missing_field_returns_500_and_persists_nothing() {
        let server = test_server(PasswordStorage::Plaintext);

        for missing in ["nombre", "fecha", "hora", "mensaje", "dni"] {
            let mut body = ticket("12345678", "sin campo");
            body.as_object_mut().unwrap().remove(missing);

            let response = server.post("/api/ticket").json(&body).await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.assert_json(&json!({ "error": CREATE_TICKET_FAILED }));
        }

        let tickets: Vec<Value> = server
            .get("/api/ticket")
            .add_query_param("dni", "12345678")
            .await
            .json();
        assert!(tickets.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_dni_newest_first() {
        let server = test_server(PasswordStorage::Plaintext);

        let first = create(&server, &ticket("12345678", "primero")).await;
        let second = create(&server, &ticket("12345678", "segundo")).await;
        create(&server, &ticket("87654321", "otro")).await;
        let third = create(&server, &ticket("12345678", "tercero")).await;

        let response = server
            .get("/api/ticket")
            .add_query_param("dni", "12345678")
            .await;
        response.assert_status_ok();
        let tickets: Vec<Value> = response.json();

        let ids: Vec<&Value> = tickets.iter().map(|t| &t["id"]).collect();
        assert_eq!(ids, vec![&third["id"], &second["id"], &first["id"]]);
        assert_eq!(tickets[0], third);
        assert!(tickets.iter().all(|t| t["dni"] == "12345678"));
    }

    #[tokio::test]
    async fn test_list_without_dni_is_rejected() {
        let server = test_server(PasswordStorage::Plaintext);

        let response = server.get("/api/ticket").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": DNI_REQUIRED }));

        server
            .get("/api/ticket")
            .add_query_param("dni", "")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_not_found() {
        let server = test_server(PasswordStorage::Plaintext);
        let created = create(&server, &ticket("12345678", "borrar")).await;
        let path = format!("/api/ticket/{}", created["id"]);

        let response = server.delete(&path).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "message": TICKET_DELETED }));

        let again = server.delete(&path).await;
        again.assert_status(StatusCode::NOT_FOUND);
        again.assert_json(&json!({ "error": TICKET_NOT_FOUND }));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_not_found() {
        let server = test_server(PasswordStorage::Plaintext);
        server
            .delete("/api/ticket/9999")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete("/api/ticket/abc")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_numeric_dni_is_stored_as_text() {
        let server = test_server(PasswordStorage::Plaintext);
        let mut body = ticket("12345678", "dni numérico");
        body["dni"] = json!(12345678);

        let created = create(&server, &body).await;
        assert_eq!(created["dni"], "12345678");

        let tickets: Vec<Value> = server
            .get("/api/ticket")
            .add_query_param("dni", "12345678")
            .await
            .json();
        assert_eq!(tickets.len(), 1);
    }

    #[tokio::test]
    async fn test_timestamp_fecha_is_stored_as_date() {
        let server = test_server(PasswordStorage::Plaintext);
        let mut body = ticket("12345678", "fecha con hora");
        body["fecha"] = json!("2025-06-01T00:00:00.000Z");

        let created = create(&server, &body).await;
        assert_eq!(created["fecha"], "2025-06-01");
    }

    #[tokio::test]
    async fn test_unreadable_body_returns_500_and_persists_nothing() {
        let server = test_server(PasswordStorage::Plaintext);

        let plain_text = server
            .post("/api/ticket")
            .text("nombre=Ana&dni=12345678")
            .await;
        plain_text.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        plain_text.assert_json(&json!({ "error": CREATE_TICKET_FAILED }));

        let malformed = server
            .post("/api/ticket")
            .content_type("application/json")
            .bytes("{\"dni\": ".into())
            .await;
        malformed.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        malformed.assert_json(&json!({ "error": CREATE_TICKET_FAILED }));

        let tickets: Vec<Value> = server
            .get("/api/ticket")
            .add_query_param("dni", "12345678")
            .await
            .json();
        assert!(tickets.is_empty());
    }

    #[tokio::test]
    async fn test_store_failures_return_500() {
        let server = failing_server();

        let response = server
            .post("/api/ticket")
            .json(&ticket("12345678", "x"))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": CREATE_TICKET_FAILED }));

        let response = server
            .get("/api/ticket")
            .add_query_param("dni", "12345678")
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Error al obtener los tickets" }));

        let response = server.delete("/api/ticket/1").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Error al borrar el ticket" }));
    }
}
