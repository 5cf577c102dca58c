use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::AppError;
use crate::core::extractor::RejectedBody;
use crate::features::tickets::models::{NewTicket, Ticket};
use crate::shared::constants::CREATE_TICKET_FAILED;

/// Request DTO for creating a ticket.
///
/// Every field is required. They are optional here so a missing one surfaces
/// as the endpoint's own error instead of a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketDto {
    #[serde(default, deserialize_with = "text_or_number")]
    pub nombre: Option<String>,
    /// Calendar date, `YYYY-MM-DD` or an ISO 8601 timestamp
    #[schema(example = "2025-06-01")]
    pub fecha: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub hora: Option<String>,
    pub mensaje: Option<String>,
    /// Numbers are accepted and stored as their decimal text
    #[serde(default, deserialize_with = "text_or_number")]
    pub dni: Option<String>,
}

impl RejectedBody for CreateTicketDto {
    fn rejected_body() -> AppError {
        AppError::Internal(CREATE_TICKET_FAILED.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// String columns also take JSON numbers, kept as their text form.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Integer(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }),
    )
}

/// Date part of `raw`: a plain `YYYY-MM-DD`, an RFC 3339 timestamp (taken at
/// its own offset), or a timestamp without offset.
fn parse_fecha(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date())
        })
}

impl TryFrom<CreateTicketDto> for NewTicket {
    /// Describes the first offending field.
    type Error = String;

    fn try_from(dto: CreateTicketDto) -> Result<Self, Self::Error> {
        fn field(value: Option<String>, name: &str) -> Result<String, String> {
            value.ok_or_else(|| format!("{} is required", name))
        }

        let fecha = field(dto.fecha, "fecha")?;
        let fecha = parse_fecha(&fecha)
            .map_err(|e| format!("fecha '{}' is not a valid date: {}", fecha, e))?;

        Ok(Self {
            nombre: field(dto.nombre, "nombre")?,
            fecha,
            hora: field(dto.hora, "hora")?,
            dni: field(dto.dni, "dni")?,
            mensaje: field(dto.mensaje, "mensaje")?,
        })
    }
}

/// Query parameters for listing tickets
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTicketsQuery {
    /// Requester identifier to filter by (required)
    pub dni: Option<String>,
}

/// Response DTO for ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponseDto {
    pub id: i32,
    pub nombre: String,
    pub fecha: NaiveDate,
    pub hora: String,
    pub dni: String,
    pub mensaje: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            nombre: t.nombre,
            fecha: t.fecha,
            hora: t.hora,
            dni: t.dni,
            mensaje: t.mensaje,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
