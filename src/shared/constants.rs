//! Response messages. Clients match on some of these, so they are part of the
//! wire contract and stay in Spanish.

pub const API_ALIVE: &str = "API funcionando";

// =============================================================================
// ACCOUNTS
// =============================================================================

pub const REGISTER_FAILED: &str = "Usuario ya existe";
pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const LIST_ACCOUNTS_FAILED: &str = "Error al obtener los usuarios";
pub const ACCOUNT_DELETED: &str = "Usuario eliminado";
pub const ACCOUNT_NOT_FOUND: &str = "Usuario no encontrado";
pub const DELETE_ACCOUNT_FAILED: &str = "Error al borrar el usuario";

// =============================================================================
// TICKETS
// =============================================================================

pub const CREATE_TICKET_FAILED: &str = "Error al crear el ticket";
pub const DNI_REQUIRED: &str = "dni requerido para filtrar tickets";
pub const LIST_TICKETS_FAILED: &str = "Error al obtener los tickets";
pub const TICKET_DELETED: &str = "Ticket eliminado";
pub const TICKET_NOT_FOUND: &str = "Ticket no encontrado";
pub const DELETE_TICKET_FAILED: &str = "Error al borrar el ticket";

// =============================================================================
// SUBMISSIONS (account requests from the contact form)
// =============================================================================

pub const SUBMISSION_FIELDS_REQUIRED: &str = "Todos los campos son requeridos";
pub const SUBMISSION_SENT: &str = "Tu solicitud ha sido enviada al administrador.";
pub const SAVE_SUBMISSION_FAILED: &str = "Error al guardar la solicitud";
pub const LIST_SUBMISSIONS_FAILED: &str = "Error al obtener las solicitudes";
pub const SUBMISSION_DELETED: &str = "Solicitud eliminada";
pub const SUBMISSION_NOT_FOUND: &str = "Solicitud no encontrada";
pub const DELETE_SUBMISSION_FAILED: &str = "Error al borrar la solicitud";

pub const INTERNAL_ERROR: &str = "Error interno del servidor";
