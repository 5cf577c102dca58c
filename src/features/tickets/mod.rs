//! Support tickets, retrieved by the requester's `dni`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/ticket` | Create a ticket |
//! | GET | `/api/ticket?dni=...` | List a requester's tickets, newest first |
//! | DELETE | `/api/ticket/{id}` | Delete a ticket |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgTicketRepository, TicketRepository};
pub use services::TicketService;
