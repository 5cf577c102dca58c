//! Account requests sent through the public contact form and reviewed by an
//! administrator.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/contacto` | Submit an account request |
//! | GET | `/api/solicitudes` | List all requests |
//! | DELETE | `/api/solicitudes/{id}` | Delete a request |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgSubmissionRepository, SubmissionRepository};
pub use services::SubmissionService;
