//! User accounts: registration, login, and the superadmin listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/register` | Create an account |
//! | POST | `/api/login` | Check a username/password pair |
//! | GET | `/api/usuarios` | List every account |
//! | DELETE | `/api/usuarios/{id}` | Delete an account |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{AccountRepository, PgAccountRepository};
pub use services::AccountService;
