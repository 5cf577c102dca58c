pub mod account_service;
pub mod password_service;

pub use account_service::AccountService;
pub use password_service::PasswordService;
