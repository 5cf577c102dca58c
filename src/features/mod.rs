pub mod accounts;
pub mod health;
pub mod submissions;
pub mod tickets;
