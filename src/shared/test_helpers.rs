//! In-memory stores and server builders for handler and service tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;

use crate::core::app::{api_router, AppServices};
use crate::core::config::PasswordStorage;
use crate::core::error::{StoreError, StoreResult};
use crate::features::accounts::models::{Account, NewAccount};
use crate::features::accounts::AccountRepository;
use crate::features::submissions::models::{NewSubmission, Submission};
use crate::features::submissions::SubmissionRepository;
use crate::features::tickets::models::{NewTicket, Ticket};
use crate::features::tickets::TicketRepository;

/// Rows plus a serial counter, like a table with an `id SERIAL` column.
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<T>(table: &Mutex<Table<T>>) -> MutexGuard<'_, Table<T>> {
    table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
pub struct InMemoryAccountRepository {
    table: Mutex<Table<Account>>,
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: NewAccount) -> StoreResult<Account> {
        let mut table = lock(&self.table);
        if table.rows.iter().any(|a| a.username == account.username) {
            return Err(StoreError::UniqueViolation(
                "duplicate key value violates unique constraint \"usuarios_username_key\""
                    .to_string(),
            ));
        }

        let now = Utc::now();
        let row = Account {
            id: table.next_id(),
            username: account.username,
            password: account.password,
            email: account.email,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<Account>> {
        Ok(lock(&self.table)
            .rows
            .iter()
            .find(|a| a.username == username && a.password == password)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<Account>> {
        Ok(lock(&self.table)
            .rows
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        Ok(lock(&self.table).rows.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let mut table = lock(&self.table);
        let before = table.rows.len();
        table.rows.retain(|a| a.id != id);
        Ok(table.rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryTicketRepository {
    table: Mutex<Table<Ticket>>,
}

impl InMemoryTicketRepository {
    pub fn is_empty(&self) -> bool {
        lock(&self.table).rows.is_empty()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn insert(&self, ticket: NewTicket) -> StoreResult<Ticket> {
        let mut table = lock(&self.table);
        let now = Utc::now();
        let row = Ticket {
            id: table.next_id(),
            nombre: ticket.nombre,
            fecha: ticket.fecha,
            hora: ticket.hora,
            dni: ticket.dni,
            mensaje: ticket.mensaje,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn list_by_dni(&self, dni: &str) -> StoreResult<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = lock(&self.table)
            .rows
            .iter()
            .filter(|t| t.dni == dni)
            .cloned()
            .collect();
        tickets.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(tickets)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let mut table = lock(&self.table);
        let before = table.rows.len();
        table.rows.retain(|t| t.id != id);
        Ok(table.rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemorySubmissionRepository {
    table: Mutex<Table<Submission>>,
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(&self, submission: NewSubmission) -> StoreResult<Submission> {
        let mut table = lock(&self.table);
        let now = Utc::now();
        let row = Submission {
            id: table.next_id(),
            nombre: submission.nombre,
            email: submission.email,
            mensaje: submission.mensaje,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> StoreResult<Vec<Submission>> {
        Ok(lock(&self.table).rows.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let mut table = lock(&self.table);
        let before = table.rows.len();
        table.rows.retain(|s| s.id != id);
        Ok(table.rows.len() < before)
    }
}

/// A store whose every call fails as if the database were unreachable.
pub struct FailingStore;

fn unreachable_store<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl AccountRepository for FailingStore {
    async fn insert(&self, _account: NewAccount) -> StoreResult<Account> {
        unreachable_store()
    }

    async fn find_by_credentials(
        &self,
        _username: &str,
        _password: &str,
    ) -> StoreResult<Option<Account>> {
        unreachable_store()
    }

    async fn find_by_username(&self, _username: &str) -> StoreResult<Option<Account>> {
        unreachable_store()
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        unreachable_store()
    }

    async fn delete(&self, _id: i32) -> StoreResult<bool> {
        unreachable_store()
    }
}

#[async_trait]
impl TicketRepository for FailingStore {
    async fn insert(&self, _ticket: NewTicket) -> StoreResult<Ticket> {
        unreachable_store()
    }

    async fn list_by_dni(&self, _dni: &str) -> StoreResult<Vec<Ticket>> {
        unreachable_store()
    }

    async fn delete(&self, _id: i32) -> StoreResult<bool> {
        unreachable_store()
    }
}

#[async_trait]
impl SubmissionRepository for FailingStore {
    async fn insert(&self, _submission: NewSubmission) -> StoreResult<Submission> {
        unreachable_store()
    }

    async fn list(&self) -> StoreResult<Vec<Submission>> {
        unreachable_store()
    }

    async fn delete(&self, _id: i32) -> StoreResult<bool> {
        unreachable_store()
    }
}

pub fn in_memory_services(password_storage: PasswordStorage) -> AppServices {
    AppServices::new(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(InMemoryTicketRepository::default()),
        Arc::new(InMemorySubmissionRepository::default()),
        password_storage,
    )
}

pub fn failing_services() -> AppServices {
    let store = Arc::new(FailingStore);
    AppServices::new(
        store.clone(),
        store.clone(),
        store,
        PasswordStorage::Plaintext,
    )
}

/// API routes backed by fresh in-memory tables.
pub fn test_server(password_storage: PasswordStorage) -> TestServer {
    TestServer::new(api_router(&in_memory_services(password_storage)))
        .expect("failed to build test server")
}

/// API routes whose store is unreachable.
pub fn failing_server() -> TestServer {
    TestServer::new(api_router(&failing_services())).expect("failed to build test server")
}
