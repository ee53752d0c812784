//! SQLite registration store (feature `sqlite`).
//!
//! One table, `registrations`, with a `UNIQUE(user_id, event_id)` constraint
//! that enforces the one-registration-per-pair rule.  `rusqlite` is
//! synchronous, so every query runs on Tokio's blocking pool.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use fr_core::{EventId, UserId};
use parking_lot::Mutex;
use rusqlite::{params, Connection, ErrorCode};
use tokio::task;

use crate::{RegistrationError, RegistrationResult, RegistrationStore};

const SCHEMA: &str = "
    PRAGMA journal_mode = WAL;
    CREATE TABLE IF NOT EXISTS registrations (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id       INTEGER NOT NULL,
        event_id      INTEGER NOT NULL,
        registered_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        UNIQUE(user_id, event_id)
    );";

/// Registrations persisted in an SQLite database.
#[derive(Clone)]
pub struct SqliteRegistrationStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRegistrationStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> RegistrationResult<Self> {
        Self::init(Connection::open(path)?)
    }

    /// A private in-memory database.
    pub fn open_in_memory() -> RegistrationResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> RegistrationResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> RegistrationResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> RegistrationResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        task::spawn_blocking(move || {
            let guard = conn.lock();
            f(&*guard)
        })
            .await
            .map_err(|e| RegistrationError::Join(e.to_string()))?
    }
}

#[async_trait]
impl RegistrationStore for SqliteRegistrationStore {
    async fn register(&self, user: UserId, event: EventId) -> RegistrationResult<()> {
        self.with_conn(move |conn| {
            match conn.execute(
                "INSERT INTO registrations (user_id, event_id) VALUES (?1, ?2)",
                params![user.get(), event.get()],
            ) {
                Ok(_) => Ok(()),
                Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                    Err(RegistrationError::AlreadyRegistered { user, event })
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn cancel(&self, user: UserId, event: EventId) -> RegistrationResult<bool> {
        self.with_conn(move |conn| {
            let removed = conn.execute(
                "DELETE FROM registrations WHERE user_id = ?1 AND event_id = ?2",
                params![user.get(), event.get()],
            )?;
            Ok(removed > 0)
        })
        .await
    }

    async fn registrations_for(&self, user: UserId) -> RegistrationResult<Vec<EventId>> {
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare_cached(
                "SELECT event_id FROM registrations WHERE user_id = ?1 ORDER BY event_id",
            )?;
            let rows = stmt.query_map(params![user.get()], |row| row.get::<_, u32>(0))?;
            let mut events = Vec::new();
            for id in rows {
                events.push(EventId(id?));
            }
            Ok(events)
        })
        .await
    }

    async fn cancel_event(&self, event: EventId) -> RegistrationResult<usize> {
        self.with_conn(move |conn| {
            Ok(conn.execute("DELETE FROM registrations WHERE event_id = ?1", params![event.get()])?)
        })
        .await
    }

    async fn count(&self) -> RegistrationResult<usize> {
        self.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM registrations", [], |row| row.get(0))?;
            Ok(n as usize)
        })
        .await
    }
}
