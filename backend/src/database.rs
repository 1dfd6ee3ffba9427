//! Database connection opened once at process start, and the queries the
//! services run against it.
//!
//! Soil tests are stored document style: one row per record with the
//! descriptions kept as a JSON array, so a record always comes back with its
//! descriptions in the order they were submitted.
//!
//! A failed connection does not stop the server. `connect_db` logs the error
//! and hands back a disconnected `DbState`; every query on it then fails with
//! `AppError::Disconnected` and the handlers answer with an error body.

use crate::error::AppError;
use common::model::soil::SoilTest;
use common::requests::CreateSoilRequest;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS soil (
        seq          INTEGER PRIMARY KEY AUTOINCREMENT,
        id           TEXT NOT NULL UNIQUE,
        name         TEXT NOT NULL,
        descriptions TEXT NOT NULL DEFAULT '[]',
        created_at   TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
    CREATE TABLE IF NOT EXISTS sessions (
        token      TEXT PRIMARY KEY,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
";

/// Shared handle to the single database connection.
///
/// Cloned into every Actix worker as `web::Data`. `conn` is `None` when the
/// connection could not be opened at start.
#[derive(Clone)]
pub struct DbState {
    conn: Option<Arc<Mutex<Connection>>>,
}

/// Opens the connection described by `url` and prepares the schema.
///
/// Accepted forms: `sqlite://<path>`, `sqlite:<path>`, a bare path, or
/// `:memory:`. Any other scheme (a `mongodb://` string, say) leaves the
/// state disconnected. Never retries and never aborts the process.
pub fn connect_db(url: &str) -> DbState {
    let target = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);

    if let Some((scheme, _)) = target.split_once("://") {
        error!("Error in Database unsupported connection scheme {}", scheme);
        return DbState::disconnected();
    }

    match open(target) {
        Ok(conn) => {
            info!("Connected To Database {}", host_of(target));
            DbState {
                conn: Some(Arc::new(Mutex::new(conn))),
            }
        }
        Err(e) => {
            error!("Error in Database {}", e);
            DbState::disconnected()
        }
    }
}

fn open(target: &str) -> Result<Connection, rusqlite::Error> {
    let conn = if target == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(target)?
    };
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

fn host_of(target: &str) -> String {
    if target == ":memory:" {
        "in-memory".to_string()
    } else {
        Path::new(target).display().to_string()
    }
}

impl DbState {
    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn connection(&self) -> Result<&Mutex<Connection>, AppError> {
        self.conn.as_deref().ok_or(AppError::Disconnected)
    }

    /// Every soil test in insertion order.
    pub async fn list_soil(&self) -> Result<Vec<SoilTest>, AppError> {
        let conn = self.connection()?.lock().await;
        let mut stmt = conn.prepare("SELECT id, name, descriptions FROM soil ORDER BY seq")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, name, descriptions)| -> Result<SoilTest, AppError> {
                Ok(SoilTest {
                    id,
                    name,
                    descriptions: serde_json::from_str(&descriptions)?,
                })
            })
            .collect()
    }

    /// Stores a new soil test under a freshly generated id.
    pub async fn insert_soil(&self, request: &CreateSoilRequest) -> Result<SoilTest, AppError> {
        let descriptions = serde_json::to_string(&request.descriptions)?;
        let id = Uuid::new_v4().to_string();

        let conn = self.connection()?.lock().await;
        conn.execute(
            "INSERT INTO soil (id, name, descriptions) VALUES (?1, ?2, ?3)",
            params![&id, &request.name, &descriptions],
        )?;

        Ok(SoilTest {
            id,
            name: request.name.clone(),
            descriptions: request.descriptions.clone(),
        })
    }

    /// Returns `false` when no soil test has this id.
    pub async fn delete_soil(&self, id: &str) -> Result<bool, AppError> {
        let conn = self.connection()?.lock().await;
        let deleted = conn.execute("DELETE FROM soil WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    /// Makes `token` valid for the verification endpoint.
    pub async fn register_token(&self, token: &str) -> Result<(), AppError> {
        let conn = self.connection()?.lock().await;
        conn.execute(
            "INSERT OR IGNORE INTO sessions (token) VALUES (?1)",
            params![token],
        )?;
        Ok(())
    }

    pub async fn token_exists(&self, token: &str) -> Result<bool, AppError> {
        let conn = self.connection()?.lock().await;
        let found = conn
            .query_row(
                "SELECT 1 FROM sessions WHERE token = ?1",
                params![token],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}
