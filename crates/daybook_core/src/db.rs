//! SQLite bootstrap for the key-value storage file.
//!
//! # Responsibility
//! - Open file or in-memory connections and apply the `kv` schema.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Callers never touch the `kv` table before the schema is applied.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::{Duration, Instant};

/// Schema version written by this binary.
const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opens a storage file and ensures the `kv` schema exists.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");
    let result = Connection::open(path)
        .map_err(DbError::from)
        .and_then(bootstrap_connection);
    log_open_result("file", started_at, result)
}

/// Opens an in-memory storage database with the `kv` schema applied.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");
    let result = Connection::open_in_memory()
        .map_err(DbError::from)
        .and_then(bootstrap_connection);
    log_open_result("memory", started_at, result)
}

fn log_open_result(
    mode: &str,
    started_at: Instant,
    result: DbResult<Connection>,
) -> DbResult<Connection> {
    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn bootstrap_connection(conn: Connection) -> DbResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_schema(&conn)?;
    Ok(conn)
}

fn apply_schema(conn: &Connection) -> DbResult<()> {
    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if db_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if db_version == SCHEMA_VERSION {
        return Ok(());
    }

    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    Ok(())
}
