//! SQLite-backed key-value backend.
//!
//! One `kv` table stands in for web local storage; SQL details stay inside
//! this persistence boundary. The connection must come from
//! [`open_db`](crate::db::open_db) so the schema is already applied.

use rusqlite::{params, Connection, OptionalExtension};

use super::{BackendResult, KeyValueBackend};

/// Key-value backend over a bootstrapped SQLite connection.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueBackend for SqliteBackend {
    fn get_item(&self, key: &str) -> BackendResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> BackendResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BackendResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueBackend, SqliteBackend};
    use crate::db::open_db_in_memory;

    #[test]
    fn set_get_remove_roundtrip() {
        let backend = SqliteBackend::new(open_db_in_memory().unwrap());

        assert_eq!(backend.get_item("k").unwrap(), None);
        backend.set_item("k", "v1").unwrap();
        assert_eq!(backend.get_item("k").unwrap().as_deref(), Some("v1"));

        backend.set_item("k", "v2").unwrap();
        assert_eq!(backend.get_item("k").unwrap().as_deref(), Some("v2"));

        backend.remove_item("k").unwrap();
        assert_eq!(backend.get_item("k").unwrap(), None);
    }
}
