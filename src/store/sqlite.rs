//! Key-value storage backed by SQLite.
//!
//! Holds both the saved-excuse blob and persisted preferences
//! (see [`config`](crate::config)) in one `kv` table.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::KeyValueStore;

/// Path that opens a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Persistent key-value store in a single SQLite table.
pub struct SqliteKv {
    conn: Mutex<Connection>,
}

impl SqliteKv {
    /// Open or create the `kv` table at `path`, creating parent directories.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        if path != IN_MEMORY
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path).context("failed to open excuse database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create kv table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(IN_MEMORY)
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Upsert.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_kv() -> SqliteKv {
        SqliteKv::in_memory().unwrap()
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        assert!(mem_kv().get("savedExcuses").unwrap().is_none());
    }

    #[test]
    fn set_overwrites_existing() {
        let kv = mem_kv();
        kv.set("excuseCount", "3").unwrap();
        kv.set("excuseCount", "5").unwrap();
        assert_eq!(kv.get("excuseCount").unwrap().unwrap(), "5");
    }

    #[test]
    fn remove_nonexistent_is_ok() {
        mem_kv().remove("nonexistent").unwrap();
    }

    #[test]
    fn keys_are_independent() {
        let kv = mem_kv();
        kv.set("savedExcuses", "[]").unwrap();
        kv.set("excuseCount", "4").unwrap();
        kv.remove("savedExcuses").unwrap();
        assert!(kv.get("savedExcuses").unwrap().is_none());
        assert_eq!(kv.get("excuseCount").unwrap().unwrap(), "4");
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("alibi.db");
        let kv = SqliteKv::open(path.to_str().unwrap()).unwrap();
        kv.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv-test.db");
        let path_str = path.to_str().unwrap();

        {
            let kv = SqliteKv::open(path_str).unwrap();
            kv.set("savedExcuses", "[]").unwrap();
        }

        {
            let kv = SqliteKv::open(path_str).unwrap();
            assert_eq!(kv.get("savedExcuses").unwrap().unwrap(), "[]");
        }
    }
}
