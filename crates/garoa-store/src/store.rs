use std::sync::Mutex;

use rusqlite::Connection;
use tracing::debug;

use garoa_core::SubscriberId;

use crate::db::init_db;
use crate::error::Result;
use crate::types::{row_to_subscriber, Subscriber};

const SELECT_COLUMNS: &str =
    "chat_id, location, digest_enabled, watch_enabled, watch_alert_active";

/// Durable subscriber state behind a single mutexed connection.
///
/// The mutex gives the single-writer discipline the rest of the system
/// relies on: a read-modify-write of one row can never interleave with
/// another writer's view. Concurrent firings share this one handle.
pub struct SubscriberStore {
    db: Mutex<Connection>,
}

impl SubscriberStore {
    /// Wrap an open connection, running migrations first.
    pub fn new(conn: Connection) -> Result<Self> {
        init_db(&conn)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Fetch the subscriber record, creating a default one if absent.
    pub fn get(&self, id: SubscriberId) -> Result<Subscriber> {
        let db = self.db.lock().unwrap();
        Self::ensure_row(&db, id)?;
        let sub = db.query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM subscribers WHERE chat_id = ?1"),
            [id.0],
            row_to_subscriber,
        )?;
        Ok(sub)
    }

    /// Set the location of interest. Subscription flags are untouched.
    pub fn set_location(&self, id: SubscriberId, location: &str) -> Result<()> {
        let db = self.db.lock().unwrap();
        Self::ensure_row(&db, id)?;
        db.execute(
            "UPDATE subscribers SET location = ?2, updated_at = datetime('now')
             WHERE chat_id = ?1",
            rusqlite::params![id.0, location],
        )?;
        debug!(subscriber = %id, location, "location updated");
        Ok(())
    }

    pub fn set_digest_enabled(&self, id: SubscriberId, enabled: bool) -> Result<()> {
        self.set_flag(id, "digest_enabled", enabled)
    }

    pub fn set_watch_enabled(&self, id: SubscriberId, enabled: bool) -> Result<()> {
        self.set_flag(id, "watch_enabled", enabled)
    }

    pub fn set_watch_alert_active(&self, id: SubscriberId, active: bool) -> Result<()> {
        self.set_flag(id, "watch_alert_active", active)
    }

    /// Snapshot of every record, for startup reconciliation.
    pub fn all(&self) -> Result<Vec<Subscriber>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM subscribers ORDER BY chat_id"
        ))?;
        let subs = stmt
            .query_map([], row_to_subscriber)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(subs)
    }

    /// One-statement read-modify-write of a single boolean column. The row
    /// is created first when missing so every setter works on first contact.
    /// `column` is always one of our own literals, never user input.
    fn set_flag(&self, id: SubscriberId, column: &str, value: bool) -> Result<()> {
        let db = self.db.lock().unwrap();
        Self::ensure_row(&db, id)?;
        db.execute(
            &format!(
                "UPDATE subscribers SET {column} = ?2, updated_at = datetime('now')
                 WHERE chat_id = ?1"
            ),
            rusqlite::params![id.0, value as i64],
        )?;
        debug!(subscriber = %id, column, value, "flag updated");
        Ok(())
    }

    fn ensure_row(db: &Connection, id: SubscriberId) -> Result<()> {
        db.execute(
            "INSERT OR IGNORE INTO subscribers (chat_id, created_at, updated_at)
             VALUES (?1, datetime('now'), datetime('now'))",
            [id.0],
        )?;
        Ok(())
    }
}
