use rusqlite::Connection;

use crate::error::Result;

/// Initialise the subscriber schema in `conn`. Safe to call on every
/// startup; CREATE IF NOT EXISTS keeps it idempotent.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS subscribers (
            chat_id             INTEGER NOT NULL PRIMARY KEY,
            location            TEXT,               -- NULL until /setdaily
            digest_enabled      INTEGER NOT NULL DEFAULT 0,
            watch_enabled       INTEGER NOT NULL DEFAULT 0,
            watch_alert_active  INTEGER NOT NULL DEFAULT 0,
            created_at          TEXT    NOT NULL,
            updated_at          TEXT    NOT NULL
        ) STRICT;
        ",
    )?;
    Ok(())
}
