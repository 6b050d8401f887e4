use garoa_core::SubscriberId;

/// Durable state of one subscriber.
///
/// Invariant (enforced by the command surface, not the store): either
/// subscription flag being true implies `location` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub id: SubscriberId,
    /// Free-text place name, as canonicalised by the weather API.
    pub location: Option<String>,
    pub digest_enabled: bool,
    pub watch_enabled: bool,
    /// Dedup latch: true while the current rain episode has been announced.
    pub watch_alert_active: bool,
}

impl Subscriber {
    /// Default record created on first contact.
    pub fn new(id: SubscriberId) -> Self {
        Self {
            id,
            location: None,
            digest_enabled: false,
            watch_enabled: false,
            watch_alert_active: false,
        }
    }
}

/// Map a SELECT row (column order: chat_id, location, digest_enabled,
/// watch_enabled, watch_alert_active) to a Subscriber. Centralised here so
/// every query in this crate stays consistent.
pub(crate) fn row_to_subscriber(row: &rusqlite::Row<'_>) -> rusqlite::Result<Subscriber> {
    Ok(Subscriber {
        id: SubscriberId(row.get(0)?),
        location: row.get(1)?,
        digest_enabled: row.get::<_, i64>(2)? != 0,
        watch_enabled: row.get::<_, i64>(3)? != 0,
        watch_alert_active: row.get::<_, i64>(4)? != 0,
    })
}
