use garoa_core::{JobKind, SubscriberId};

/// Identity of one live job: at most one task exists per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobKey {
    pub subscriber: SubscriberId,
    pub kind: JobKind,
}

impl JobKey {
    pub fn new(subscriber: SubscriberId, kind: JobKind) -> Self {
        Self { subscriber, kind }
    }
}

impl std::fmt::Display for JobKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.subscriber, self.kind)
    }
}
