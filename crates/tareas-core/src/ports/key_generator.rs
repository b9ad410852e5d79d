//! KeyGenerator port - record key assignment.
//!
//! The Firebase store gets its keys from the server's push response; stores
//! that assign keys client-side (the in-memory one) go through this trait
//! instead, so key shape stays an implementation detail.

use ulid::Ulid;

use crate::domain::TaskId;
use crate::ports::Clock;

/// Mints a fresh record key.
///
/// # Thread safety
/// `Send + Sync` so one generator can back a shared store handle.
pub trait KeyGenerator: Send + Sync {
    fn generate_key(&self) -> TaskId;
}

/// ULID-based keys: sortable by creation time, collision-free without
/// coordination, same alphabet as Firebase push keys (URL-safe).
pub struct UlidKeyGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidKeyGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> KeyGenerator for UlidKeyGenerator<C> {
    fn generate_key(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TaskId::new(ulid.to_string())
    }
}
