//! Ports - abstraction layer.
//!
//! Traits at the seams to the outside world: the backing store, the clock,
//! and key assignment. Implementations live in [`crate::impls`].

pub mod clock;
pub mod key_generator;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::key_generator::{KeyGenerator, UlidKeyGenerator};
pub use self::task_store::{TaskStore, ToggleOutcome};
