//! Store implementations.
//!
//! - [`FirebaseTaskStore`]: the hosted Realtime Database (production).
//! - [`InMemoryTaskStore`]: tests and offline development.

pub mod firebase;
pub mod memory;

pub use self::firebase::FirebaseTaskStore;
pub use self::memory::InMemoryTaskStore;
