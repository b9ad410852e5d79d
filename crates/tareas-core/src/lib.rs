//! tareas-core
//!
//! Data-access layer and aggregation for the tareas task manager.
//!
//! # Module layout
//! - **domain**: task model (`Task`, `NewTask`, `TaskId`, `Priority`, `StoreError`)
//! - **ports**: abstraction layer (`TaskStore`, `Clock`, `KeyGenerator`)
//! - **impls**: store implementations (`FirebaseTaskStore`, `InMemoryTaskStore`)
//! - **stats**: pure aggregation over a fetched task list
//! - **config**: store connection parameters
//!
//! The repository contract is deliberately thin: four operations against a
//! flat `tasks` collection, no local cache, no retry. Consumers re-fetch
//! the full list after every mutation and do their own filtering over it.

pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod stats;
