//! Domain model (task records, ids, priorities, errors).

pub mod errors;
pub mod ids;
pub mod priority;
pub mod task;

pub use self::errors::StoreError;
pub use self::ids::TaskId;
pub use self::priority::Priority;
pub use self::task::{NewTask, Task, sort_newest_first};
