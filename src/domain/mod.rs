pub mod filter;
pub mod task;

pub use filter::{StatusFilter, TaskFilter};
pub use task::{Task, TaskStatus};
