pub mod error_handling;
mod task_service;

pub use error_handling::BoardError;
pub use task_service::TaskService;
