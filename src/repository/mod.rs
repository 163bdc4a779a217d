pub mod storage;
pub mod task_repository;

pub use storage::{KeyValueStore, MemoryStorage};
pub use task_repository::{TaskGateway, TaskRepository, DEFAULT_STORAGE_KEY};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
