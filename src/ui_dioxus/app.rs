use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::OnceLock;

use crate::config::BoardConfig;
use crate::repository::{KeyValueStore, TaskRepository};
use crate::services::TaskService;
use crate::ui_dioxus::views::TaskBoard;

static LAUNCH_CONFIG: OnceLock<BoardConfig> = OnceLock::new();

/// Hands the configuration loaded by `main` to the root component. Only the
/// first call has an effect.
pub fn set_launch_config(config: BoardConfig) {
    if LAUNCH_CONFIG.set(config).is_err() {
        tracing::warn!("Launch configuration already set, ignoring");
    }
}

#[component]
pub fn App() -> Element {
    // Provide the configuration and the task service as context
    let config = use_context_provider(|| LAUNCH_CONFIG.get().cloned().unwrap_or_default());
    use_context_provider(|| {
        let repository = TaskRepository::new(open_store(&config), config.storage_key.clone());
        TaskService::new(Rc::new(repository))
    });

    rsx! {
        div {
            class: "app-container",
            style: "min-height: 100vh; background: #f9fafb;",
            TaskBoard {}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store(config: &BoardConfig) -> Rc<dyn KeyValueStore> {
    let dir = config.resolved_data_dir();
    tracing::info!("Storing tasks under {:?}", dir);
    Rc::new(crate::repository::FileStorage::new(dir))
}

#[cfg(target_arch = "wasm32")]
fn open_store(_config: &BoardConfig) -> Rc<dyn KeyValueStore> {
    match crate::repository::LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            // Keeps the board usable for this page view
            tracing::warn!("{}; tasks will not survive a reload", e);
            Rc::new(crate::repository::MemoryStorage::new())
        }
    }
}
