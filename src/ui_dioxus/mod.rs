// Dioxus UI module - the task board and its rows
pub mod app;
pub mod components;
pub mod state;
pub mod views;

pub use app::App;
