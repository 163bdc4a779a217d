use taskboard::ui_dioxus::App;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use dioxus_desktop::{Config, WindowBuilder};
    use taskboard::config::BoardConfig;
    use tracing_subscriber::EnvFilter;

    let (config, config_error) = match BoardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (BoardConfig::default(), Some(e)),
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = config_error {
        tracing::warn!("Falling back to default configuration: {:#}", e);
    }

    taskboard::ui_dioxus::app::set_launch_config(config);

    let window = WindowBuilder::new().with_title("TaskBoard");

    // Launch the Dioxus desktop app
    dioxus_desktop::launch::launch(App, vec![], Config::default().with_window(window));
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // tracing events reach the browser console through the log bridge
    wasm_logger::init(wasm_logger::Config::default());

    dioxus_web::launch::launch(App, vec![], dioxus_web::Config::new());
}
