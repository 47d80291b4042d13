mod backend;
mod frontend;
mod utils;

use crate::backend::services::FileService;
use crate::backend::utils::config::AppConfig;
use crate::frontend::app::App;
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

fn main() -> anyhow::Result<()> {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,file_drop=info"))
        .init();

    let config = AppConfig::load()?;
    let service = FileService::new(&config).context("Failed to create file service")?;
    log::info!(
        "Using file server at {}, saving downloads to {}",
        service.api_url(),
        config.download_dir().display()
    );

    let size = LogicalSize::new(config.window.width, config.window.height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("File Drop")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(480.0, 520.0)),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(service)
        .launch(App);

    Ok(())
}
