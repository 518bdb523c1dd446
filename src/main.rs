use anyhow::{Context, Result};
use log::{debug, error, LevelFilter};
use simple_logger::SimpleLogger;

use glstart::{app, AppConfig, GlWindow};

fn init_logging() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .context("Failed to install logger")
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{:#}", e);
    }

    let config = AppConfig::default();
    match config.to_toml() {
        Ok(dump) => debug!("Effective configuration:\n{}", dump),
        Err(e) => error!("Failed to serialize configuration: {}", e),
    }

    std::process::exit(app::run(&config, GlWindow::create));
}
