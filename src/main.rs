mod app;

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use pesantren_moderation::{
    config,
    infrastructure::{directories, logging, shutdown},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let input = env::args()
        .nth(1)
        .or_else(|| config.io.input_path.clone())
        .map(PathBuf::from)
        .context("no input file: pass a path to a JSON array of items or set MODERATION_INPUT")?;

    let shutdown = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = app::ModerationApp::initialize(config, shutdown);
    app.run(input).await
}
