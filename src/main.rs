use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use tilegate::infrastructure::{AppConfig, CliArgs, StorageManager, init_logging};
use tilegate::presentation::App;

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = tilegate::VERSION, "Starting {}", tilegate::NAME);

    let app = App::from_config(&config)?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
