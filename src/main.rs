mod app;
mod cli;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use palettr::config::Config;
use tracing::info;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if cli_opts.command.is_some() {
        logging::init_stderr();
    } else {
        let log_path = logging::init_file()?;
        info!(path = %log_path.display(), "logging to file");
    }

    let mut config = Config::load()?;
    cli_opts.apply(&mut config);
    let catalog = cli::load_catalog(&config)?;

    if let Some(command) = cli_opts.command {
        return cli::run(command, &config, &catalog);
    }

    let mut app = app::App::new(&config, catalog);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
