use clap::Parser;
use ragdesk::cli::{Cli, Command};
use ragdesk::{logging, oneshot, ui};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        None => logging::init_tui_logging(),
        Some(_) => logging::init_cli_logging(),
    }

    let config = cli.resolve_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None => {
            ui::runtime::run(&config, runtime.handle().clone())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Ask { question }) => runtime.block_on(oneshot::run_ask(&config, &question)),
        Some(Command::Summarize { file }) => {
            runtime.block_on(oneshot::run_summarize(&config, &file))
        }
    }
}
