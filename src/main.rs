mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    let verbose = cli.verbose;
    match cli.command {
        None => commands::run::handle(cli::RunArgs::default(), verbose),
        Some(Commands::Run(args)) => commands::run::handle(args, verbose),
        Some(Commands::Preview { file, config, diff }) => {
            commands::preview::handle(&file, config.as_deref(), diff)
        }
        Some(Commands::Status { dir }) => commands::status::handle(&dir, verbose),
        Some(Commands::Init { dir }) => commands::init::handle(&dir),
    }
}
