mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    tracing::debug!(command = ?cli.command, "dispatching command");

    match cli.command {
        // Config commands never need credentials or a network client.
        Command::Config(args) => commands::config_cmd::handle(&args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "spooldash", &mut std::io::stdout());
            Ok(())
        }

        // Everything else refreshes the inventory first.
        Command::Spools(args) => {
            let store = config::build_store(&cli.global)?;
            commands::spools::handle(&store, args, &cli.global).await
        }

        Command::Materials(args) => {
            let store = config::build_store(&cli.global)?;
            commands::materials::handle(&store, &args, &cli.global).await
        }

        Command::Status => {
            let store = config::build_store(&cli.global)?;
            commands::status::handle(&store, &cli.global).await
        }
    }
}
