//! CLI entry point and composition root.
//!
//! Wires logging, environment loading, and signal handling, then dispatches
//! to handlers. Exit codes: 0 success, 1 failure, 2 argument misuse (clap),
//! 130 on Ctrl-C.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hfup_cli::{Cli, Commands, handlers};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a local .env, if any
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Ctrl-C aborts the whole run; pip/uv children receive the signal too.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!();
            eprintln!("Interrupted.");
            std::process::exit(130);
        }
    });

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Install {
            force,
            no_modify_path,
            with_transformers,
        } => {
            handlers::install::execute(force, no_modify_path, with_transformers, cli.verbose)
                .await?;
        }
        Commands::Uninstall { force } => {
            handlers::uninstall::execute(force)?;
        }
        Commands::Status => {
            handlers::status::execute().await?;
        }
        Commands::Paths => {
            handlers::paths::execute()?;
        }
        Commands::Snippet {
            model_id,
            library,
            pipeline_tag,
            tag,
        } => {
            handlers::snippet::execute(&model_id, &library, pipeline_tag, tag)?;
        }
        Commands::Tasks { id } => {
            handlers::tasks::execute(id.as_deref())?;
        }
    }

    Ok(())
}
