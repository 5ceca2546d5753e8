mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rollout",
    about = "Franchise rollout dashboard API with an advisor proxy",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML config file (missing file means defaults)
    #[arg(long, global = true, env = "ROLLOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the advisor service
    #[arg(long, global = true, env = "BRAIN_URL")]
    brain_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (0 picks a free port)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
        /// Start with an empty store instead of the program data
        #[arg(long)]
        no_seed: bool,
    },

    /// Print the effective configuration as YAML
    Config,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        Commands::Config => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = cmd::load_config(cli.config.as_deref(), cli.brain_url).and_then(|config| {
        match cli.command {
            Commands::Serve { port, no_seed } => cmd::serve::run(config, port, no_seed),
            Commands::Config => cmd::config::run(&config),
        }
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
