use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use boskos_client::cli::{Cli, Commands};
use boskos_client::{heartbeat, Client, Config};

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs go to stderr so stdout carries nothing but the acquired resource.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config = Config::new(cli.host, cli.owner);
    let client = Client::new(&config).context("building lease client")?;

    match cli.command {
        Commands::Acquire {
            resource_type,
            state,
        } => {
            let resource = client
                .acquire(&resource_type, state)
                .await
                .with_context(|| format!("acquiring a {} resource", resource_type))?;
            println!("{}", serde_json::to_string_pretty(&resource)?);
        }
        Commands::Release { name, dest } => {
            client
                .release(&name, dest)
                .await
                .with_context(|| format!("releasing {}", name))?;
            info!("{} returned to the pool", name);
        }
        Commands::Heartbeat {
            name,
            interval_secs,
            max_beats,
        } => {
            heartbeat::run(
                &client,
                &name,
                Duration::from_secs(interval_secs),
                max_beats,
            )
            .await;
        }
    }

    Ok(())
}
