use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dex_client::PokeApiClient;
use dex_config::Config;

mod logging;
mod render;

/// Look up a Pokémon and print everything known about it
#[derive(Parser)]
#[command(name = "dex", version)]
struct Args {
    /// Pokémon name, case-insensitive
    name: String,

    /// Print the view as JSON instead of text
    #[arg(long)]
    json: bool,

    /// JSON config file; environment variables are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e:#}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::new(),
    };

    logging::init(&config.log);

    match run(&args, &config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error fetching Pokémon data: {e:#}");
            eprintln!("Failed to fetch Pokémon data. Check the log output for details.");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, config: &Config) -> anyhow::Result<String> {
    let client = PokeApiClient::new(&config.api).context("Failed to create HTTP client")?;

    let view = dex_core::lookup(Arc::new(client), &args.name).await?;

    if args.json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(render::render_text(&view))
    }
}
