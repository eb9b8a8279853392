mod args;
mod client;
mod render;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::client::{ClientError, PantryClient};
use crate::render::render;

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_filter))?,
        )
        .with_writer(std::io::stderr)
        .init();

    let request = args.request();
    if request.normalized_ingredients().is_empty() {
        eprintln!("No ingredients: Please add at least one ingredient");
        return Ok(ExitCode::FAILURE);
    }

    let client = PantryClient::new(&args.server_url, args.api_key.clone())?;
    eprintln!("Cooking up something with {}...", request.normalized_ingredients().join(", "));

    match client.generate(&request).await {
        Ok(payload) => {
            let mut out = String::new();
            render(&mut out, &payload)?;
            print!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!("Generation failed: {error}");
            eprintln!("{}", user_message(&error));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn user_message(error: &ClientError) -> &'static str {
    match error {
        ClientError::RateLimited => "Rate limit exceeded: Please wait a moment and try again.",
        ClientError::QuotaExceeded => {
            "Credits required: Please add credits to continue generating recipes."
        }
        ClientError::Busy => "A recipe is already being generated.",
        ClientError::Failed(_) | ClientError::Transport(_) => {
            "Error: Failed to generate recipe. Please try again."
        }
    }
}
