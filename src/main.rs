use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use std::time::Duration;

use grokit::cli::Args;
use grokit::settings::Settings;
use grokit::translation::{XaiClient, translate};

#[tokio::main]
async fn main() -> Result<()> {
    // Merge a local .env file into the environment, if one exists
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let settings = Settings::from_env();
    let client = XaiClient::new(settings.endpoint.clone(), settings.api_key.clone());

    // Spinner draws on stderr, keeping stdout clean for piping
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let translated = translate(&client, &settings, &args.msg).await;
    spinner.finish_and_clear();

    println!("{}", translated?);

    Ok(())
}
