mod api;
mod cli;
mod config;
mod error;
mod updater;


use std::process::ExitCode;

use api::CloudflareClient;
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use config::Settings;
use log::debug;
use updater::RecordUpdater;

#[tokio::main]
async fn main() -> ExitCode {
    // Values already in the environment win over the .env file.
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors share the exit status of every other failure.
            let message = e.to_string();
            eprint!("Error: {}", message.trim_start_matches("error: "));
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(record) => {
            println!(
                "Updated A record for {} to IP address {}",
                record.name, record.content
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> error::Result<api::models::DnsRecord> {
    let request = cli.request()?;
    let settings = Settings::from_env()?;
    debug!("Using {:?} against {}", settings.credentials, settings.api_base_url);

    let client = CloudflareClient::new(settings.credentials, settings.api_base_url);
    RecordUpdater::new(client).run_request(&request).await
}
