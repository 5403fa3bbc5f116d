//! `backoffice` -- command-line front end for the admin entity forms.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description                  |
//! |------------------------|----------|-------------------------|------------------------------|
//! | `BACKOFFICE_API_URL`   | no       | `http://localhost:3000` | REST API base URL            |
//! | `BACKOFFICE_API_TOKEN` | no       | --                      | Bearer token for the API     |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout          |
//! | `RUST_LOG`             | no       | `backoffice_cli=info,...` | Log filter                 |

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backoffice_cli::cli::Cli;
use backoffice_cli::commands;
use backoffice_client::ClientConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "backoffice_cli=info,backoffice_core=info,backoffice_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    match commands::run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
