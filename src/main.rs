//! Minimal HTTP server with a welcome route and a health check.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod telemetry;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            console::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn start() -> error::Result<()> {
    let config = config::Config::from_env()?;
    server::run(config).await
}
