//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::serve;
use clap::Parser;

/// Covergrid is the backend for a manga cover grid maker.
/// It persists saved grids and proxies cover images for the browser client.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Covergrid cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the grid and image proxy API
    Serve {
        /// Port on which to listen.
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
        /// Google OAuth client id used as the expected token audience.
        /// Falls back to the `GOOGLE_CLIENT_ID` environment variable.
        #[arg(short, long)]
        client_id: Option<String>,
    },
}

///
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind to the requested port.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();

    match cli.subcommands {
        Subcommands::Serve { port, client_id } => {
            let Some(client_id) = client_id.or_else(|| std::env::var("GOOGLE_CLIENT_ID").ok())
            else {
                tracing::error!(
                    "error: no Google client id. Pass --client-id or set the GOOGLE_CLIENT_ID env var."
                );
                std::process::exit(1);
            };
            serve(&client_id, port)
        }
    }
}
