//! Gauge Server
//!
//! Line-delimited JSON-RPC 2.0 over stdin/stdout: one request per line,
//! one response per line. Logs go to stderr.
//!
//! Environment:
//! - GAUGE_LOG / RUST_LOG: log filter (default "info")
//! - GAUGE_FRACTION_DIGITS: fraction digits in formatted results (default 6)

mod config;
mod protocol;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use protocol::{Handler, SERVER_NAME, SERVER_VERSION};

fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    info!("{} server v{} started", SERVER_NAME, SERVER_VERSION);
    info!(fraction_digits = config.fraction_digits, "configuration loaded");

    let handler = Handler::new(config);
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!("Received: {} bytes", line.len());

                let Some(response) = handler.handle_line(line) else {
                    continue;
                };

                let response_json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        error!("Error serializing response: {}", e);
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response_json).and_then(|_| stdout.flush()) {
                    error!("Error writing response: {}", e);
                    break;
                }
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }

    info!("Server shutting down");
    ExitCode::SUCCESS
}
