//! API Accounts - configuration checker
//!
//! Loads the server configuration, reports every validation problem in one
//! pass, then builds the account database to verify password files are
//! readable.

use env_logger;
use log::{error, info};
use std::process;

use api_accounts::ServerConfig;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::load_from(&path),
        None => ServerConfig::load(),
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for err in &errors {
            error!("{}", err);
        }
        error!("Configuration is invalid ({} problem(s))", errors.len());
        process::exit(1);
    }

    match config.account_database() {
        Ok(database) => {
            info!("Configuration OK - {} API account(s)", database.len());
        }
        Err(e) => {
            error!("Failed to build account database: {}", e);
            process::exit(1);
        }
    }
}
