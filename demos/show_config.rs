//! Load the fraud database config and print it with the password masked.
//!
//! Run with:
//!   FRAUD_DB_PASSWORD=secret RUST_LOG=fraud_db_config=debug cargo run --example show_config
//!
//! Pass a path to load a JSON file instead of the environment, or a
//! `mysql://` string to parse a connection string.

use fraud_db_config::DbConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(arg) if arg.starts_with("mysql://") || arg.starts_with("mariadb://") => {
            DbConfig::from_url(&arg)?
        }
        Some(path) => DbConfig::from_file(path)?,
        None => DbConfig::from_env()?,
    };

    println!("{}", config.redacted_url());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
