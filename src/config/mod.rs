//! Database connection configuration
//!
//! This module handles:
//! * The immutable connection parameter set (`DbConfig`)
//! * Authentication plugin names
//! * Password redaction and zeroing
//! * Loading from a connection string, the environment, or a JSON file

mod auth_plugin;
pub mod constants;
mod connection_string;
mod db_config;
mod load;
mod secret;

pub use auth_plugin::AuthPlugin;
pub use connection_string::ConnectionInfo;
pub use db_config::{DbConfig, DbConfigBuilder};
pub use secret::{Password, REDACTED};
