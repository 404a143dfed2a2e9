//! MySQL connection parameters for the fraud database.
//!
//! [`DbConfig`] holds the six values a driver needs to reach the server:
//! host, user, password, database, port and authentication plugin. It is
//! built once, validated, and never mutated afterwards; pass it to whatever
//! opens the connection.
//!
//! ```
//! use fraud_db_config::DbConfig;
//!
//! let config = DbConfig::builder().password("s3cret").build()?;
//! assert_eq!(config.host(), "localhost");
//! assert_eq!(config.port(), 3310);
//! assert_eq!(config.database(), "fraud");
//! assert_eq!(config.auth_plugin().as_str(), "mysql_native_password");
//!
//! // The password never shows up in logs
//! assert!(!format!("{:?}", config).contains("s3cret"));
//! # Ok::<(), fraud_db_config::Error>(())
//! ```
//!
//! The password has no default. Supply it through the builder, a
//! `mysql://` connection string, the `FRAUD_DB_PASSWORD` environment
//! variable ([`DbConfig::from_env`]), or a JSON file ([`DbConfig::from_file`]).

#![warn(missing_docs)]

pub mod config;
pub mod error;

pub use config::{AuthPlugin, ConnectionInfo, DbConfig, DbConfigBuilder, Password};
pub use error::{Error, Result};
