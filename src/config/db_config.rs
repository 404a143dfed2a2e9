//! Core configuration type

use super::auth_plugin::AuthPlugin;
use super::constants::{fields, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER};
use super::secret::{Password, REDACTED};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

/// MySQL connection parameters
///
/// Holds exactly six values: host, user, password, database, port and
/// authentication plugin. Fields are private and there are no setters, so a
/// built config never changes. Share it by reference or clone it into
/// whatever component opens the connection.
///
/// Use [`DbConfig::builder()`] to start from the fraud database defaults, or
/// one of the loaders ([`DbConfig::from_url`], [`DbConfig::from_env`],
/// [`DbConfig::from_file`]).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDbConfig")]
pub struct DbConfig {
    host: String,
    user: String,
    password: Password,
    database: String,
    port: u16,
    auth_plugin: AuthPlugin,
}

impl DbConfig {
    /// Create a configuration from all six parameters
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if any value is out of its domain
    /// (empty host/user/database, a host that is not a hostname or IP
    /// literal, the redaction placeholder as password, port 0).
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<Password>,
        database: impl Into<String>,
        port: u16,
        auth_plugin: AuthPlugin,
    ) -> Result<Self> {
        let config = Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            database: database.into(),
            port,
            auth_plugin,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a builder seeded with the fraud database defaults
    ///
    /// # Defaults
    ///
    /// - `host`: `localhost`
    /// - `user`: `root`
    /// - `database`: `fraud`
    /// - `port`: `3310`
    /// - `auth_plugin`: `mysql_native_password`
    ///
    /// There is no default password; `build()` fails without one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraud_db_config::DbConfig;
    ///
    /// let config = DbConfig::builder().password("s3cret").build()?;
    /// assert_eq!(config.database(), "fraud");
    /// assert_eq!(config.port(), 3310);
    /// # Ok::<(), fraud_db_config::Error>(())
    /// ```
    pub fn builder() -> DbConfigBuilder {
        DbConfigBuilder::default()
    }

    /// Server hostname or IP literal
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Database principal
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Password (redacted when printed)
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Target schema
    pub fn database(&self) -> &str {
        &self.database
    }

    /// TCP port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Authentication plugin the server expects
    pub fn auth_plugin(&self) -> &AuthPlugin {
        &self.auth_plugin
    }

    /// `host:port` pair suitable for a socket address lookup
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Check every field against its allowed domain
    pub fn validate(&self) -> Result<()> {
        require_non_empty(fields::HOST, &self.host)?;
        if !is_valid_host(&self.host) {
            return Err(Error::invalid(
                fields::HOST,
                format!("'{}' is not a hostname or IP literal", self.host),
            ));
        }
        require_non_empty(fields::USER, &self.user)?;
        if self.password.expose() == REDACTED {
            return Err(Error::invalid(
                fields::PASSWORD,
                "got the redaction placeholder instead of a password",
            ));
        }
        require_non_empty(fields::DATABASE, &self.database)?;
        if self.port == 0 {
            return Err(Error::invalid(fields::PORT, "must be between 1 and 65535"));
        }
        require_non_empty(fields::AUTH_PLUGIN, self.auth_plugin.as_str())?;
        Ok(())
    }

    /// Emit the loaded parameters at debug level, password excluded
    pub(crate) fn trace_loaded(&self, source: &str) {
        tracing::debug!(
            source,
            host = %self.host,
            port = self.port,
            user = %self.user,
            database = %self.database,
            auth_plugin = %self.auth_plugin,
            "database config loaded"
        );
        if self.auth_plugin.sends_cleartext() {
            tracing::warn!(
                "auth plugin {} sends the password in cleartext; use TLS or a local socket",
                self.auth_plugin
            );
        }
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password)
            .field("database", &self.database)
            .field("port", &self.port)
            .field("auth_plugin", &self.auth_plugin)
            .finish()
    }
}

impl std::fmt::Display for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.redacted_url())
    }
}

/// Hostname, IPv4 literal, or unbracketed IPv6 literal
fn is_valid_host(host: &str) -> bool {
    if host.parse::<Ipv6Addr>().is_ok() {
        return true;
    }
    host.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'))
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Wire shape of the serialized config: exactly six keys, nothing else
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDbConfig {
    host: String,
    user: String,
    password: Password,
    database: String,
    port: u16,
    auth_plugin: AuthPlugin,
}

impl TryFrom<RawDbConfig> for DbConfig {
    type Error = Error;

    fn try_from(raw: RawDbConfig) -> Result<Self> {
        Self::new(
            raw.host,
            raw.user,
            raw.password,
            raw.database,
            raw.port,
            raw.auth_plugin,
        )
    }
}

/// Builder for [`DbConfig`]
///
/// Starts from the fraud database defaults; only the password is mandatory.
///
/// # Examples
///
/// ```
/// use fraud_db_config::{AuthPlugin, DbConfig};
///
/// let config = DbConfig::builder()
///     .host("db.internal")
///     .port(3306)
///     .password("s3cret")
///     .auth_plugin(AuthPlugin::CachingSha2Password)
///     .build()?;
/// assert_eq!(config.address(), "db.internal:3306");
/// # Ok::<(), fraud_db_config::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DbConfigBuilder {
    host: String,
    user: String,
    password: Option<Password>,
    database: String,
    port: u16,
    auth_plugin: AuthPlugin,
}

impl Default for DbConfigBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            user: DEFAULT_USER.to_string(),
            password: None,
            database: DEFAULT_DATABASE.to_string(),
            port: DEFAULT_PORT,
            auth_plugin: AuthPlugin::default(),
        }
    }
}

impl DbConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the database principal
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the password
    pub fn password(mut self, password: impl Into<Password>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the target schema
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the authentication plugin
    pub fn auth_plugin(mut self, plugin: AuthPlugin) -> Self {
        self.auth_plugin = plugin;
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if no password was set
    /// - [`Error::InvalidField`] if a value fails validation
    pub fn build(self) -> Result<DbConfig> {
        let password = self.password.ok_or(Error::MissingField(fields::PASSWORD))?;
        let config = DbConfig::new(
            self.host,
            self.user,
            password,
            self.database,
            self.port,
            self.auth_plugin,
        )?;
        config.trace_loaded("builder");
        Ok(config)
    }
}
