//! MySQL authentication plugin names.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Authentication mechanism the server expects for the account.
///
/// Matches the `plugin` column of `mysql.user`. Plugins this crate does not
/// know by name are kept verbatim in [`AuthPlugin::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AuthPlugin {
    /// SHA1-based challenge/response (pre-8.0 default)
    #[default]
    MysqlNativePassword,
    /// SHA256-based with server-side cache (8.0+ default)
    CachingSha2Password,
    /// SHA256 with RSA key exchange
    Sha256Password,
    /// Password sent as-is, only safe over TLS or a local socket
    MysqlClearPassword,
    /// Unix socket peer credentials
    AuthSocket,
    /// Any other server-specific plugin
    Other(String),
}

impl AuthPlugin {
    /// Plugin name as the server spells it
    pub fn as_str(&self) -> &str {
        match self {
            Self::MysqlNativePassword => "mysql_native_password",
            Self::CachingSha2Password => "caching_sha2_password",
            Self::Sha256Password => "sha256_password",
            Self::MysqlClearPassword => "mysql_clear_password",
            Self::AuthSocket => "auth_socket",
            Self::Other(name) => name,
        }
    }

    /// Whether the password travels unhashed on the wire
    pub fn sends_cleartext(&self) -> bool {
        matches!(self, Self::MysqlClearPassword)
    }
}

impl std::fmt::Display for AuthPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuthPlugin {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(Error::Config("auth plugin name must not be empty".into())),
            "mysql_native_password" => Ok(Self::MysqlNativePassword),
            "caching_sha2_password" => Ok(Self::CachingSha2Password),
            "sha256_password" => Ok(Self::Sha256Password),
            "mysql_clear_password" => Ok(Self::MysqlClearPassword),
            "auth_socket" => Ok(Self::AuthSocket),
            other if other.chars().any(char::is_whitespace) => Err(Error::Config(format!(
                "invalid auth plugin '{}': name must not contain whitespace",
                other
            ))),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

impl Serialize for AuthPlugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuthPlugin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a plugin name, mapping failures onto the `auth_plugin` field
pub(crate) fn parse_field(value: &str) -> Result<AuthPlugin> {
    value
        .parse()
        .map_err(|e: Error| Error::invalid(super::constants::fields::AUTH_PLUGIN, e.to_string()))
}
