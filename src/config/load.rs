//! Loading a config from the environment or a JSON file

use super::auth_plugin;
use super::constants::{env, fields, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER};
use super::db_config::{DbConfig, RawDbConfig};
use super::secret::Password;
use crate::{Error, Result};
use std::path::Path;

impl DbConfig {
    /// Load from `FRAUD_DB_*` environment variables
    ///
    /// `FRAUD_DB_PASSWORD` is required. `FRAUD_DB_HOST`, `FRAUD_DB_USER`,
    /// `FRAUD_DB_DATABASE`, `FRAUD_DB_PORT` and `FRAUD_DB_AUTH_PLUGIN` fall
    /// back to the builder defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`], reading variables through `lookup`
    ///
    /// # Examples
    ///
    /// ```
    /// use fraud_db_config::DbConfig;
    ///
    /// let config = DbConfig::from_lookup(|key| match key {
    ///     "FRAUD_DB_PASSWORD" => Some("s3cret".to_string()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.host(), "localhost");
    /// # Ok::<(), fraud_db_config::Error>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                tracing::debug!("{} not set, using default {}", key, default);
                default.to_string()
            })
        };

        let host = or_default(env::HOST, DEFAULT_HOST);
        let user = or_default(env::USER, DEFAULT_USER);
        let database = or_default(env::DATABASE, DEFAULT_DATABASE);

        let port = match lookup(env::PORT) {
            Some(raw) => parse_port(&raw)?,
            None => {
                tracing::debug!("{} not set, using default {}", env::PORT, DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let auth_plugin = match lookup(env::AUTH_PLUGIN) {
            Some(raw) => auth_plugin::parse_field(&raw)?,
            None => Default::default(),
        };

        let password = lookup(env::PASSWORD)
            .map(Password::new)
            .ok_or(Error::MissingEnv(env::PASSWORD))?;

        let config = Self::new(host, user, password, database, port, auth_plugin)?;
        config.trace_loaded("env");
        Ok(config)
    }

    /// Parse a JSON document holding exactly the six config keys
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDbConfig = serde_json::from_str(json)?;
        let config = Self::try_from(raw)?;
        config.trace_loaded("json");
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("reading database config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let raw: RawDbConfig = serde_json::from_str(&contents)?;
        let config = Self::try_from(raw)?;
        config.trace_loaded("file");
        Ok(config)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| Error::invalid(fields::PORT, format!("'{}' is not a port number", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthPlugin;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_lookup_defaults_with_password() {
        let config = DbConfig::from_lookup(lookup_from(&[("FRAUD_DB_PASSWORD", "pw")])).unwrap();
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.user(), "root");
        assert_eq!(config.database(), "fraud");
        assert_eq!(config.port(), 3310);
        assert_eq!(config.auth_plugin(), &AuthPlugin::MysqlNativePassword);
        assert_eq!(config.password().expose(), "pw");
    }

    #[test]
    fn test_lookup_overrides_all() {
        let config = DbConfig::from_lookup(lookup_from(&[
            ("FRAUD_DB_HOST", "db.internal"),
            ("FRAUD_DB_USER", "svc"),
            ("FRAUD_DB_PASSWORD", "pw"),
            ("FRAUD_DB_DATABASE", "fraud_v2"),
            ("FRAUD_DB_PORT", " 3306 "),
            ("FRAUD_DB_AUTH_PLUGIN", "caching_sha2_password"),
        ]))
        .unwrap();
        assert_eq!(config.host(), "db.internal");
        assert_eq!(config.user(), "svc");
        assert_eq!(config.database(), "fraud_v2");
        assert_eq!(config.port(), 3306);
        assert_eq!(config.auth_plugin(), &AuthPlugin::CachingSha2Password);
    }

    #[test]
    fn test_lookup_requires_password() {
        let err = DbConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::MissingEnv("FRAUD_DB_PASSWORD")));
    }

    #[test]
    fn test_lookup_bad_port() {
        for port in ["abc", "0", "65536", ""] {
            let err = DbConfig::from_lookup(lookup_from(&[
                ("FRAUD_DB_PASSWORD", "pw"),
                ("FRAUD_DB_PORT", port),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, Error::InvalidField { field: "port", .. }),
                "port {:?} gave {:?}",
                port,
                err
            );
        }
    }

    #[test]
    fn test_lookup_empty_host_rejected() {
        let err = DbConfig::from_lookup(lookup_from(&[
            ("FRAUD_DB_PASSWORD", "pw"),
            ("FRAUD_DB_HOST", ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "host", .. }));
    }

    #[test]
    fn test_lookup_empty_auth_plugin_rejected() {
        let err = DbConfig::from_lookup(lookup_from(&[
            ("FRAUD_DB_PASSWORD", "pw"),
            ("FRAUD_DB_AUTH_PLUGIN", ""),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                field: "auth_plugin",
                ..
            }
        ));
    }

    #[test]
    fn test_json_exact_keys() {
        let config = DbConfig::from_json_str(
            r#"{
                "host": "localhost",
                "user": "root",
                "password": "pw",
                "database": "fraud",
                "port": 3310,
                "auth_plugin": "mysql_native_password"
            }"#,
        )
        .unwrap();
        assert_eq!(config, DbConfig::builder().password("pw").build().unwrap());
    }

    #[test]
    fn test_json_missing_key_rejected() {
        let err = DbConfig::from_json_str(
            r#"{"host": "localhost", "user": "root", "database": "fraud",
                "port": 3310, "auth_plugin": "mysql_native_password"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn test_json_extra_key_rejected() {
        let err = DbConfig::from_json_str(
            r#"{"host": "localhost", "user": "root", "password": "pw", "database": "fraud",
                "port": 3310, "auth_plugin": "mysql_native_password", "pool_size": 5}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("pool_size"));
    }

    #[test]
    fn test_json_invalid_values_rejected() {
        // port 0 passes u16 parsing but not validation
        let err = DbConfig::from_json_str(
            r#"{"host": "localhost", "user": "root", "password": "pw", "database": "fraud",
                "port": 0, "auth_plugin": "mysql_native_password"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("port"));

        // out of u16 range
        assert!(DbConfig::from_json_str(
            r#"{"host": "localhost", "user": "root", "password": "pw", "database": "fraud",
                "port": 70000, "auth_plugin": "mysql_native_password"}"#,
        )
        .is_err());

        // port as string
        assert!(DbConfig::from_json_str(
            r#"{"host": "localhost", "user": "root", "password": "pw", "database": "fraud",
                "port": "3310", "auth_plugin": "mysql_native_password"}"#,
        )
        .is_err());
    }

    #[test]
    fn test_serialized_config_does_not_reload() {
        let config = DbConfig::builder().password("s3cret").build().unwrap();
        let dumped = serde_json::to_string(&config).unwrap();

        let err = DbConfig::from_json_str(&dumped).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                field: "password",
                ..
            }
        ));

        // Plain serde path fails too
        assert!(serde_json::from_str::<DbConfig>(&dumped).is_err());
    }

    #[test]
    fn test_json_bad_host_is_invalid_field() {
        let err = DbConfig::from_json_str(
            r#"{"host": "db?x", "user": "root", "password": "pw", "database": "fraud",
                "port": 3310, "auth_plugin": "mysql_native_password"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "host", .. }));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("3310").unwrap(), 3310);
        assert!(parse_port("-1").is_err());
    }
}
