//! Default values and environment variable names

/// Default server host
pub const DEFAULT_HOST: &str = "localhost";

/// Default database principal
pub const DEFAULT_USER: &str = "root";

/// Default schema
pub const DEFAULT_DATABASE: &str = "fraud";

/// Port the fraud MySQL instance listens on
pub const DEFAULT_PORT: u16 = 3310;

/// Stock MySQL port, used when a connection string omits one
pub const MYSQL_PORT: u16 = 3306;

/// Environment variables read by [`DbConfig::from_env`](crate::DbConfig::from_env)
pub mod env {
    /// Server host
    pub const HOST: &str = "FRAUD_DB_HOST";

    /// Database principal
    pub const USER: &str = "FRAUD_DB_USER";

    /// Password (required)
    pub const PASSWORD: &str = "FRAUD_DB_PASSWORD";

    /// Schema name
    pub const DATABASE: &str = "FRAUD_DB_DATABASE";

    /// TCP port
    pub const PORT: &str = "FRAUD_DB_PORT";

    /// Authentication plugin name
    pub const AUTH_PLUGIN: &str = "FRAUD_DB_AUTH_PLUGIN";
}

/// Serialized field names
pub mod fields {
    /// `host`
    pub const HOST: &str = "host";
    /// `user`
    pub const USER: &str = "user";
    /// `password`
    pub const PASSWORD: &str = "password";
    /// `database`
    pub const DATABASE: &str = "database";
    /// `port`
    pub const PORT: &str = "port";
    /// `auth_plugin`
    pub const AUTH_PLUGIN: &str = "auth_plugin";

    /// Every key of the serialized form, in declaration order
    pub const ALL: [&str; 6] = [HOST, USER, PASSWORD, DATABASE, PORT, AUTH_PLUGIN];
}
