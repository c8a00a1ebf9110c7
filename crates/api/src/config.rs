use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the operator credential and JWT secret have defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// The single operator account this deployment authenticates.
    pub operator: OperatorConfig,
}

/// The one operator credential. This service is single-user by design;
/// there is no user table.
#[derive(Debug, Clone)]
pub struct OperatorConfig {
    /// Login name.
    pub username: String,
    /// Argon2id PHC hash of the operator's password.
    pub password_hash: String,
}

impl OperatorConfig {
    /// Load the operator credential from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `OPERATOR_USERNAME` or `OPERATOR_PASSWORD_HASH` is unset,
    /// which is the desired behaviour -- an unauthenticatable deployment
    /// should fail at startup, not at first login.
    pub fn from_env() -> Self {
        let username = std::env::var("OPERATOR_USERNAME")
            .expect("OPERATOR_USERNAME must be set in the environment");
        let password_hash = std::env::var("OPERATOR_PASSWORD_HASH")
            .expect("OPERATOR_PASSWORD_HASH must be set in the environment");
        Self {
            username,
            password_hash,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `HOST`                   | `0.0.0.0`               |
    /// | `PORT`                   | `3000`                  |
    /// | `CORS_ORIGINS`           | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                    |
    /// | `JWT_SECRET`             | (required)              |
    /// | `OPERATOR_USERNAME`      | (required)              |
    /// | `OPERATOR_PASSWORD_HASH` | (required)              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            operator: OperatorConfig::from_env(),
        }
    }
}
