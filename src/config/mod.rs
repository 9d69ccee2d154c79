use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before giving up
    pub connection_timeout: u64,
    pub enable_query_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub port: u16,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub secret_key: String,
    pub enable_cors: bool,
    /// Zero disables the `exp` claim on issued tokens
    pub jwt_expiry_hours: u64,
}

const DEFAULT_DATABASE_URL: &str = "postgresql:///jobly";
const TEST_DATABASE_NAME: &str = "jobly_test";
pub const DEFAULT_SECRET_KEY: &str = "secret-dev";

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("test") => Environment::Test,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Test => Self::test(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Ok(v) = env::var("DATABASE_ENABLE_QUERY_LOGGING") {
            self.database.enable_query_logging = v.parse().unwrap_or(self.database.enable_query_logging);
        }

        // The test environment never touches the main database
        if self.environment == Environment::Test {
            self.database.url = test_database_url(&self.database.url);
        }

        // API overrides
        if let Ok(v) = env::var("PORT") {
            self.api.port = v.parse().unwrap_or(self.api.port);
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Security overrides
        if let Ok(v) = env::var("SECRET_KEY") {
            self.security.secret_key = v;
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: 10,
                connection_timeout: 30,
                enable_query_logging: true,
            },
            api: ApiConfig {
                port: 3001,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                secret_key: DEFAULT_SECRET_KEY.to_string(),
                enable_cors: true,
                jwt_expiry_hours: 24 * 7, // 1 week
            },
        }
    }

    /// Settings used by the test suites. Short pool timeouts so that a missing
    /// database fails fast instead of hanging a test.
    pub fn test() -> Self {
        Self {
            environment: Environment::Test,
            database: DatabaseConfig {
                url: test_database_url(DEFAULT_DATABASE_URL),
                max_connections: 5,
                connection_timeout: 2,
                enable_query_logging: false,
            },
            api: ApiConfig {
                port: 0,
                enable_request_logging: false,
            },
            security: SecurityConfig {
                secret_key: DEFAULT_SECRET_KEY.to_string(),
                enable_cors: false,
                jwt_expiry_hours: 1,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: 50,
                connection_timeout: 5,
                enable_query_logging: false,
            },
            api: ApiConfig {
                port: 3001,
                enable_request_logging: false,
            },
            security: SecurityConfig {
                secret_key: DEFAULT_SECRET_KEY.to_string(),
                enable_cors: true,
                jwt_expiry_hours: 4,
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Swap the database name in a connection URL for the test database,
/// keeping credentials, host and query parameters.
pub fn test_database_url(base: &str) -> String {
    match url::Url::parse(base) {
        Ok(mut url) => {
            url.set_path(&format!("/{}", TEST_DATABASE_NAME));
            url.into()
        }
        Err(e) => {
            tracing::warn!("Cannot parse database URL for test swap ({}), using it unchanged", e);
            base.to_string()
        }
    }
}
