//! Server configuration from environment variables
//!
//! Three knobs, all optional: `PORT` (default 3001), `APP_ENVIRONMENT`
//! (`development` unless set to `production`), and `FRONTEND_URL` (the CORS
//! origin, default `http://localhost:3000`).

use std::env;

/// Runtime environment, controls how much detail 500 responses leak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read `APP_ENVIRONMENT`; anything other than `production` is development
    pub fn from_env() -> Self {
        match env::var("APP_ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    /// Name used in the health payload
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to bind
    pub port: u16,
    pub environment: Environment,
    /// Allowed CORS origin for the storefront UI
    pub frontend_url: String,
}

impl Config {
    /// Load from the environment, falling back to defaults
    ///
    /// A malformed `PORT` falls back to the default rather than failing the
    /// boot; the demo favors coming up over strictness.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            port,
            environment: Environment::from_env(),
            frontend_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            environment: Environment::Development,
            frontend_url: "http://localhost:3000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3001);
        assert!(config.environment.is_development());
        assert_eq!(config.frontend_url, "http://localhost:3000");
    }

    #[test]
    fn test_environment_names() {
        assert_eq!(Environment::Development.as_str(), "development");
        assert_eq!(Environment::Production.as_str(), "production");
    }
}
