//! Runtime configuration resolved from the process environment.

use std::{env, time::Duration};

use tracing::{info, warn};

/// Environment variable selecting the deployment mode.
const MODE_ENV: &str = "APP_ENV";
/// Environment variable holding the origin handed out in development mode.
const DEV_ORIGIN_ENV: &str = "DEV_CORS_ORIGIN";
/// Environment variable holding the origin handed out in production mode.
const PROD_ORIGIN_ENV: &str = "PROD_CORS_ORIGIN";
/// Environment variable overriding the artificial list response delay.
const LIST_DELAY_ENV: &str = "LIST_RESPONSE_DELAY_MS";

/// Delay applied before answering a list request when no override is set.
const DEFAULT_LIST_DELAY: Duration = Duration::from_secs(3);
/// Origin used when the expected environment variable is missing.
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Deployment mode deciding which configured origin is handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Local development; the origin comes from `DEV_CORS_ORIGIN`.
    Development,
    /// Any other deployment; the origin comes from `PROD_CORS_ORIGIN`.
    Production,
}

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    mode: DeploymentMode,
    cors_origin: String,
    list_delay: Duration,
}

impl AppConfig {
    /// Build a configuration with explicit values, bypassing the environment.
    pub fn new(
        mode: DeploymentMode,
        cors_origin: impl Into<String>,
        list_delay: Duration,
    ) -> Self {
        Self {
            mode,
            cors_origin: cors_origin.into(),
            list_delay,
        }
    }

    /// Load the configuration from the process environment, logging the
    /// resolved values and falling back to defaults for anything missing.
    pub fn from_env() -> Self {
        let mode = resolve_mode(env::var(MODE_ENV).ok().as_deref());
        let cors_origin = resolve_origin(
            mode,
            env::var(DEV_ORIGIN_ENV).ok(),
            env::var(PROD_ORIGIN_ENV).ok(),
        );
        let list_delay = resolve_list_delay(env::var(LIST_DELAY_ENV).ok().as_deref());

        let config = Self::new(mode, cors_origin, list_delay);
        info!(
            mode = ?config.mode,
            origin = %config.cors_origin,
            list_delay_ms = config.list_delay.as_millis() as u64,
            "resolved runtime configuration"
        );
        config
    }

    /// Deployment mode the service runs in.
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Origin stamped on every response's allow-origin header.
    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }

    /// Artificial delay applied before list responses.
    pub fn list_delay(&self) -> Duration {
        self.list_delay
    }
}

/// Map the raw mode variable onto a deployment mode. Anything other than the
/// literal `development` counts as production.
fn resolve_mode(raw: Option<&str>) -> DeploymentMode {
    match raw {
        Some("development") => DeploymentMode::Development,
        _ => DeploymentMode::Production,
    }
}

/// Pick the origin matching the deployment mode, warning when the expected
/// variable is unset.
fn resolve_origin(
    mode: DeploymentMode,
    dev_origin: Option<String>,
    prod_origin: Option<String>,
) -> String {
    let (origin, variable) = match mode {
        DeploymentMode::Development => (dev_origin, DEV_ORIGIN_ENV),
        DeploymentMode::Production => (prod_origin, PROD_ORIGIN_ENV),
    };

    origin.unwrap_or_else(|| {
        warn!(variable, fallback = DEFAULT_ORIGIN, "origin not configured");
        DEFAULT_ORIGIN.to_string()
    })
}

/// Parse the list delay override, keeping the default on absent or malformed
/// values.
fn resolve_list_delay(raw: Option<&str>) -> Duration {
    match raw {
        None => DEFAULT_LIST_DELAY,
        Some(value) => match value.parse::<u64>() {
            Ok(millis) => Duration::from_millis(millis),
            Err(_) => {
                warn!(value, "ignoring malformed list delay override");
                DEFAULT_LIST_DELAY
            }
        },
    }
}
