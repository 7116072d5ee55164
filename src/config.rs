//! Configuration loader for the `sprinkler-api` service.
//!
//! All runtime configuration values and their defaults live here, loaded from
//! environment variables (with optional `.env` file support provided by the
//! caller). The defaults reproduce the fixed table and region the service has
//! always used, so an empty environment behaves exactly like before.
use std::{env, time::Duration};

use anyhow::{anyhow, Result};

/// Default readings table.
pub const DEFAULT_TABLE_NAME: &str = "Sprinkler";

/// Default AWS region of the readings table.
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Parse an optional integer variable with a default value.
macro_rules! parse_var_u64 {
    ($lookup:expr, $var_name:expr, $default:expr) => {
        $lookup($var_name)
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string variable, treating empty values as unset.
macro_rules! optional_var {
    ($lookup:expr, $var_name:expr) => {
        $lookup($var_name).filter(|v: &String| !v.trim().is_empty())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// DynamoDB table holding the readings.
    pub table_name: String,

    /// AWS region of the table.
    pub region: String,

    /// Endpoint override (DynamoDB Local, LocalStack).
    pub endpoint_url: Option<String>,

    /// Upper bound on a single store call.
    pub store_timeout: Duration,

    /// HTTP listen port.
    pub port: u16,
}

/// Load configuration from the process environment.
///
/// Optional:
/// - `SPRINKLER_TABLE` – table name (default: `Sprinkler`)
/// - `AWS_REGION` – region (default: `eu-west-1`)
/// - `DYNAMODB_ENDPOINT` – endpoint override (default: none)
/// - `STORE_TIMEOUT_MS` – store call timeout in ms (default: 5000)
/// - `PORT` – listen port (default: 8080)
///
/// Returns an error if a numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    // ---
    load_from(|name| env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn load_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let table_name =
        optional_var!(lookup, "SPRINKLER_TABLE").unwrap_or_else(|| DEFAULT_TABLE_NAME.into());
    let region = optional_var!(lookup, "AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.into());
    let endpoint_url = optional_var!(lookup, "DYNAMODB_ENDPOINT");
    let store_timeout_ms = parse_var_u64!(lookup, "STORE_TIMEOUT_MS", 5000);
    let port = parse_var_u64!(lookup, "PORT", 8080);

    if store_timeout_ms == 0 {
        return Err(anyhow!("Invalid STORE_TIMEOUT_MS: must be greater than zero"));
    }
    let port = u16::try_from(port).map_err(|_| anyhow!("Invalid PORT: {} is out of range", port))?;

    Ok(Config {
        table_name,
        region,
        endpoint_url,
        store_timeout: Duration::from_millis(store_timeout_ms),
        port,
    })
}

impl Config {
    /// Log the loaded configuration.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  SPRINKLER_TABLE   : {}", self.table_name);
        tracing::info!("  AWS_REGION        : {}", self.region);
        tracing::info!(
            "  DYNAMODB_ENDPOINT : {}",
            self.endpoint_url.as_deref().unwrap_or("(default)")
        );
        tracing::info!("  STORE_TIMEOUT_MS  : {}", self.store_timeout.as_millis());
        tracing::info!("  PORT              : {}", self.port);
    }
}
