//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;

use crate::query::QueryOptions;

pub const ENV_BIND: &str = "PROVINCE_ROUTES_BIND";
pub const ENV_DEFAULT_MAX_HOPS: &str = "PROVINCE_ROUTES_DEFAULT_MAX_HOPS";
pub const ENV_MAX_HOPS_CAP: &str = "PROVINCE_ROUTES_MAX_HOPS_CAP";
pub const ENV_EXPOSE_ERRORS: &str = "PROVINCE_ROUTES_EXPOSE_ERRORS";
pub const ENV_LOG_JSON: &str = "PROVINCE_ROUTES_LOG_JSON";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub query: QueryOptions,
    /// Include internal error details in 500 responses (development only).
    pub expose_internal_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            query: QueryOptions::default(),
            expose_internal_errors: false,
        }
    }
}

impl ServerConfig {
    /// Reads overrides from the process environment. Unset or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup(ENV_BIND)
            .and_then(|v| v.trim().parse::<SocketAddr>().ok())
            .unwrap_or(defaults.bind_addr);
        let max_hops_cap = parse_positive(lookup(ENV_MAX_HOPS_CAP))
            .unwrap_or(defaults.query.max_hops_cap);
        let default_max_hops = parse_positive(lookup(ENV_DEFAULT_MAX_HOPS))
            .unwrap_or(defaults.query.default_max_hops)
            .min(max_hops_cap);
        let expose_internal_errors =
            parse_bool(lookup(ENV_EXPOSE_ERRORS)).unwrap_or(defaults.expose_internal_errors);

        Self {
            bind_addr,
            query: QueryOptions {
                default_max_hops,
                max_hops_cap,
            },
            expose_internal_errors,
        }
    }
}

fn parse_positive(value: Option<String>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
}

pub(crate) fn parse_bool(value: Option<String>) -> Option<bool> {
    value.and_then(|v| match v.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    })
}

/// Whether logs should be emitted as JSON lines.
pub fn log_json_from_env() -> bool {
    parse_bool(env::var(ENV_LOG_JSON).ok()).unwrap_or(false)
}
