//! Environment-driven bootstrap configuration.
//!
//! The service is meant to be launched by a path-routing host that tells it
//! where to listen and which path segment it owns:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `APP_PORT` | TCP port to listen on | `8082` |
//! | `APP_NAME` | Path segment all routes are served under | `hello-app` |
//!
//! Both values are read exactly once at startup, before the listener binds,
//! and are immutable afterwards; changing them requires a restart.
//!
//! Resolution policies:
//!
//! - A present but unparseable `APP_PORT` (non-numeric, `0`, or outside
//!   1-65535) aborts startup; there is no fallback for a malformed value.
//! - An absent or empty `APP_NAME` falls back to `hello-app`; routes are
//!   always prefixed. The value is used verbatim as a path segment, with no
//!   sanitization: a value containing `/` nests prefixes, a value the
//!   router cannot parse makes route registration panic at startup, and
//!   `healthz` is reserved (it collides with the unprefixed liveness route
//!   and panics the same way).
//! - The listener binds the loopback interface only; the service is meant
//!   to sit behind a reverse proxy on the same host.

use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::env;

const ENV_APP_PORT: &str = "APP_PORT";
const ENV_APP_NAME: &str = "APP_NAME";

const DEFAULT_PORT: u16 = 8082;
const DEFAULT_APP_NAME: &str = "hello-app";

// Loopback only, see module docs.
const BIND_HOST: &str = "127.0.0.1";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub app_name: String,
}

impl Config {
    /// Snapshot the process environment and resolve the configuration.
    ///
    /// Called once in `main`; nothing else reads the environment afterwards.
    /// Entries that are not valid Unicode are skipped, so an unrelated
    /// binary value elsewhere in the environment cannot abort startup.
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::from_vars(&vars)
    }

    /// Resolve the configuration from an explicit environment mapping.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let port = resolve_port(vars)?;
        let app_name = resolve_app_name(vars);
        Ok(Config { port, app_name })
    }

    /// The address handed to the TCP listener, e.g. `127.0.0.1:8082`.
    pub fn listen_addr(&self) -> String {
        format!("{BIND_HOST}:{}", self.port)
    }

    /// The path prefix every application route lives under, e.g. `/demo`.
    pub fn base_path(&self) -> String {
        format!("/{}", self.app_name)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base path: {}", self.base_path());
    }
}

fn resolve_port(vars: &HashMap<String, String>) -> Result<u16> {
    let raw = match vars.get(ENV_APP_PORT) {
        None => return Ok(DEFAULT_PORT),
        Some(raw) => raw,
    };

    let port: u16 = raw.parse().with_context(|| {
        format!("{ENV_APP_PORT} must be an integer between 1 and 65535, got '{raw}'")
    })?;
    if port == 0 {
        bail!("{ENV_APP_PORT} must be between 1 and 65535, got 0");
    }
    Ok(port)
}

fn resolve_app_name(vars: &HashMap<String, String>) -> String {
    match vars.get(ENV_APP_NAME) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => DEFAULT_APP_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_with_all_vars() {
        let config =
            Config::from_vars(&vars(&[("APP_PORT", "3000"), ("APP_NAME", "demo")])).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.app_name, "demo");
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        assert_eq!(config.base_path(), "/demo");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = Config::from_vars(&vars(&[])).unwrap();

        assert_eq!(config.port, 8082);
        assert_eq!(config.app_name, "hello-app");
        assert_eq!(config.listen_addr(), "127.0.0.1:8082");
        assert_eq!(config.base_path(), "/hello-app");
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_vars(&vars(&[("APP_PORT", "not-a-number")]));

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("APP_PORT"));
        assert!(error.to_string().contains("not-a-number"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = Config::from_vars(&vars(&[("APP_PORT", "99999")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_port_zero() {
        let result = Config::from_vars(&vars(&[("APP_PORT", "0")]));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("APP_PORT"));
    }

    #[test]
    fn test_port_negative() {
        let result = Config::from_vars(&vars(&[("APP_PORT", "-1")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_port_is_an_error() {
        // Present-but-empty is malformed, not "absent": no silent fallback.
        let result = Config::from_vars(&vars(&[("APP_PORT", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_port_boundaries_accepted() {
        let low = Config::from_vars(&vars(&[("APP_PORT", "1")])).unwrap();
        assert_eq!(low.port, 1);

        let high = Config::from_vars(&vars(&[("APP_PORT", "65535")])).unwrap();
        assert_eq!(high.port, 65535);
    }

    #[test]
    fn test_empty_app_name_falls_back() {
        let config = Config::from_vars(&vars(&[("APP_NAME", "")])).unwrap();
        assert_eq!(config.app_name, "hello-app");
    }

    #[test]
    fn test_app_name_is_used_verbatim() {
        let config = Config::from_vars(&vars(&[("APP_NAME", "My_App-2")])).unwrap();
        assert_eq!(config.base_path(), "/My_App-2");
    }

    #[test]
    fn test_app_name_with_slash_nests_prefixes() {
        // Documented sharp edge: the value is not sanitized, so a slash
        // turns the prefix into two path segments.
        let config = Config::from_vars(&vars(&[("APP_NAME", "team/app")])).unwrap();
        assert_eq!(config.base_path(), "/team/app");
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        unsafe {
            env::set_var("APP_PORT", "4567");
            env::set_var("APP_NAME", "env-test");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 4567);
        assert_eq!(config.app_name, "env-test");

        unsafe {
            env::remove_var("APP_PORT");
            env::remove_var("APP_NAME");
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_from_env_skips_non_unicode_entries() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        // A non-Unicode value anywhere in the environment is skipped;
        // the snapshot must still resolve.
        unsafe {
            env::set_var("CONFIG_TEST_JUNK", OsString::from_vec(vec![0xff, 0xfe]));
        }

        let result = Config::from_env();

        unsafe {
            env::remove_var("CONFIG_TEST_JUNK");
        }

        assert!(result.is_ok());
    }
}
