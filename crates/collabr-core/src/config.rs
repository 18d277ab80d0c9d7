use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let backend_url = require("COLLABR_BACKEND_URL")?;
    let identity_url = lookup("COLLABR_IDENTITY_URL").ok();

    let request_timeout_secs = parse_u64("COLLABR_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64("COLLABR_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("COLLABR_USER_AGENT", "collabr/0.1 (marketplace-client)");
    let upload_chunk_bytes = parse_usize("COLLABR_UPLOAD_CHUNK_BYTES", "65536")?;
    let log_level = or_default("COLLABR_LOG_LEVEL", "info");

    if upload_chunk_bytes == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "COLLABR_UPLOAD_CHUNK_BYTES".to_string(),
            reason: "chunk size must be non-zero".to_string(),
        });
    }

    Ok(AppConfig {
        backend_url,
        identity_url,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        upload_chunk_bytes,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("COLLABR_BACKEND_URL", "https://api.collabr.test");
        m
    }

    #[test]
    fn build_app_config_fails_without_backend_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "COLLABR_BACKEND_URL"),
            "expected MissingEnvVar(COLLABR_BACKEND_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.backend_url, "https://api.collabr.test");
        assert!(cfg.identity_url.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.connect_timeout_secs, 10);
        assert_eq!(cfg.user_agent, "collabr/0.1 (marketplace-client)");
        assert_eq!(cfg.upload_chunk_bytes, 65536);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn build_app_config_reads_identity_url() {
        let mut map = full_env();
        map.insert("COLLABR_IDENTITY_URL", "https://id.collabr.test");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.identity_url.as_deref(), Some("https://id.collabr.test"));
    }

    #[test]
    fn build_app_config_request_timeout_override() {
        let mut map = full_env();
        map.insert("COLLABR_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_request_timeout_invalid() {
        let mut map = full_env();
        map.insert("COLLABR_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COLLABR_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(COLLABR_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_chunk_size() {
        let mut map = full_env();
        map.insert("COLLABR_UPLOAD_CHUNK_BYTES", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COLLABR_UPLOAD_CHUNK_BYTES"),
            "expected InvalidEnvVar(COLLABR_UPLOAD_CHUNK_BYTES), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_user_agent_override() {
        let mut map = full_env();
        map.insert("COLLABR_USER_AGENT", "custom-agent/2.0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
    }
}
