use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a `PRT_*` value cannot be parsed.
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
/// Returns `ConfigError` if a `PRT_*` value cannot be parsed.
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
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
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

    let feed_url = or_default(
        "PRT_FEED_URL",
        "https://raw.githubusercontent.com/ALD-Models/Testing/refs/heads/main/events1.json",
    );
    let base_url = or_default("PRT_BASE_URL", "https://www.parkrunnertourist.co.uk/events");
    let output_dir = PathBuf::from(or_default("PRT_OUTPUT_DIR", "./events"));
    let sitemap_path = PathBuf::from(or_default("PRT_SITEMAP_PATH", "./sitemap.events.xml"));
    let max_events = parse_usize("PRT_MAX_EVENTS", "13")?;

    let request_timeout_secs = parse_u64("PRT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PRT_USER_AGENT", "prt/0.1 (site-generation)");

    let cancellations_url = or_default(
        "PRT_CANCELLATIONS_URL",
        "https://wiki.parkrun.com/index.php/Cancellations/Global",
    );
    let cancellations_path =
        PathBuf::from(or_default("PRT_CANCELLATIONS_PATH", "./_data/cancellations.json"));
    let cancellations_user_agent = or_default("PRT_CANCELLATIONS_USER_AGENT", "Mozilla/5.0");
    let cancellations_max_retries = parse_u32("PRT_CANCELLATIONS_MAX_RETRIES", "4")?;
    let cancellations_retry_delay_secs = parse_u64("PRT_CANCELLATIONS_RETRY_DELAY_SECS", "10")?;

    Ok(AppConfig {
        feed_url,
        base_url,
        output_dir,
        sitemap_path,
        max_events,
        request_timeout_secs,
        user_agent,
        cancellations_url,
        cancellations_path,
        cancellations_user_agent,
        cancellations_max_retries,
        cancellations_retry_delay_secs,
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

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(
            cfg.feed_url,
            "https://raw.githubusercontent.com/ALD-Models/Testing/refs/heads/main/events1.json"
        );
        assert_eq!(cfg.base_url, "https://www.parkrunnertourist.co.uk/events");
        assert_eq!(cfg.output_dir, PathBuf::from("./events"));
        assert_eq!(cfg.sitemap_path, PathBuf::from("./sitemap.events.xml"));
        assert_eq!(cfg.max_events, 13);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "prt/0.1 (site-generation)");
        assert_eq!(
            cfg.cancellations_url,
            "https://wiki.parkrun.com/index.php/Cancellations/Global"
        );
        assert_eq!(
            cfg.cancellations_path,
            PathBuf::from("./_data/cancellations.json")
        );
        assert_eq!(cfg.cancellations_user_agent, "Mozilla/5.0");
        assert_eq!(cfg.cancellations_max_retries, 4);
        assert_eq!(cfg.cancellations_retry_delay_secs, 10);
    }

    #[test]
    fn build_app_config_honors_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PRT_FEED_URL", "http://localhost:8080/events.json");
        map.insert("PRT_MAX_EVENTS", "3");
        map.insert("PRT_OUTPUT_DIR", "/tmp/pages");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.feed_url, "http://localhost:8080/events.json");
        assert_eq!(cfg.max_events, 3);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/pages"));
    }

    #[test]
    fn build_app_config_fails_with_invalid_max_events() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PRT_MAX_EVENTS", "plenty");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRT_MAX_EVENTS"),
            "expected InvalidEnvVar(PRT_MAX_EVENTS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_retry_count() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PRT_CANCELLATIONS_MAX_RETRIES", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRT_CANCELLATIONS_MAX_RETRIES"),
            "expected InvalidEnvVar(PRT_CANCELLATIONS_MAX_RETRIES), got: {result:?}"
        );
    }
}
