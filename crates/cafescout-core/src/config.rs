use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::cafe::Coordinate;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
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
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
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

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let search_url = or_default(
        "CAFESCOUT_SEARCH_URL",
        "https://cafe-finder-backend.onrender.com",
    );
    let geolocate_url = or_default("CAFESCOUT_GEOLOCATE_URL", "http://ip-api.com/json");
    let request_timeout_secs = parse_u64("CAFESCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let data_dir = PathBuf::from(or_default("CAFESCOUT_DATA_DIR", "./.cafescout"));
    let log_level = or_default("CAFESCOUT_LOG_LEVEL", "info");

    // Paris, same fallback center the search UI ships with.
    let default_center = Coordinate {
        lat: parse_f64("CAFESCOUT_DEFAULT_LAT", "48.8566")?,
        lon: parse_f64("CAFESCOUT_DEFAULT_LON", "2.3522")?,
    };

    Ok(AppConfig {
        search_url,
        geolocate_url,
        request_timeout_secs,
        data_dir,
        log_level,
        default_center,
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
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.search_url, "https://cafe-finder-backend.onrender.com");
        assert_eq!(cfg.geolocate_url, "http://ip-api.com/json");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.data_dir, PathBuf::from("./.cafescout"));
        assert_eq!(cfg.log_level, "info");
        assert!((cfg.default_center.lat - 48.8566).abs() < f64::EPSILON);
        assert!((cfg.default_center.lon - 2.3522).abs() < f64::EPSILON);
    }

    #[test]
    fn overrides_are_honored() {
        let mut map = HashMap::new();
        map.insert("CAFESCOUT_SEARCH_URL", "http://localhost:9000");
        map.insert("CAFESCOUT_REQUEST_TIMEOUT_SECS", "5");
        map.insert("CAFESCOUT_DEFAULT_LAT", "51.5074");
        map.insert("CAFESCOUT_DEFAULT_LON", "-0.1278");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.search_url, "http://localhost:9000");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert!((cfg.default_center.lat - 51.5074).abs() < f64::EPSILON);
        assert!((cfg.default_center.lon - (-0.1278)).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("CAFESCOUT_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CAFESCOUT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CAFESCOUT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn invalid_default_lat_is_rejected() {
        let mut map = HashMap::new();
        map.insert("CAFESCOUT_DEFAULT_LAT", "somewhere");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CAFESCOUT_DEFAULT_LAT"),
            "expected InvalidEnvVar(CAFESCOUT_DEFAULT_LAT), got: {result:?}"
        );
    }
}
