use std::path::PathBuf;

use crate::cafe::Coordinate;

/// Application configuration, loaded from environment variables.
///
/// Every field has a default, so a bare environment is valid.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the cafe search service.
    pub search_url: String,
    /// Base URL of the IP geolocation service.
    pub geolocate_url: String,
    /// Per-request timeout for both HTTP clients.
    pub request_timeout_secs: u64,
    /// Directory the favorites key-value store writes under.
    pub data_dir: PathBuf,
    pub log_level: String,
    /// Map center fallback when geolocation is unavailable.
    pub default_center: Coordinate,
}
