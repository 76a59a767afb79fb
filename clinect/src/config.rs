//! Environment-derived settings
//!
//! All configuration comes from environment variables, read once at startup:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `CLINECT_API_URL` | Backend base URL | `http://localhost:5001` |
//! | `CLINECT_LOG_DIR` | Directory for rotated log files | `logs` |
//! | `RUST_LOG` | Tracing filter | `clinect=info,warn` |

use std::path::PathBuf;

/// Backend base URL when `CLINECT_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Application settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Backend base URL (no trailing slash).
    pub api_url: String,
    /// Directory that receives the rotated log files.
    pub log_dir: PathBuf,
    /// Tracing filter (e.g. "clinect=debug,info").
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("CLINECT_API_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            log_dir: std::env::var("CLINECT_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "clinect=info,warn".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_dir: PathBuf::from("logs"),
            log_level: "clinect=info,warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_local_backend() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, "http://localhost:5001");
        assert_eq!(settings.log_dir, PathBuf::from("logs"));
    }
}
