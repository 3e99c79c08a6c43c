use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::extraction::{ExtractionConfig, DEFAULT_HEADER_CHARS, DEFAULT_SECTION_CHAR_BUDGET};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a present but malformed value is a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory CSV exports are written to and served from.
    pub export_dir: PathBuf,
    pub max_upload_files: usize,
    pub max_upload_bytes: usize,
    /// Extra CORS origin; CORS is permissive when unset.
    pub frontend_url: Option<String>,
    pub extraction: ExtractionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rust_log: "info".to_string(),
            export_dir: PathBuf::from("exports"),
            max_upload_files: 50,
            max_upload_bytes: 50 * 1024 * 1024,
            frontend_url: None,
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or("PORT", &lookup, defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            export_dir: lookup("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            max_upload_files: parse_or("MAX_UPLOAD_FILES", &lookup, defaults.max_upload_files)?,
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", &lookup, defaults.max_upload_bytes)?,
            frontend_url: lookup("FRONTEND_URL").filter(|url| !url.trim().is_empty()),
            extraction: ExtractionConfig {
                header_chars: parse_or("HEADER_CHARS", &lookup, DEFAULT_HEADER_CHARS)?,
                section_char_budget: parse_or(
                    "SECTION_CHAR_BUDGET",
                    &lookup,
                    DEFAULT_SECTION_CHAR_BUDGET,
                )?,
            },
        })
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.export_dir, PathBuf::from("exports"));
        assert_eq!(config.max_upload_files, 50);
        assert_eq!(config.frontend_url, None);
        assert_eq!(config.extraction, ExtractionConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("EXPORT_DIR", "/tmp/out"),
            ("FRONTEND_URL", "https://talentsift.example"),
            ("HEADER_CHARS", "1000"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.frontend_url.as_deref(), Some("https://talentsift.example"));
        assert_eq!(config.extraction.header_chars, 1000);
        assert_eq!(config.extraction.section_char_budget, DEFAULT_SECTION_CHAR_BUDGET);
    }

    #[test]
    fn test_malformed_number_is_error() {
        let err = Config::from_lookup(lookup_from(&[("MAX_UPLOAD_FILES", "lots")])).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_FILES"));
    }
}
