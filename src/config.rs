use crate::search::filter::PageSize;
use dioxus::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_ENHETSREGISTERET_URL: &str = "https://data.brreg.no/enhetsregisteret/api/enheter";
pub const DEFAULT_FRIVILLIGHETSREGISTERET_URL: &str =
    "https://data.brreg.no/frivillighetsregisteret/api/frivillige-organisasjoner";
pub const DEFAULT_ICNPO_URL: &str =
    "https://data.brreg.no/frivillighetsregisteret/api/icnpo-kategorier";
/// Bamble
pub const DEFAULT_MUNICIPALITY_NUMBER: &str = "4012";
pub const DEFAULT_MUNICIPALITY_NAME: &str = "Bamble";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a four digit municipality number, got '{value}'")]
    InvalidMunicipality { var: &'static str, value: String },
    #[error("{var} must be one of 10, 25, 50 or 100, got '{value}'")]
    InvalidPageSize { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

/// Application configuration
/// In debug builds a .env file is loaded first; environment variables override the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub enhetsregisteret_url: String,
    pub frivillighetsregisteret_url: String,
    pub icnpo_url: String,
    /// Municipality every search is restricted to
    pub municipality_number: String,
    /// Shown in the page title
    pub municipality_name: String,
    pub default_page_size: PageSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enhetsregisteret_url: DEFAULT_ENHETSREGISTERET_URL.to_string(),
            frivillighetsregisteret_url: DEFAULT_FRIVILLIGHETSREGISTERET_URL.to_string(),
            icnpo_url: DEFAULT_ICNPO_URL.to_string(),
            municipality_number: DEFAULT_MUNICIPALITY_NUMBER.to_string(),
            municipality_name: DEFAULT_MUNICIPALITY_NAME.to_string(),
            default_page_size: PageSize::default(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            }
        }

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from a variable lookup. Invalid values are logged and
    /// replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let url = |var: &'static str, default: String| match lookup(var) {
            Some(value) => match parse_url(var, &value) {
                Ok(url) => url,
                Err(e) => {
                    warn!("{}, using {}", e, default);
                    default
                }
            },
            None => default,
        };

        let enhetsregisteret_url = url("LAG_ENHETSREGISTERET_URL", defaults.enhetsregisteret_url);
        let frivillighetsregisteret_url = url(
            "LAG_FRIVILLIGHETSREGISTERET_URL",
            defaults.frivillighetsregisteret_url,
        );
        let icnpo_url = url("LAG_ICNPO_URL", defaults.icnpo_url);

        let municipality_number = match lookup("LAG_KOMMUNENUMMER") {
            Some(value) => parse_municipality("LAG_KOMMUNENUMMER", &value).unwrap_or_else(|e| {
                warn!("{}, using {}", e, defaults.municipality_number);
                defaults.municipality_number.clone()
            }),
            None => defaults.municipality_number.clone(),
        };

        let municipality_name = lookup("LAG_KOMMUNENAVN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.municipality_name);

        let default_page_size = match lookup("LAG_DEFAULT_PAGE_SIZE") {
            Some(value) => parse_page_size("LAG_DEFAULT_PAGE_SIZE", &value).unwrap_or_else(|e| {
                warn!("{}, using {}", e, defaults.default_page_size);
                defaults.default_page_size
            }),
            None => defaults.default_page_size,
        };

        info!(
            "Config: searching municipality {} ({})",
            municipality_number, municipality_name
        );

        Self {
            enhetsregisteret_url,
            frivillighetsregisteret_url,
            icnpo_url,
            municipality_number,
            municipality_name,
            default_page_size,
        }
    }
}

fn parse_url(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
        })
    }
}

fn parse_municipality(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(ConfigError::InvalidMunicipality {
            var,
            value: value.to_string(),
        })
    }
}

fn parse_page_size(var: &'static str, value: &str) -> Result<PageSize, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(PageSize::from_value)
        .ok_or_else(|| ConfigError::InvalidPageSize {
            var,
            value: value.to_string(),
        })
}

/// Hook to access the application config provided at launch
pub fn use_config() -> Config {
    use_context::<Config>()
}
