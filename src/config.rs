// Runtime configuration: the TMDB credential, the base URL and the query
// heuristics. Read once at startup and handed to whoever needs it.

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "TMDB_API_KEY";
pub const BASE_URL_VAR: &str = "TMDB_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Knobs for discovery queries and output layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    /// `vote_count.gte` for genre and mood discovery.
    pub category_vote_floor: u32,
    /// `vote_count.gte` for unfiltered popular discovery. Higher than the
    /// category floor since nothing else narrows the listing.
    pub popular_vote_floor: u32,
    /// Result pages are drawn from `1..=max_page`.
    pub max_page: u32,
    /// Width of the `=` rules around a displayed movie.
    pub rule_width: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            category_vote_floor: 100,
            popular_vote_floor: 500,
            max_page: 5,
            rule_width: 70,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub tuning: Tuning,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup. A blank
    /// api key counts as missing; the base URL falls back to TMDB.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Ok(Config {
            api_key,
            base_url,
            tuning: Tuning::default(),
        })
    }
}

/// Lines printed when the credential is missing.
pub fn remediation() -> [String; 2] {
    [
        format!("Error: {API_KEY_VAR} environment variable not set."),
        format!("Configure with: export {API_KEY_VAR}='your_key_here'"),
    ]
}
