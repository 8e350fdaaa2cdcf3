//! Campaign configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

/// Where the world snapshot lives.
pub const WORLD_PATH_VAR: &str = "TABLETOP_WORLD_PATH";
/// Male first-name frequency corpus.
pub const MALE_NAMES_VAR: &str = "TABLETOP_MALE_NAMES";
/// Female first-name frequency corpus.
pub const FEMALE_NAMES_VAR: &str = "TABLETOP_FEMALE_NAMES";
/// `json` or `pretty`.
pub const LOG_FORMAT_VAR: &str = "TABLETOP_LOG_FORMAT";
/// Optional seed for reproducible generation.
pub const RNG_SEED_VAR: &str = "TABLETOP_RNG_SEED";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "{LOG_FORMAT_VAR} must be 'json' or 'pretty', got '{other}'"
            ))),
        }
    }
}

/// Everything a [`crate::campaign::Campaign`] needs to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    /// World snapshot file, read on open and written on close.
    pub world_path: PathBuf,
    /// Corpus for male first names.
    pub male_names: PathBuf,
    /// Corpus for female first names.
    pub female_names: PathBuf,
    /// Output format of the tracing subscriber.
    pub log_format: LogFormat,
    /// `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            world_path: PathBuf::from("backup.json"),
            male_names: PathBuf::from("GutterFornavnFodte.csv"),
            female_names: PathBuf::from("JenterFornavnFodte.csv"),
            log_format: LogFormat::default(),
            rng_seed: None,
        }
    }
}

impl CampaignConfig {
    /// Reads configuration from the process environment, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the log format or seed is malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the log format or seed is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = lookup(WORLD_PATH_VAR) {
            config.world_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(MALE_NAMES_VAR) {
            config.male_names = PathBuf::from(path);
        }
        if let Some(path) = lookup(FEMALE_NAMES_VAR) {
            config.female_names = PathBuf::from(path);
        }
        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }
        if let Some(seed) = lookup(RNG_SEED_VAR) {
            let seed = seed
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{RNG_SEED_VAR} must be a u64: {e}")))?;
            config.rng_seed = Some(seed);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_unset_environment_yields_defaults() {
        let config = CampaignConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, CampaignConfig::default());
        assert_eq!(config.world_path, PathBuf::from("backup.json"));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_every_variable_overrides_its_default() {
        let config = CampaignConfig::from_lookup(lookup_from(&[
            (WORLD_PATH_VAR, "/tmp/world.json"),
            (MALE_NAMES_VAR, "boys.csv"),
            (FEMALE_NAMES_VAR, "girls.csv"),
            (LOG_FORMAT_VAR, "JSON"),
            (RNG_SEED_VAR, " 42 "),
        ]))
        .unwrap();

        assert_eq!(config.world_path, PathBuf::from("/tmp/world.json"));
        assert_eq!(config.male_names, PathBuf::from("boys.csv"));
        assert_eq!(config.female_names, PathBuf::from("girls.csv"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = CampaignConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")]));

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("xml")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_seed_is_rejected() {
        let result = CampaignConfig::from_lookup(lookup_from(&[(RNG_SEED_VAR, "-1")]));

        match result {
            Err(AppError::Config(msg)) => assert!(msg.starts_with(RNG_SEED_VAR)),
            other => panic!("expected Config, got {other:?}"),
        }
    }
}
