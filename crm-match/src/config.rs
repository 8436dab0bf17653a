use config::{Config, ConfigError, Environment, File};
use contact_matching::{FuzzyConfig, ListingLimits, MatchingError, DEFAULT_SEARCH_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MatchConfig {
    pub import: FuzzyConfig,
    pub calendar: FuzzyConfig,
    pub search: SearchConfig,
    pub listing: ListingLimits,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            import: FuzzyConfig::import(),
            calendar: FuzzyConfig::calendar(),
            search: SearchConfig::default(),
            listing: ListingLimits::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Similar contacts fetched per candidate
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

const DEFAULT_CONFIG_FILE: &str = r#"# Fuzzy contact matching settings.
# Every value below is the built-in default; delete a line to keep the default.
# name_weight + method_weight must add up to 1.0 in each profile.
# Any value can also be set through the environment, e.g.
# CRM_MATCH_IMPORT__CONFIDENCE_THRESHOLD=0.6

[import]
# min_similarity_threshold = 0.3
# confidence_threshold = 0.5
# name_weight = 0.6
# method_weight = 0.4

[calendar]
# min_similarity_threshold = 0.3
# confidence_threshold = 0.7
# name_weight = 0.6
# method_weight = 0.4

[search]
# limit = 5

[listing]
# default_limit = 20
# max_limit = 100
# max_candidates = 10000
"#;

impl MatchConfig {
    /// Load the config file, creating a commented default on first run
    pub fn load(path: Option<PathBuf>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = path.unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG_FILE).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::from_file(&config_path)?;

        Ok((config, config_path))
    }

    /// Read settings from `path` layered over the built-in profiles, with
    /// `CRM_MATCH_*` environment variables on top
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let defaults = MatchConfig::default();

        let builder = Config::builder()
            .set_default("import.min_similarity_threshold", defaults.import.min_similarity_threshold)?
            .set_default("import.confidence_threshold", defaults.import.confidence_threshold)?
            .set_default("import.name_weight", defaults.import.name_weight)?
            .set_default("import.method_weight", defaults.import.method_weight)?
            .set_default("calendar.min_similarity_threshold", defaults.calendar.min_similarity_threshold)?
            .set_default("calendar.confidence_threshold", defaults.calendar.confidence_threshold)?
            .set_default("calendar.name_weight", defaults.calendar.name_weight)?
            .set_default("calendar.method_weight", defaults.calendar.method_weight)?
            .set_default("search.limit", defaults.search.limit as i64)?
            .set_default("listing.default_limit", defaults.listing.default_limit as i64)?
            .set_default("listing.max_limit", defaults.listing.max_limit as i64)?
            .set_default("listing.max_candidates", defaults.listing.max_candidates as i64)?
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("CRM_MATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }

    /// Reject settings the matcher cannot work with. Run once at startup.
    pub fn validate(&self) -> Result<(), MatchingError> {
        self.import
            .validate()
            .map_err(|e| in_section("import", e))?;
        self.calendar
            .validate()
            .map_err(|e| in_section("calendar", e))?;

        if self.search.limit == 0 {
            return Err(MatchingError::InvalidConfig(
                "[search] limit must be at least 1".to_string(),
            ));
        }

        let listing = &self.listing;
        if listing.default_limit == 0 || listing.default_limit > listing.max_limit {
            return Err(MatchingError::InvalidConfig(format!(
                "[listing] default_limit must be within 1..={}, got {}",
                listing.max_limit, listing.default_limit
            )));
        }

        Ok(())
    }
}

fn in_section(section: &str, error: MatchingError) -> MatchingError {
    match error {
        MatchingError::InvalidConfig(message) => {
            MatchingError::InvalidConfig(format!("[{section}] {message}"))
        }
        other => other,
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("crm-match").join("matching.toml")
    } else {
        PathBuf::from("matching.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("matching.toml");

        let (config, loaded_from) = MatchConfig::load(Some(path.clone())).unwrap();

        assert_eq!(loaded_from, path);
        assert!(path.exists());
        assert_eq!(config, MatchConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matching.toml");
        std::fs::write(
            &path,
            "[calendar]\nconfidence_threshold = 0.8\n\n[search]\nlimit = 10\n",
        )
        .unwrap();

        let config = MatchConfig::from_file(&path).unwrap();

        assert_eq!(config.calendar.confidence_threshold, 0.8);
        assert_eq!(config.calendar.name_weight, 0.6);
        assert_eq!(config.import, FuzzyConfig::import());
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.listing, ListingLimits::default());
    }

    #[test]
    fn test_validate_rejects_unbalanced_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matching.toml");
        std::fs::write(&path, "[import]\nname_weight = 0.7\n").unwrap();

        let config = MatchConfig::from_file(&path).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[import]"));
    }

    #[test]
    fn test_validate_rejects_bad_listing_limits() {
        let mut config = MatchConfig::default();
        config.listing.default_limit = 200;
        assert!(config.validate().is_err());

        let mut config = MatchConfig::default();
        config.search.limit = 0;
        assert!(config.validate().is_err());
    }
}
