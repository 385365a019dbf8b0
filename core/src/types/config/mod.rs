use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Case handling for both query kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
    /// Case-insensitive unless the query contains uppercase.
    Smart,
}

impl CaseMatching {
    /// Whether `query` should be matched with case folding.
    pub fn folds(self, query: &str) -> bool {
        match self {
            CaseMatching::Sensitive => false,
            CaseMatching::Insensitive => true,
            CaseMatching::Smart => !query.chars().any(char::is_uppercase),
        }
    }
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

/// Search tuning, persisted as TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Highest field score still counted as a match. 0.0 requires a perfect
    /// match, 1.0 matches anything.
    pub threshold: f64,
    /// Character offset where matches are expected to start.
    pub location: usize,
    /// How far from `location` a match may start before the offset alone
    /// pushes it past a threshold of 1.0.
    pub distance: usize,
    pub ignore_location: bool,
    pub case_matching: CaseMatching,
    /// Fold accents in subsequence queries.
    pub unicode_normalization: bool,
    pub result_limit: usize,
    /// Trimmed queries shorter than this (in chars) return nothing.
    pub min_match_char_length: usize,
    pub title_weight: f64,
    pub description_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            location: 0,
            distance: 100,
            ignore_location: false,
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            result_limit: 20,
            min_match_char_length: 1,
            title_weight: 1.0,
            description_weight: 1.0,
        }
    }
}

impl SearchConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the list of validation errors; empty when the config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            ));
        }

        if self.result_limit == 0 {
            errors.push("result_limit must be at least 1".to_string());
        }

        if self.min_match_char_length == 0 {
            errors.push("min_match_char_length must be at least 1".to_string());
        }

        if !is_positive(self.title_weight) {
            errors.push(format!(
                "title_weight must be positive, got {}",
                self.title_weight
            ));
        }

        if !is_positive(self.description_weight) {
            errors.push(format!(
                "description_weight must be positive, got {}",
                self.description_weight
            ));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            threshold: if (0.0..=1.0).contains(&self.threshold) {
                self.threshold
            } else {
                defaults.threshold
            },
            result_limit: if self.result_limit == 0 {
                defaults.result_limit
            } else {
                self.result_limit
            },
            min_match_char_length: if self.min_match_char_length == 0 {
                defaults.min_match_char_length
            } else {
                self.min_match_char_length
            },
            title_weight: if is_positive(self.title_weight) {
                self.title_weight
            } else {
                defaults.title_weight
            },
            description_weight: if is_positive(self.description_weight) {
                self.description_weight
            } else {
                defaults.description_weight
            },
            ..self.clone()
        }
    }
}

fn is_positive(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
