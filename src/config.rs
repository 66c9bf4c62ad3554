use std::env;

use anyhow::{Context, Result};

/// Default CSV path, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/fake_or_real_news.csv";

/// Default name for the `greet` subcommand when `--name` is omitted.
pub const DEFAULT_GREET_NAME: &str = "Kevin";

/// Central configuration loaded from environment variables.
///
/// Every field has a documented hard default; environment variables
/// override the defaults, and CLI flags override the environment. The
/// .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Path to the labeled CSV dataset (VERACITY_DATA_PATH)
    pub data_path: String,
    /// Seed for the train/test shuffle and the SGD epoch order (VERACITY_SEED)
    pub seed: u64,
    /// Fraction of records held out for evaluation (VERACITY_TEST_FRACTION)
    pub test_fraction: f64,
    /// Vocabulary size cap (VERACITY_MAX_FEATURES)
    pub max_features: usize,
    /// Minimum document-frequency fraction for a term to qualify (VERACITY_MIN_DF)
    pub min_df: f64,
    /// Maximum document-frequency fraction for a term to qualify (VERACITY_MAX_DF)
    pub max_df: f64,
    /// SGD passes over the training set (VERACITY_EPOCHS)
    pub epochs: usize,
    /// SGD step size (VERACITY_LEARNING_RATE)
    pub learning_rate: f64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults. A set-but-unparsable
    /// value is an error naming the offending variable — silently ignoring
    /// a typo'd seed would quietly break run-to-run determinism.
    pub fn load() -> Result<Self> {
        Ok(Self {
            data_path: env::var("VERACITY_DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
            seed: parse_var("VERACITY_SEED", 42)?,
            test_fraction: parse_var("VERACITY_TEST_FRACTION", 0.2)?,
            max_features: parse_var("VERACITY_MAX_FEATURES", 100)?,
            min_df: parse_var("VERACITY_MIN_DF", 0.05)?,
            max_df: parse_var("VERACITY_MAX_DF", 0.95)?,
            epochs: parse_var("VERACITY_EPOCHS", 200)?,
            learning_rate: parse_var("VERACITY_LEARNING_RATE", 0.05)?,
        })
    }

    /// Check the document-frequency band and split fraction for sanity.
    /// Call this before running the pipeline.
    pub fn validate(&self) -> Result<()> {
        if !(0.0 < self.test_fraction && self.test_fraction < 1.0) {
            anyhow::bail!(
                "test fraction must be strictly between 0 and 1, got {}",
                self.test_fraction
            );
        }
        if !(0.0..=1.0).contains(&self.min_df)
            || !(0.0..=1.0).contains(&self.max_df)
            || self.min_df > self.max_df
        {
            anyhow::bail!(
                "document-frequency band [{}, {}] is not a sub-interval of [0, 1]",
                self.min_df,
                self.max_df
            );
        }
        if self.max_features == 0 {
            anyhow::bail!("max features must be at least 1");
        }
        Ok(())
    }
}

/// Read an env var and parse it, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config {
            data_path: DEFAULT_DATA_PATH.to_string(),
            seed: 42,
            test_fraction: 0.2,
            max_features: 100,
            min_df: 0.05,
            max_df: 0.95,
            epochs: 200,
            learning_rate: 0.05,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_df_band_rejected() {
        let config = Config {
            data_path: DEFAULT_DATA_PATH.to_string(),
            seed: 42,
            test_fraction: 0.2,
            max_features: 100,
            min_df: 0.9,
            max_df: 0.1,
            epochs: 200,
            learning_rate: 0.05,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_test_fraction_bounds() {
        for bad in [0.0, 1.0, -0.2, 1.5] {
            let config = Config {
                data_path: DEFAULT_DATA_PATH.to_string(),
                seed: 42,
                test_fraction: bad,
                max_features: 100,
                min_df: 0.05,
                max_df: 0.95,
                epochs: 200,
                learning_rate: 0.05,
            };
            assert!(config.validate().is_err(), "fraction {bad} should fail");
        }
    }
}
