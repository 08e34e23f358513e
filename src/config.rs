use crate::error::{GamerWordsError, GwResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub curation: CurationParams,
    #[command(flatten)]
    pub distinctiveness: DistinctivenessParams,
    #[command(flatten)]
    pub report: ReportParams,
}

/// Count-space noise removal.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationParams {
    /// Cohort words seen fewer times than this are dropped.
    #[arg(long, default_value_t = 20)]
    pub min_count: u64,
    /// Tokens longer than this (in characters) are dropped.
    #[arg(long, default_value_t = 20)]
    pub max_word_len: usize,
    /// Per-user threshold; 1 only drops zero counts.
    #[arg(long, default_value_t = 1)]
    pub user_min_count: u64,
}

impl Default for CurationParams {
    fn default() -> Self {
        Self {
            min_count: 20,
            max_word_len: 20,
            user_min_count: 1,
        }
    }
}

/// Ratio-space thresholds for the ignore band and distinctive words.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistinctivenessParams {
    #[arg(long, default_value_t = 1.25)]
    pub band_upper: f64,
    #[arg(long, default_value_t = 0.75)]
    pub band_lower: f64,
    /// Target must use a shared word this many times more often.
    #[arg(long, default_value_t = 8.0)]
    pub distinctive_multiplier: f64,
    /// Minimum target ratio for words the general cohort never uses.
    #[arg(long, default_value_t = 0.000079)]
    pub absent_floor: f64,
}

impl Default for DistinctivenessParams {
    fn default() -> Self {
        Self {
            band_upper: 1.25,
            band_lower: 0.75,
            distinctive_multiplier: 8.0,
            absent_floor: 0.000079,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParams {
    /// Distinctive words listed on each profile card.
    #[arg(long, default_value_t = 5)]
    pub top_words: usize,
    /// Distinctive words listed in the cohort summary.
    #[arg(long, default_value_t = 25)]
    pub top_distinctive: usize,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            top_words: 5,
            top_distinctive: 25,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GwResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GamerWordsError::Config(format!(
                "Failed to read thresholds file {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies every value the user typed on the command line over the loaded file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(curation.min_count);
        update_if_present!(curation.max_word_len);
        update_if_present!(curation.user_min_count);

        update_if_present!(distinctiveness.band_upper);
        update_if_present!(distinctiveness.band_lower);
        update_if_present!(distinctiveness.distinctive_multiplier);
        update_if_present!(distinctiveness.absent_floor);

        update_if_present!(report.top_words);
        update_if_present!(report.top_distinctive);
    }

    pub fn validate(&self) -> GwResult<()> {
        let d = &self.distinctiveness;
        if self.curation.max_word_len == 0 {
            return Err(GamerWordsError::Config(
                "max_word_len must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("band_upper", d.band_upper),
            ("band_lower", d.band_lower),
            ("distinctive_multiplier", d.distinctive_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GamerWordsError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if d.band_lower >= d.band_upper {
            return Err(GamerWordsError::Config(format!(
                "band_lower ({}) must be below band_upper ({})",
                d.band_lower, d.band_upper
            )));
        }
        if !d.absent_floor.is_finite() || d.absent_floor < 0.0 {
            return Err(GamerWordsError::Config(format!(
                "absent_floor must be a non-negative number, got {}",
                d.absent_floor
            )));
        }
        Ok(())
    }
}
