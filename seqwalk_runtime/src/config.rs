//! Run configuration: which modes to run over which values.
//!
//! Loaded from JSON. Every field has a default, so `{}` is a valid
//! config and no file at all means `RunConfig::default()`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use seqwalk::TraversalMode;

use crate::error::{Result, RuntimeError};

/// The sequence printed when no values are supplied.
pub const DEMO_VALUES: [i64; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Modes to run, in output order.
    pub modes: Vec<TraversalMode>,
    /// Sequence to traverse.
    pub values: Vec<i64>,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            modes: TraversalMode::ALL.to_vec(),
            values: DEMO_VALUES.to_vec(),
            log_level: "warn".to_string(),
        }
    }
}

impl RunConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig =
            serde_json::from_str(&content).map_err(|source| RuntimeError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Run every validator; first failure wins.
    pub fn validate(&self) -> Result<()> {
        let validators: [fn(&RunConfig) -> Result<()>; 2] =
            [validate_at_least_one_mode, validate_unique_modes];
        for validator in validators {
            validator(self)?;
        }
        Ok(())
    }
}

fn validate_at_least_one_mode(config: &RunConfig) -> Result<()> {
    if config.modes.is_empty() {
        return Err(RuntimeError::InvalidConfig(
            "'modes' must list at least one traversal mode".to_string(),
        ));
    }
    Ok(())
}

fn validate_unique_modes(config: &RunConfig) -> Result<()> {
    let mut seen = BTreeSet::new();
    for mode in &config.modes {
        if !seen.insert(mode) {
            return Err(RuntimeError::InvalidConfig(format!(
                "mode {} is listed more than once",
                mode
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RunConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: RunConfig = serde_json::from_str(r#"{"modes":["callback"]}"#).unwrap();
        assert_eq!(config.modes, vec![TraversalMode::Callback]);
        assert_eq!(config.values, DEMO_VALUES.to_vec());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn no_modes_is_invalid() {
        let config = RunConfig {
            modes: Vec::new(),
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(RuntimeError::InvalidConfig(_))));
    }

    #[test]
    fn duplicate_modes_are_invalid() {
        let config = RunConfig {
            modes: vec![TraversalMode::Indexed, TraversalMode::Indexed],
            ..RunConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("indexed"));
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(serde_json::from_str::<RunConfig>(r#"{"modes":["backwards"]}"#).is_err());
    }
}
