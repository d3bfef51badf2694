//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! required-types = ["CPU", "Motherboard"]
//! psu-type = "PSU"
//! default-margin = 0.8
//! ```

use crate::error::ConfigError;
use crate::part::{CPU, MOTHERBOARD, PSU, PartType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_SAFETY_MARGIN: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Categories a build must contain to be complete.
    pub required_types: BTreeSet<PartType>,
    /// Category whose parts are checked by `power_requirement` rules.
    pub psu_type: PartType,
    /// Safety margin used when a power rule has no `margin` of its own.
    pub default_margin: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            required_types: [CPU, MOTHERBOARD].into_iter().map(PartType::from).collect(),
            psu_type: PartType::from(PSU),
            default_margin: DEFAULT_SAFETY_MARGIN,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_margin > 0.0 && self.default_margin <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "default-margin must be in (0, 1], got {}",
                self.default_margin
            )));
        }
        if self.psu_type.as_str().trim().is_empty() {
            return Err(ConfigError::Invalid("psu-type must be non-empty".to_string()));
        }
        if let Some(blank) = self
            .required_types
            .iter()
            .find(|t| t.as_str().trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "required-types contains a blank category {:?}",
                blank.as_str()
            )));
        }
        Ok(())
    }
}
