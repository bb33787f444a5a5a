use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MergeError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct MergeConfig {
    pub name: String,
    #[serde(default)]
    pub on_inconsistent: InconsistentPolicy,
    /// Academic years to merge. All years when absent.
    #[serde(default)]
    pub years: Option<Vec<String>>,
}

/// What a run does with a group whose listings disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistentPolicy {
    /// Fail the whole run on the first bad group.
    Abort,
    /// Report the group and keep going.
    Skip,
}

impl Default for InconsistentPolicy {
    fn default() -> Self {
        Self::Skip
    }
}

impl std::fmt::Display for InconsistentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl MergeConfig {
    /// Config with default policy and no year filter.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            on_inconsistent: InconsistentPolicy::default(),
            years: None,
        }
    }

    pub fn from_toml(input: &str) -> Result<Self, MergeError> {
        let config: MergeConfig =
            toml::from_str(input).map_err(|e| MergeError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MergeError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|e| MergeError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml(&input)
    }

    pub fn validate(&self) -> Result<(), MergeError> {
        if self.name.trim().is_empty() {
            return Err(MergeError::ConfigValidation("name must not be empty".into()));
        }

        if let Some(years) = &self.years {
            if years.is_empty() {
                return Err(MergeError::ConfigValidation(
                    "years, when given, must list at least one year".into(),
                ));
            }
            if let Some(blank) = years.iter().position(|y| y.trim().is_empty()) {
                return Err(MergeError::ConfigValidation(format!(
                    "years[{blank}] is empty"
                )));
            }
        }

        Ok(())
    }

    pub fn includes_year(&self, year: &str) -> bool {
        match &self.years {
            Some(years) => years.iter().any(|y| y == year),
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
