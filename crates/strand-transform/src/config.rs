//! Pipeline configuration
//!
//! Provides [`PipelineConfig`], loadable from JSON or TOML.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Handling of arguments after the first in a pipeline group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraArguments {
    /// Read the first argument, silently skip the rest
    #[default]
    Ignore,

    /// Fail the fold with [`PipelineError::ExtraArguments`](crate::PipelineError::ExtraArguments)
    Reject,
}

/// Fold behaviour of a pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// What to do with surplus arguments in a group
    pub extra_arguments: ExtraArguments,
}

impl PipelineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration rejecting surplus arguments
    #[inline]
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_extra_arguments(ExtraArguments::Reject)
    }

    /// With extra-argument policy
    #[inline]
    #[must_use]
    pub fn with_extra_arguments(mut self, policy: ExtraArguments) -> Self {
        self.extra_arguments = policy;
        self
    }

    /// Parse from JSON
    ///
    /// # Errors
    /// Returns error if `input` is not a valid config document
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// Returns error if `input` is not a valid config document
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }
}
