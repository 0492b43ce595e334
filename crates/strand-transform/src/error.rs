//! Error types for Strand Transform
//!
//! Provides error handling for:
//! - Pipeline misuse (stages with nothing to call, surplus arguments)
//! - Failures raised by user transforms
//! - Configuration loading

use std::convert::Infallible;

/// Failure while folding a pipeline
///
/// `E` is the error type of fallible stages; infallible pipelines use
/// [`Infallible`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError<E = Infallible> {
    /// Group at `stage` held no transform
    #[error("stage {stage} has no transform to apply")]
    EmptyStage {
        /// Zero-based stage index
        stage: usize,
    },

    /// Group at `stage` held more than one transform under a strict config
    #[error("stage {stage} received {extra} extra argument(s)")]
    ExtraArguments {
        /// Zero-based stage index
        stage: usize,
        /// Number of arguments after the first
        extra: usize,
    },

    /// A transform failed; its error is passed through unchanged
    #[error(transparent)]
    Transform(E),
}

impl<E> PipelineError<E> {
    /// Check if error comes from building the pipeline wrongly rather than
    /// from a transform
    #[inline]
    #[must_use]
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::EmptyStage { .. } | Self::ExtraArguments { .. })
    }

    /// Stage index for misuse errors
    #[inline]
    #[must_use]
    pub fn stage(&self) -> Option<usize> {
        match self {
            Self::EmptyStage { stage } | Self::ExtraArguments { stage, .. } => Some(*stage),
            Self::Transform(_) => None,
        }
    }

    /// Extract the transform error, if that is what this is
    #[inline]
    #[must_use]
    pub fn into_transform(self) -> Option<E> {
        match self {
            Self::Transform(err) => Some(err),
            _ => None,
        }
    }

    /// Map the transform error type
    #[must_use]
    pub fn map_transform<F, U>(self, f: F) -> PipelineError<U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::EmptyStage { stage } => PipelineError::EmptyStage { stage },
            Self::ExtraArguments { stage, extra } => PipelineError::ExtraArguments { stage, extra },
            Self::Transform(err) => PipelineError::Transform(f(err)),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON could not be parsed into a config
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML could not be parsed into a config
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misuse_classification() {
        let empty: PipelineError = PipelineError::EmptyStage { stage: 2 };
        let extra: PipelineError = PipelineError::ExtraArguments { stage: 0, extra: 1 };
        let failed: PipelineError<&str> = PipelineError::Transform("boom");

        assert!(empty.is_misuse());
        assert!(extra.is_misuse());
        assert!(!failed.is_misuse());
        assert_eq!(empty.stage(), Some(2));
        assert_eq!(failed.stage(), None);
    }

    #[test]
    fn transform_error_is_transparent() {
        let err: PipelineError<std::num::ParseIntError> =
            PipelineError::Transform("x".parse::<i32>().unwrap_err());
        assert_eq!(err.to_string(), "invalid digit found in string");
    }

    #[test]
    fn misuse_messages() {
        let err: PipelineError = PipelineError::ExtraArguments { stage: 3, extra: 2 };
        assert_eq!(err.to_string(), "stage 3 received 2 extra argument(s)");
    }

    #[test]
    fn map_and_extract_transform() {
        let err: PipelineError<u8> = PipelineError::Transform(7);
        let mapped = err.map_transform(u32::from);
        assert_eq!(mapped.into_transform(), Some(7_u32));

        let empty: PipelineError<u8> = PipelineError::EmptyStage { stage: 1 };
        assert_eq!(empty.map_transform(u32::from), PipelineError::EmptyStage { stage: 1 });
    }
}
