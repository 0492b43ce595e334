//! Pipeline stages
//!
//! A [`Stage`] is one shared unary transform in a pipeline.

use crate::error::PipelineError;
use std::convert::Infallible;
use std::sync::Arc;

/// Shared unary transform
///
/// Fallible so that failures stop the fold; infallible transforms are
/// wrapped with [`stage`].
pub type Stage<T, E = Infallible> = Arc<dyn Fn(T) -> Result<T, PipelineError<E>> + Send + Sync>;

/// Wrap an infallible transform
#[must_use]
pub fn stage<T, E, F>(f: F) -> Stage<T, E>
where
    T: 'static,
    E: 'static,
    F: Fn(T) -> T + Send + Sync + 'static,
{
    Arc::new(move |value| Ok(f(value)))
}

/// Wrap a fallible transform
///
/// Errors are passed through as [`PipelineError::Transform`].
#[must_use]
pub fn try_stage<T, E, F>(f: F) -> Stage<T, E>
where
    T: 'static,
    E: 'static,
    F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
{
    Arc::new(move |value| f(value).map_err(PipelineError::Transform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_wraps_in_ok() {
        let double: Stage<i32> = stage(|x| x * 2);
        assert_eq!(double(21), Ok(42));
    }

    #[test]
    fn try_stage_wraps_error() {
        let parse: Stage<String, String> = try_stage(|s: String| {
            if s.is_empty() {
                Err("empty".to_string())
            } else {
                Ok(s.to_uppercase())
            }
        });

        assert_eq!(parse("abc".to_string()), Ok("ABC".to_string()));
        assert_eq!(parse(String::new()), Err(PipelineError::Transform("empty".to_string())));
    }
}
