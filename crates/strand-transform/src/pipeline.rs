//! Transform pipelines
//!
//! Provides [`Pipeline`], a call chain whose groups are [`Stage`]s and whose
//! execute step is [`FoldStrategy`].

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::fold::FoldStrategy;
use crate::stage::{stage, try_stage, Stage};
use std::convert::Infallible;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use strand_core::{Chain, Executor};

/// Empty infallible pipeline
///
/// # Example
/// ```
/// use strand_transform::transform;
///
/// let greet = transform()
///     .then(|_: String| "hello".to_string())
///     .then(|v| v + " world!");
///
/// assert_eq!(greet.execute_default().unwrap(), "hello world!");
/// ```
#[inline]
#[must_use]
pub fn transform<T: 'static>() -> Pipeline<T> {
    Pipeline::new()
}

/// Empty pipeline whose stages may fail with `E`
#[inline]
#[must_use]
pub fn try_transform<T: 'static, E: 'static>() -> Pipeline<T, E> {
    Pipeline::new()
}

/// Immutable, forkable sequence of unary transforms
///
/// Every builder method returns a new pipeline; the receiver stays usable,
/// so a partially built pipeline can serve as a template for several others.
pub struct Pipeline<T, E = Infallible> {
    chain: Chain<Stage<T, E>, FoldStrategy>,
}

impl<T: 'static, E: 'static> Pipeline<T, E> {
    /// Create empty pipeline with default config
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create empty pipeline with explicit config
    #[inline]
    #[must_use]
    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            chain: Chain::new(FoldStrategy::with_config(config)),
        }
    }

    /// Append an infallible transform
    #[must_use]
    pub fn then<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.then_stage(stage(f))
    }

    /// Append a fallible transform
    #[must_use]
    pub fn try_then<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        self.then_stage(try_stage(f))
    }

    /// Append a prebuilt stage
    #[must_use]
    pub fn then_stage(&self, stage: Stage<T, E>) -> Self {
        Self {
            chain: self.chain.with(stage),
        }
    }

    /// Append a raw group of stages
    ///
    /// Only the first stage of the group runs. Any others are ignored, or
    /// rejected at execute time under [`PipelineConfig::strict`]. An empty
    /// group fails the fold with [`PipelineError::EmptyStage`].
    #[must_use]
    pub fn call(&self, stages: impl IntoIterator<Item = Stage<T, E>>) -> Self {
        Self {
            chain: self.chain.call(stages),
        }
    }

    /// Fold every stage over `seed`
    ///
    /// # Errors
    /// Returns the first stage failure unchanged, or a misuse error for
    /// malformed groups.
    #[inline]
    pub fn execute(&self, seed: T) -> Result<T, PipelineError<E>> {
        self.chain.execute(seed)
    }

    /// Fold every stage over `T::default()`
    ///
    /// # Errors
    /// Same as [`Pipeline::execute`].
    #[inline]
    pub fn execute_default(&self) -> Result<T, PipelineError<E>>
    where
        T: Default,
    {
        self.execute(T::default())
    }

    /// Detach the execute step as a plain function
    ///
    /// The function is closed over the stages recorded so far.
    #[must_use]
    pub fn flatten(
        &self,
    ) -> impl Fn(T) -> Result<T, PipelineError<E>> + Send + Sync + Clone + 'static {
        let executor: Executor<Stage<T, E>, FoldStrategy> = self.chain.executor();
        move |seed| executor.call(seed)
    }

    /// Whole pipeline as a single stage of another pipeline
    #[must_use]
    pub fn into_stage(&self) -> Stage<T, E> {
        Arc::new(self.flatten())
    }

    /// Underlying call chain
    #[inline]
    #[must_use]
    pub fn chain(&self) -> &Chain<Stage<T, E>, FoldStrategy> {
        &self.chain
    }

    /// Active config
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        self.chain.strategy().config()
    }

    /// Number of recorded groups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if no stage was recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl<T, E> Clone for Pipeline<T, E> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<T: 'static, E: 'static> Default for Pipeline<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Debug for Pipeline<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.chain.len())
            .field("config", self.chain.strategy().config())
            .finish()
    }
}
