//! Left-fold execute strategy
//!
//! Provides [`FoldStrategy`], which reads one transform per group and applies
//! them in order to a seed value.

use crate::config::{ExtraArguments, PipelineConfig};
use crate::error::PipelineError;
use crate::stage::Stage;
use strand_core::{ArgGroup, Bundle, ExecuteStrategy};

/// Execute strategy folding stages over a seed
///
/// # Characteristics
/// - Stages run in bundle order, each seeing the previous result
/// - The first failing stage stops the fold; no partial result is kept
/// - Only the first argument of a group is read (see [`ExtraArguments`])
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldStrategy {
    config: PipelineConfig,
}

impl FoldStrategy {
    /// Create strategy with default config
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strategy with explicit config
    #[inline]
    #[must_use]
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Active config
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Pick the transform a group contributes
    fn select<'a, T, E>(
        &self,
        stage: usize,
        group: &'a ArgGroup<Stage<T, E>>,
    ) -> Result<&'a Stage<T, E>, PipelineError<E>> {
        let (first, rest) = group
            .split_first()
            .ok_or(PipelineError::EmptyStage { stage })?;

        if !rest.is_empty() {
            match self.config.extra_arguments {
                ExtraArguments::Ignore => {
                    tracing::trace!(stage, ignored = rest.len(), "ignoring extra arguments");
                }
                ExtraArguments::Reject => {
                    return Err(PipelineError::ExtraArguments {
                        stage,
                        extra: rest.len(),
                    });
                }
            }
        }

        Ok(first)
    }
}

impl<T, E> ExecuteStrategy<Stage<T, E>, T> for FoldStrategy {
    type Output = Result<T, PipelineError<E>>;

    fn execute(&self, bundle: Bundle<Stage<T, E>>, seed: T) -> Self::Output {
        tracing::debug!(stages = bundle.len(), "folding transform pipeline");

        let result = bundle
            .iter()
            .enumerate()
            .try_fold(seed, |value, (index, group)| {
                tracing::trace!(stage = index, "applying stage");
                let transform = self.select(index, group)?;
                transform(value)
            });

        if let Err(err) = &result {
            tracing::warn!(misuse = err.is_misuse(), "pipeline fold stopped");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{stage, try_stage};

    fn bundle_of(groups: Vec<Vec<Stage<i32>>>) -> Bundle<Stage<i32>> {
        groups.into_iter().map(ArgGroup::from).collect()
    }

    #[test]
    fn empty_bundle_returns_seed() {
        let fold = FoldStrategy::new();
        assert_eq!(fold.execute(Bundle::<Stage<i32>>::new(), 5), Ok(5));
    }

    #[test]
    fn applies_left_to_right() {
        let fold = FoldStrategy::new();
        let bundle = bundle_of(vec![vec![stage(|x| x + 1)], vec![stage(|x| x * 10)]]);
        assert_eq!(fold.execute(bundle, 1), Ok(20));
    }

    #[test]
    fn ignores_extra_arguments_by_default() {
        let fold = FoldStrategy::new();
        let bundle = bundle_of(vec![vec![stage(|x| x + 1), stage(|_| 999)]]);
        assert_eq!(fold.execute(bundle, 1), Ok(2));
    }

    #[test]
    fn strict_config_rejects_extra_arguments() {
        let fold = FoldStrategy::with_config(PipelineConfig::strict());
        let bundle = bundle_of(vec![
            vec![stage(|x| x + 1)],
            vec![stage(|x| x + 1), stage(|x| x), stage(|x| x)],
        ]);
        assert_eq!(
            fold.execute(bundle, 1),
            Err(PipelineError::ExtraArguments { stage: 1, extra: 2 })
        );
    }

    #[test]
    fn empty_group_fails_at_its_position() {
        let fold = FoldStrategy::new();
        let bundle = bundle_of(vec![vec![stage(|x| x + 1)], vec![]]);
        assert_eq!(fold.execute(bundle, 1), Err(PipelineError::EmptyStage { stage: 1 }));
    }

    #[test]
    fn failing_stage_short_circuits() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let bundle: Bundle<Stage<i32, &'static str>> = vec![
            ArgGroup::single(try_stage(|_| Err("nope"))),
            ArgGroup::single(stage(move |x| {
                counter.fetch_add(1, Ordering::SeqCst);
                x
            })),
        ]
        .into_iter()
        .collect();

        let fold = FoldStrategy::new();
        assert_eq!(fold.execute(bundle, 0), Err(PipelineError::Transform("nope")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
