//! Execute strategy trait
//!
//! Provides the [`ExecuteStrategy`] trait that gives a chain its meaning when
//! executed, plus the built-in [`Snapshot`] strategy.

use crate::bundle::Bundle;

/// Interpretation of a bundle, fixed when the chain factory is built
///
/// `I` is the trailing input handed to `execute`; use `()` when the
/// strategy takes nothing.
///
/// Any `Fn(Bundle<A>, I) -> O` closure is a strategy.
///
/// # Contract
/// Implementations should be pure: the same bundle and input give the same
/// output. The chain performs no checks of its own, so anything a strategy
/// returns (including `Err` values) or panics with reaches the caller as is.
pub trait ExecuteStrategy<A, I> {
    /// Result of executing a chain
    type Output;

    /// Run the strategy over `bundle` with trailing `input`
    fn execute(&self, bundle: Bundle<A>, input: I) -> Self::Output;
}

impl<A, I, O, F> ExecuteStrategy<A, I> for F
where
    F: Fn(Bundle<A>, I) -> O,
{
    type Output = O;

    #[inline]
    fn execute(&self, bundle: Bundle<A>, input: I) -> O {
        self(bundle, input)
    }
}

/// Strategy that hands back the accumulated bundle untouched
///
/// Useful for inspecting what a chain recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot;

impl<A> ExecuteStrategy<A, ()> for Snapshot {
    type Output = Bundle<A>;

    #[inline]
    fn execute(&self, bundle: Bundle<A>, (): ()) -> Bundle<A> {
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::ArgGroup;

    #[test]
    fn closure_is_strategy() {
        let count = |bundle: Bundle<u8>, offset: usize| bundle.len() + offset;
        let bundle: Bundle<u8> = vec![ArgGroup::single(1), ArgGroup::single(2)]
            .into_iter()
            .collect();

        assert_eq!(count.execute(bundle, 10), 12);
    }

    #[test]
    fn snapshot_returns_bundle() {
        let bundle: Bundle<&str> = std::iter::once(ArgGroup::new(["a", "b"])).collect();
        let out = Snapshot.execute(bundle.clone(), ());
        assert_eq!(out, bundle);
    }
}
