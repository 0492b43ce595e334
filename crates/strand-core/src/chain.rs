//! Forkable call chains
//!
//! Provides [`Chain`], an immutable accumulation of argument groups, and
//! [`Executor`], a chain's execute step detached as a standalone value.

use crate::bundle::{ArgGroup, Bundle};
use crate::strategy::ExecuteStrategy;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// Build the empty root chain for `strategy`
///
/// Every chain derived from the root shares the same strategy.
///
/// # Example
/// ```
/// use strand_core::{create_chain, Snapshot};
///
/// let chain = create_chain(Snapshot);
/// let bundle = chain.with(1).with(2).call([3, 4]).execute(());
/// assert_eq!(bundle, vec![vec![1], vec![2], vec![3, 4]]);
/// ```
#[inline]
#[must_use]
pub fn create_chain<A, S>(strategy: S) -> Chain<A, S> {
    Chain::new(strategy)
}

/// Immutable chain value
///
/// Holds a [`Bundle`] snapshot and a shared handle to the execute strategy.
/// Extending a chain returns a new value; the receiver and every other chain
/// derived from it stay exactly as they were, so a chain can be forked simply
/// by extending it more than once.
///
/// # Invariants
/// - `bundle()` of a given value never changes
/// - Forks from a common ancestor never observe each other's groups
pub struct Chain<A, S> {
    bundle: Bundle<A>,
    strategy: Arc<S>,
}

impl<A, S> Chain<A, S> {
    /// Create empty root chain
    #[inline]
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self {
            bundle: Bundle::new(),
            strategy: Arc::new(strategy),
        }
    }

    /// Append one argument group, returning the extended chain
    ///
    /// `args` may be empty; the group is recorded either way.
    #[must_use]
    pub fn call(&self, args: impl IntoIterator<Item = A>) -> Self {
        self.append(ArgGroup::new(args))
    }

    /// Append a group holding just `arg`
    #[must_use]
    pub fn with(&self, arg: A) -> Self {
        self.append(ArgGroup::single(arg))
    }

    /// Append a prebuilt group
    #[must_use]
    pub fn append(&self, group: ArgGroup<A>) -> Self {
        tracing::trace!(
            depth = self.bundle.len() + 1,
            width = group.len(),
            "extending chain"
        );
        Self {
            bundle: self.bundle.appended(group),
            strategy: Arc::clone(&self.strategy),
        }
    }

    /// Run the strategy over this chain's bundle
    ///
    /// Pure read: the chain is unchanged and can be executed again.
    #[inline]
    pub fn execute<I>(&self, input: I) -> <S as ExecuteStrategy<A, I>>::Output
    where
        S: ExecuteStrategy<A, I>,
    {
        tracing::trace!(depth = self.bundle.len(), "executing chain");
        self.strategy.execute(self.bundle.clone(), input)
    }

    /// Detach the execute step as a standalone value
    ///
    /// The executor is closed over the current bundle, so chains derived
    /// later do not affect it.
    #[inline]
    #[must_use]
    pub fn executor(&self) -> Executor<A, S> {
        Executor {
            bundle: self.bundle.clone(),
            strategy: Arc::clone(&self.strategy),
        }
    }

    /// Accumulated groups
    #[inline]
    #[must_use]
    pub fn bundle(&self) -> &Bundle<A> {
        &self.bundle
    }

    /// Number of groups appended since the root
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundle.len()
    }

    /// Check if this is a root chain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundle.is_empty()
    }

    /// Shared strategy
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Root chain with the same strategy
    #[inline]
    #[must_use]
    pub fn root(&self) -> Self {
        Self {
            bundle: Bundle::new(),
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<A, S> Clone for Chain<A, S> {
    fn clone(&self) -> Self {
        Self {
            bundle: self.bundle.clone(),
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<A: Debug, S> Debug for Chain<A, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("bundle", &self.bundle)
            .field("strategy", &std::any::type_name::<S>())
            .finish()
    }
}

/// Execute step of a chain, detached from the chain itself
///
/// Behaves exactly like [`Chain::execute`] on the chain it came from.
pub struct Executor<A, S> {
    bundle: Bundle<A>,
    strategy: Arc<S>,
}

impl<A, S> Executor<A, S> {
    /// Run the strategy with trailing `input`
    #[inline]
    pub fn call<I>(&self, input: I) -> <S as ExecuteStrategy<A, I>>::Output
    where
        S: ExecuteStrategy<A, I>,
    {
        self.strategy.execute(self.bundle.clone(), input)
    }

    /// Convert into a plain closure
    #[must_use]
    pub fn into_fn<I>(self) -> impl Fn(I) -> <S as ExecuteStrategy<A, I>>::Output
    where
        S: ExecuteStrategy<A, I>,
    {
        move |input| self.call(input)
    }

    /// Bundle this executor is closed over
    #[inline]
    #[must_use]
    pub fn bundle(&self) -> &Bundle<A> {
        &self.bundle
    }
}

impl<A, S> Clone for Executor<A, S> {
    fn clone(&self) -> Self {
        Self {
            bundle: self.bundle.clone(),
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<A: Debug, S> Debug for Executor<A, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("bundle", &self.bundle)
            .finish_non_exhaustive()
    }
}
