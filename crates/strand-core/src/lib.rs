//! Strand Chain Core
//!
//! Persistent, forkable call chains with deferred execution.
//!
//! # Core Concepts
//!
//! - [`Chain<A, S>`]: Immutable value recording one [`ArgGroup`] per call
//! - [`Bundle<A>`]: Persistent ordered history of argument groups
//! - [`ExecuteStrategy`]: Trait giving a chain its meaning when executed
//! - [`Executor`]: A chain's execute step detached as a standalone value
//! - [`Snapshot`]: Built-in strategy returning the bundle itself
//!
//! Extending a chain never mutates it, so any intermediate chain can be kept
//! and extended again (forked) without affecting its siblings.
//!
//! # Example
//!
//! ```rust
//! use strand_core::{create_chain, Bundle};
//!
//! let chain = create_chain(|bundle: Bundle<i32>, options: &str| {
//!     format!("{} groups, {options}", bundle.len())
//! });
//!
//! let template = chain.with(1).call([2, 3]);
//! let left = template.with(4);
//! let right = template.with(5);
//!
//! assert_eq!(template.execute("verbose"), "2 groups, verbose");
//! assert_eq!(left.execute("quiet"), "3 groups, quiet");
//! assert_eq!(right.bundle().last().map(|g| g.to_vec()), Some(vec![5]));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod bundle;
mod chain;
mod strategy;

// Re-exports
pub use bundle::{ArgGroup, Bundle};
pub use chain::{create_chain, Chain, Executor};
pub use strategy::{ExecuteStrategy, Snapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
