//! Strand Transform Pipeline
//!
//! Left-fold pipelines of unary transforms, built on [`strand_core`] chains.
//!
//! # Core Concepts
//!
//! - [`Pipeline<T, E>`]: Forkable chain of [`Stage`]s executed as a left fold
//! - [`Stage<T, E>`]: Shared unary transform (`stage` / `try_stage` build one)
//! - [`FoldStrategy`]: The execute strategy behind every pipeline
//! - [`PipelineConfig`]: Fold behaviour (extra-argument policy)
//! - [`PipelineError`]: Misuse and transform failures
//!
//! # Example
//!
//! ```rust
//! use strand_transform::transform;
//!
//! let append = |suffix: &'static str| move |data: String| data + suffix;
//!
//! let append12 = transform().then(append("1")).then(append("2"));
//! let append123 = append12.then(append("3"));
//!
//! // Flattened pipelines are plain functions and nest as stages
//! let twice = transform()
//!     .then_stage(append123.into_stage())
//!     .then_stage(append12.into_stage());
//!
//! assert_eq!(append123.execute("hello".into()).unwrap(), "hello123");
//! assert_eq!(twice.execute("x".into()).unwrap(), "x12312");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod fold;
mod pipeline;
mod stage;

// Re-exports
pub use config::{ExtraArguments, PipelineConfig};
pub use error::{ConfigError, PipelineError};
pub use fold::FoldStrategy;
pub use pipeline::{transform, try_transform, Pipeline};
pub use stage::{stage, try_stage, Stage};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
