//! Testing utilities for Strand workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use std::sync::Arc;
use strand_core::{create_chain, Bundle, Chain, Snapshot};
use tracing_subscriber::EnvFilter;

pub type Unary<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// Install a test-friendly subscriber; later calls are no-ops.
///
/// Honors `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn append(
    suffix: impl Into<String>,
) -> impl Fn(String) -> String + Send + Sync + Clone + 'static {
    let suffix = suffix.into();
    move |data: String| data + &suffix
}

pub fn snapshot_chain<A>() -> Chain<A, Snapshot> {
    create_chain(Snapshot)
}

pub fn groups<A: Clone>(bundle: &Bundle<A>) -> Vec<Vec<A>> {
    bundle.to_vecs()
}

pub fn add(n: i64) -> Unary<i64> {
    Arc::new(move |x| x.wrapping_add(n))
}

pub fn mul(n: i64) -> Unary<i64> {
    Arc::new(move |x| x.wrapping_mul(n))
}

/// Direct composition, applied left to right, for comparing against folds.
pub fn compose<T: 'static>(fs: Vec<Unary<T>>) -> impl Fn(T) -> T {
    move |seed| fs.iter().fold(seed, |value, f| f(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_concatenates() {
        assert_eq!(append("!")("hi".to_string()), "hi!");
    }

    #[test]
    fn compose_applies_in_order() {
        let f = compose(vec![add(1), mul(3)]);
        assert_eq!(f(2), 9);
    }

    #[test]
    fn snapshot_fixture_records_groups() {
        let chain = snapshot_chain().with(1).call([2, 3]);
        assert_eq!(groups(&chain.execute(())), vec![vec![1], vec![2, 3]]);
    }
}
