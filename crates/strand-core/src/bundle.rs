//! Argument groups and bundles
//!
//! Provides [`ArgGroup`] (the values passed in one call) and [`Bundle`]
//! (the ordered history of groups carried by a chain).

use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

/// Values passed in a single chain-extension call
///
/// Immutable once built. Cloning shares the backing slice.
pub struct ArgGroup<A>(Arc<[A]>);

impl<A> ArgGroup<A> {
    /// Create group from any sequence of arguments
    #[inline]
    #[must_use]
    pub fn new(args: impl IntoIterator<Item = A>) -> Self {
        Self(args.into_iter().collect())
    }

    /// Group holding exactly one argument
    #[inline]
    #[must_use]
    pub fn single(arg: A) -> Self {
        Self(Arc::from(vec![arg]))
    }

    /// Group with no arguments
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Arguments as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[A] {
        &self.0
    }

    /// Copy arguments into a fresh `Vec`
    #[must_use]
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.0.to_vec()
    }
}

impl<A> Clone for ArgGroup<A> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A> Deref for ArgGroup<A> {
    type Target = [A];

    fn deref(&self) -> &[A] {
        &self.0
    }
}

impl<A: Debug> Debug for ArgGroup<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<A: PartialEq> PartialEq for ArgGroup<A> {
    fn eq(&self, other: &Self) -> bool {
        self.0[..] == other.0[..]
    }
}

impl<A: Eq> Eq for ArgGroup<A> {}

impl<A: PartialEq> PartialEq<[A]> for ArgGroup<A> {
    fn eq(&self, other: &[A]) -> bool {
        &self.0[..] == other
    }
}

impl<A: PartialEq> PartialEq<Vec<A>> for ArgGroup<A> {
    fn eq(&self, other: &Vec<A>) -> bool {
        self.0[..] == other[..]
    }
}

impl<A> FromIterator<A> for ArgGroup<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<A> From<Vec<A>> for ArgGroup<A> {
    fn from(args: Vec<A>) -> Self {
        Self(Arc::from(args))
    }
}

impl<'a, A> IntoIterator for &'a ArgGroup<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<A: Serialize> Serialize for ArgGroup<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Ordered history of argument groups
///
/// Persistent: backed by [`im::Vector`], so clones share structure and
/// [`Bundle::appended`] never touches the receiver.
///
/// # Invariants
/// - Group order is call order
/// - A bundle observed through one handle never changes
pub struct Bundle<A>(im::Vector<ArgGroup<A>>);

impl<A> Bundle<A> {
    /// Empty bundle (root of every chain)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Number of groups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no group was ever appended
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Group at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArgGroup<A>> {
        self.0.get(index)
    }

    /// Oldest group
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&ArgGroup<A>> {
        self.0.front()
    }

    /// Most recent group
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&ArgGroup<A>> {
        self.0.back()
    }

    /// Iterate groups in call order
    #[inline]
    pub fn iter(&self) -> im::vector::Iter<'_, ArgGroup<A>> {
        self.0.iter()
    }

    /// New bundle with `group` appended at the end
    ///
    /// The receiver is left untouched; siblings appended from the same
    /// bundle never observe each other's groups.
    #[must_use]
    pub fn appended(&self, group: ArgGroup<A>) -> Self {
        let mut next = self.0.clone();
        next.push_back(group);
        Self(next)
    }

    /// Copy into nested vectors (mostly for comparisons)
    #[must_use]
    pub fn to_vecs(&self) -> Vec<Vec<A>>
    where
        A: Clone,
    {
        self.0.iter().map(ArgGroup::to_vec).collect()
    }
}

impl<A> Clone for Bundle<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> Default for Bundle<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Debug> Debug for Bundle<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<A: PartialEq> PartialEq for Bundle<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for Bundle<A> {}

impl<A: PartialEq> PartialEq<Vec<Vec<A>>> for Bundle<A> {
    fn eq(&self, other: &Vec<Vec<A>>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A> FromIterator<ArgGroup<A>> for Bundle<A> {
    fn from_iter<I: IntoIterator<Item = ArgGroup<A>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, A> IntoIterator for &'a Bundle<A> {
    type Item = &'a ArgGroup<A>;
    type IntoIter = im::vector::Iter<'a, ArgGroup<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<A: Serialize> Serialize for Bundle<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle_of(groups: Vec<Vec<i32>>) -> Bundle<i32> {
        groups.into_iter().map(ArgGroup::from).collect()
    }

    #[test]
    fn group_new_preserves_order() {
        let group = ArgGroup::new([3, 1, 2]);
        assert_eq!(group.as_slice(), &[3, 1, 2]);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn group_single_and_empty() {
        assert_eq!(ArgGroup::single('x').to_vec(), vec!['x']);
        assert!(ArgGroup::<char>::empty().is_empty());
    }

    #[test]
    fn group_clone_shares_storage() {
        let group = ArgGroup::new(vec![String::from("a")]);
        let copy = group.clone();
        assert!(std::ptr::eq(group.as_slice(), copy.as_slice()));
    }

    #[test]
    fn bundle_appended_leaves_receiver_untouched() {
        let base = bundle_of(vec![vec![1], vec![2]]);
        let next = base.appended(ArgGroup::single(3));

        assert_eq!(base, vec![vec![1], vec![2]]);
        assert_eq!(next, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn bundle_sibling_appends_are_independent() {
        let base = bundle_of(vec![vec![1]]);
        let left = base.appended(ArgGroup::single(10));
        let right = base.appended(ArgGroup::single(20));

        assert_eq!(left.to_vecs(), vec![vec![1], vec![10]]);
        assert_eq!(right.to_vecs(), vec![vec![1], vec![20]]);
    }

    #[test]
    fn bundle_accessors() {
        let bundle = bundle_of(vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.first().map(ArgGroup::to_vec), Some(vec![1, 2]));
        assert_eq!(bundle.last().map(ArgGroup::to_vec), Some(vec![3]));
        assert!(bundle.get(1).is_some_and(|g| g.is_empty()));
        assert!(bundle.get(3).is_none());
        assert!(Bundle::<i32>::new().is_empty());
    }

    #[test]
    fn bundle_serializes_as_nested_sequences() {
        let bundle = bundle_of(vec![vec![1, 2], vec![3]]);
        let json = serde_json::to_string(&bundle).unwrap();
        assert_eq!(json, "[[1,2],[3]]");
    }

    #[test]
    fn bundle_debug_is_nested_list() {
        let bundle = bundle_of(vec![vec![1], vec![2, 3]]);
        assert_eq!(format!("{bundle:?}"), "[[1], [2, 3]]");
    }
}
