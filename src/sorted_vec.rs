use std::ops::Deref;

use crate::compare::{to_ordering, Comparator, CompareTo};

/// A vec that keeps itself in ascending order under `C`.
///
/// Every [`add`](SortedVec::add) appends and then stably resorts, so elements
/// that compare equal stay in the order they were added.
#[derive(Debug, Clone)]
pub struct SortedVec<T, C = CompareTo> {
    v: Vec<T>,
    cmp: C,
}

impl<T, C: Default> Default for SortedVec<T, C> {
    fn default() -> Self {
        Self {
            v: Default::default(),
            cmp: Default::default(),
        }
    }
}

impl<T, C> Deref for SortedVec<T, C> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.v
    }
}

impl<T> SortedVec<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, C> SortedVec<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self { v: Vec::new(), cmp }
    }

    pub fn min(&self) -> Option<&T> {
        self.v.first()
    }

    pub fn max(&self) -> Option<&T> {
        self.v.last()
    }

    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.v.clone()
    }
}

impl<T, C: Comparator<T>> SortedVec<T, C> {
    pub fn add(&mut self, t: T) {
        self.v.push(t);
        let cmp = &self.cmp;
        self.v.sort_by(|a, b| to_ordering(cmp.compare(a, b)));
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedVec<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for t in iter {
            self.add(t);
        }
    }
}

impl<T, C> FromIterator<T> for SortedVec<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = Self::default();
        s.extend(iter);
        s
    }
}

impl<'a, T, C> IntoIterator for &'a SortedVec<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.v.iter()
    }
}

impl<T, C> From<SortedVec<T, C>> for Vec<T> {
    fn from(s: SortedVec<T, C>) -> Vec<T> {
        s.v
    }
}
