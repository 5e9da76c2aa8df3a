use std::{cmp::Ordering, fmt};

/// Three-way comparison between two values of the same type.
///
/// Negative means `self` goes first, zero means they are equivalent and
/// positive means `self` goes after `other`.
pub trait Comparable {
    fn compare_to(&self, other: &Self) -> i32;
}

/// A comparison that lives outside the element type.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> i32;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> i32,
{
    fn compare(&self, a: &T, b: &T) -> i32 {
        self(a, b)
    }
}

/// Orders elements by their own [`Comparable`] impl.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompareTo;

impl<T: Comparable> Comparator<T> for CompareTo {
    fn compare(&self, a: &T, b: &T) -> i32 {
        a.compare_to(b)
    }
}

pub fn to_ordering(c: i32) -> Ordering {
    c.cmp(&0)
}

pub fn from_ordering(o: Ordering) -> i32 {
    match o {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub value: i64,
}

impl Score {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Comparable for Score {
    fn compare_to(&self, other: &Self) -> i32 {
        // sign of the difference, without the overflow of subtracting
        from_ordering(self.value.cmp(&other.value))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub name: String,
}

impl Name {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl Comparable for Name {
    fn compare_to(&self, other: &Self) -> i32 {
        from_ordering(self.name.cmp(&other.name))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.name)
    }
}
