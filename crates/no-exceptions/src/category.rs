//! Failure categories and the sets a capture boundary expects.
//!
//! A raised condition reports its [`Category`]; a capture boundary receives
//! an [`Expected`] set and converts the condition only when its category is
//! one of the expected categories or a sub-category of one.

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// An identifier for a class of raised conditions.
///
/// Categories form a forest through [`Category::parent`]. A category is
/// considered a sub-category of every ancestor on its parent chain.
pub trait Category: Copy + Eq + Debug {
    /// Returns the enclosing category, or `None` for a root.
    fn parent(self) -> Option<Self>;

    /// Returns `true` if `self` equals `other` or descends from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use no_exceptions::{Category, FaultKind};
    ///
    /// assert!(FaultKind::ZeroDivision.is_a(FaultKind::ZeroDivision));
    /// assert!(FaultKind::ZeroDivision.is_a(FaultKind::Arithmetic));
    /// assert!(!FaultKind::Arithmetic.is_a(FaultKind::ZeroDivision));
    /// ```
    fn is_a(self, other: Self) -> bool {
        let mut current = Some(self);
        while let Some(category) = current {
            if category == other {
                return true;
            }
            current = category.parent();
        }
        false
    }
}

/// A condition that can be raised by a thunk and classified by category.
pub trait Condition {
    /// The category type of this condition family.
    type Category: Category;

    /// Returns the category of this particular condition.
    fn category(&self) -> Self::Category;
}

/// A set of categories a capture boundary is told to expect.
///
/// Implemented for a single category, arrays, slices, vectors, hash and
/// ordered sets (owned or borrowed), and tuples of up to four categories.
pub trait Expected<C: Category> {
    /// Returns `true` if `category` is, or descends from, any member.
    fn matches(&self, category: C) -> bool;
}

fn any_match<'a, C, I>(members: I, category: C) -> bool
where
    C: Category + 'a,
    I: IntoIterator<Item = &'a C>,
{
    members.into_iter().any(|member| category.is_a(*member))
}

impl<C: Category> Expected<C> for C {
    fn matches(&self, category: C) -> bool {
        category.is_a(*self)
    }
}

impl<C: Category, const N: usize> Expected<C> for [C; N] {
    fn matches(&self, category: C) -> bool {
        any_match(self, category)
    }
}

impl<C: Category, const N: usize> Expected<C> for &[C; N] {
    fn matches(&self, category: C) -> bool {
        any_match(self.iter(), category)
    }
}

impl<C: Category> Expected<C> for &[C] {
    fn matches(&self, category: C) -> bool {
        any_match(self.iter(), category)
    }
}

impl<C: Category> Expected<C> for Vec<C> {
    fn matches(&self, category: C) -> bool {
        any_match(self, category)
    }
}

impl<C: Category> Expected<C> for &Vec<C> {
    fn matches(&self, category: C) -> bool {
        any_match(self.iter(), category)
    }
}

impl<C: Category + Hash> Expected<C> for HashSet<C> {
    fn matches(&self, category: C) -> bool {
        any_match(self, category)
    }
}

impl<C: Category + Hash> Expected<C> for &HashSet<C> {
    fn matches(&self, category: C) -> bool {
        any_match(self.iter(), category)
    }
}

impl<C: Category + Ord> Expected<C> for BTreeSet<C> {
    fn matches(&self, category: C) -> bool {
        any_match(self, category)
    }
}

impl<C: Category + Ord> Expected<C> for &BTreeSet<C> {
    fn matches(&self, category: C) -> bool {
        any_match(self.iter(), category)
    }
}

macro_rules! impl_expected_for_tuple {
    ($($member:ident),+) => {
        impl<C: Category> Expected<C> for ($(impl_expected_for_tuple!(@ty $member),)+) {
            fn matches(&self, category: C) -> bool {
                let ($($member,)+) = *self;
                $(category.is_a($member))||+
            }
        }
    };
    (@ty $member:ident) => { C };
}

impl_expected_for_tuple!(first, second);
impl_expected_for_tuple!(first, second, third);
impl_expected_for_tuple!(first, second, third, fourth);
