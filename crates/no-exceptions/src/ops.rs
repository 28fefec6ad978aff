//! Fallible primitives that raise [`Fault`]s instead of panicking.
//!
//! These are the building blocks thunks are usually made of: each one
//! returns `Err(fault)` where the equivalent std operation would panic or
//! return a bare `None`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

use crate::error::{Fault, Result};

/// Division that reports a zero denominator or overflow as a [`Fault`].
pub trait Divide: Sized {
    /// Divides `self` by `denominator`.
    fn divide(self, denominator: Self) -> Result<Self>;
}

macro_rules! impl_divide_for_int {
    ($($ty:ty),+) => {
        $(
            impl Divide for $ty {
                fn divide(self, denominator: Self) -> Result<Self> {
                    if denominator == 0 {
                        return Err(Fault::ZeroDivision);
                    }
                    self.checked_div(denominator)
                        .ok_or(Fault::Overflow { operation: "divide" })
                }
            }
        )+
    };
}

macro_rules! impl_divide_for_float {
    ($($ty:ty),+) => {
        $(
            impl Divide for $ty {
                fn divide(self, denominator: Self) -> Result<Self> {
                    if denominator == 0.0 {
                        return Err(Fault::ZeroDivision);
                    }
                    Ok(self / denominator)
                }
            }
        )+
    };
}

impl_divide_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_divide_for_float!(f32, f64);

/// Divides `numerator` by `denominator`.
///
/// Both `0.0` and `-0.0` count as a zero denominator.
///
/// ```
/// use no_exceptions::{ops, Fault};
///
/// assert_eq!(ops::divide(10, 2), Ok(5));
/// assert_eq!(ops::divide(10, 0), Err(Fault::ZeroDivision));
/// assert!(ops::divide(i32::MIN, -1).is_err());
/// ```
pub fn divide<T: Divide>(numerator: T, denominator: T) -> Result<T> {
    numerator.divide(denominator)
}

/// Looks up `key` in `map`.
pub fn lookup<'a, K, V, Q, S>(map: &'a HashMap<K, V, S>, key: &Q) -> Result<&'a V>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + Debug + ?Sized,
    S: BuildHasher,
{
    map.get(key).ok_or_else(|| Fault::key(key))
}

/// Returns the element at `position`.
pub fn index<T>(items: &[T], position: usize) -> Result<&T> {
    items.get(position).ok_or(Fault::Index {
        index: position,
        len: items.len(),
    })
}

/// Advances `iter`, raising [`Fault::Exhausted`] when it has no more items.
pub fn next<I: Iterator + ?Sized>(iter: &mut I) -> Result<I::Item> {
    iter.next().ok_or(Fault::Exhausted)
}

/// Parses `input`, raising [`Fault::Value`] with the parser's message.
pub fn parse<T>(input: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    input.parse().map_err(|err: T::Err| Fault::value(err.to_string()))
}
