//! Built-in failure taxonomy.
//!
//! [`Fault`] covers the everyday domain failures (division by zero, missing
//! keys, out-of-range positions, exhausted iterators, unparsable input).
//! Each fault belongs to a [`FaultKind`], and the kinds form a small tree so
//! a capture boundary can expect a whole family at once.

use serde::{Deserialize, Serialize};

use crate::category::{Category, Condition};

/// Convenience `Result` type alias for the fallible primitives in [`crate::ops`].
pub type Result<T> = std::result::Result<T, Fault>;

/// A domain failure raised by a fallible computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Fault {
    /// Division or remainder with a zero denominator.
    #[error("division by zero")]
    ZeroDivision,

    /// Integer arithmetic left the representable range.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// A key was not present in a map.
    #[error("key not found: {key}")]
    Key {
        /// Debug rendering of the missing key
        key: String,
    },

    /// A position was outside the bounds of a sequence.
    #[error("index {index} out of range for length {len}")]
    Index {
        /// Requested position
        index: usize,
        /// Length of the sequence
        len: usize,
    },

    /// An iterator had no more items.
    #[error("iterator exhausted")]
    Exhausted,

    /// A value had the right type but an unacceptable content.
    #[error("invalid value: {message}")]
    Value {
        /// What was wrong with the value
        message: String,
    },
}

impl Fault {
    /// Returns the category this fault belongs to.
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::ZeroDivision => FaultKind::ZeroDivision,
            Fault::Overflow { .. } => FaultKind::Overflow,
            Fault::Key { .. } => FaultKind::Key,
            Fault::Index { .. } => FaultKind::Index,
            Fault::Exhausted => FaultKind::Exhausted,
            Fault::Value { .. } => FaultKind::Value,
        }
    }

    /// Creates a missing-key fault from any debuggable key.
    pub fn key<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Fault::Key {
            key: format!("{key:?}"),
        }
    }

    /// Creates an invalid-value fault.
    pub fn value<S: Into<String>>(message: S) -> Self {
        Fault::Value {
            message: message.into(),
        }
    }
}

impl Condition for Fault {
    type Category = FaultKind;

    fn category(&self) -> FaultKind {
        self.kind()
    }
}

/// Categories of [`Fault`].
///
/// `Any`, `Arithmetic` and `Lookup` are families: no fault carries them
/// directly, but expecting one of them catches every descendant.
///
/// ```text
/// Any
/// ├── Arithmetic
/// │   ├── ZeroDivision
/// │   └── Overflow
/// ├── Lookup
/// │   ├── Key
/// │   └── Index
/// ├── Exhausted
/// └── Value
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FaultKind {
    /// Root of the tree.
    Any,
    /// Arithmetic failures.
    Arithmetic,
    /// Division by zero.
    ZeroDivision,
    /// Integer overflow.
    Overflow,
    /// Failed lookups in a container.
    Lookup,
    /// Missing map key.
    Key,
    /// Out-of-range position.
    Index,
    /// Exhausted iterator.
    Exhausted,
    /// Unacceptable value.
    Value,
}

impl Category for FaultKind {
    fn parent(self) -> Option<Self> {
        match self {
            FaultKind::Any => None,
            FaultKind::ZeroDivision | FaultKind::Overflow => Some(FaultKind::Arithmetic),
            FaultKind::Key | FaultKind::Index => Some(FaultKind::Lookup),
            FaultKind::Arithmetic | FaultKind::Lookup | FaultKind::Exhausted | FaultKind::Value => {
                Some(FaultKind::Any)
            }
        }
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaultKind::Any => write!(f, "any"),
            FaultKind::Arithmetic => write!(f, "arithmetic"),
            FaultKind::ZeroDivision => write!(f, "zero_division"),
            FaultKind::Overflow => write!(f, "overflow"),
            FaultKind::Lookup => write!(f, "lookup"),
            FaultKind::Key => write!(f, "key"),
            FaultKind::Index => write!(f, "index"),
            FaultKind::Exhausted => write!(f, "exhausted"),
            FaultKind::Value => write!(f, "value"),
        }
    }
}
