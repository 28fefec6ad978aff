#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Errors as values.
//!
//! An [`Outcome`] holds either a success value or a failure value and is
//! inspected and transformed through combinators. Capture boundaries
//! ([`try_expecting`], [`try_unwinding`]) run a fallible thunk once and
//! convert only the failure categories the caller names; anything else
//! propagates.

pub mod capture;
pub mod category;
pub mod error;
pub mod ops;
pub mod outcome;

mod proptests;

// Re-exports for convenience
pub use capture::{try_expecting, try_unwinding};
pub use category::{Category, Condition, Expected};
pub use error::{Fault, FaultKind, Result};
pub use outcome::Outcome;
