//! Capture boundaries: the only places where raised conditions become values.
//!
//! [`try_expecting`] handles thunks that raise by returning `Err`.
//! [`try_unwinding`] handles thunks that raise by unwinding with a typed
//! payload. Both run the thunk once, inline, and convert only the
//! conditions the caller expects. Everything else keeps travelling up.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::category::{Condition, Expected};
use crate::outcome::Outcome;

/// Runs `thunk` and converts the conditions in `expected` into a failure.
///
/// - A normal return becomes `Ok(Outcome::Success(value))`.
/// - A raised condition whose category is, or descends from, a member of
///   `expected` becomes `Ok(Outcome::Failure(condition))`.
/// - Any other condition is returned untouched as `Err(condition)` so the
///   caller forwards it with `?`. No `Outcome` is produced for it.
///
/// `expected` may be a single category or any collection implementing
/// [`Expected`] (arrays, slices, `Vec`, sets, tuples).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use no_exceptions::{ops, try_expecting, FaultKind};
///
/// let empty: HashMap<String, i32> = HashMap::new();
///
/// let missing = try_expecting(|| ops::lookup(&empty, "port").copied(), FaultKind::Key)?;
/// assert!(missing.is_failure());
///
/// let unexpected = try_expecting(|| ops::lookup(&empty, "port").copied(), FaultKind::Index);
/// assert!(unexpected.is_err());
/// # Ok::<(), no_exceptions::Fault>(())
/// ```
pub fn try_expecting<T, E, X, Th>(thunk: Th, expected: X) -> Result<Outcome<T, E>, E>
where
    Th: FnOnce() -> Result<T, E>,
    E: Condition,
    X: Expected<E::Category>,
{
    match thunk() {
        Ok(value) => Ok(Outcome::Success(value)),
        Err(condition) => {
            let category = condition.category();
            if expected.matches(category) {
                tracing::trace!(?category, "caught expected condition");
                Ok(Outcome::Failure(condition))
            } else {
                tracing::trace!(?category, "propagating unexpected condition");
                Err(condition)
            }
        }
    }
}

/// Runs `thunk` and converts an unwind carrying a `P` into a failure.
///
/// The payload type is the category: a thunk raises with
/// [`std::panic::panic_any`], and only payloads that downcast to `P` are
/// caught. Any other unwind, including ordinary `panic!` messages, is
/// resumed unchanged.
///
/// The process panic hook still runs for caught unwinds, so it may print
/// a message even though the boundary converts the payload.
///
/// ```
/// use no_exceptions::try_unwinding;
///
/// #[derive(Debug, PartialEq)]
/// struct Timeout(u64);
///
/// let outcome = try_unwinding::<Timeout, (), _>(|| std::panic::panic_any(Timeout(30)));
/// assert_eq!(outcome.into_failure(), Some(Timeout(30)));
/// ```
pub fn try_unwinding<P, T, Th>(thunk: Th) -> Outcome<T, P>
where
    P: Any,
    Th: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => match payload.downcast::<P>() {
            Ok(condition) => {
                tracing::trace!(
                    category = std::any::type_name::<P>(),
                    "caught expected unwind"
                );
                Outcome::Failure(*condition)
            }
            Err(payload) => {
                tracing::trace!(
                    category = std::any::type_name::<P>(),
                    "resuming unexpected unwind"
                );
                panic::resume_unwind(payload)
            }
        },
    }
}
