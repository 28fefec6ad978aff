//! The outcome of a fallible operation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Either the success value of an operation or the failure it raised.
///
/// An `Outcome` is built directly from a known value or produced by a
/// capture boundary such as [`crate::try_expecting`]. It is never mutated;
/// every combinator consumes it and returns a fresh value.
///
/// # Examples
///
/// ```
/// use no_exceptions::{ops, try_expecting, FaultKind};
///
/// let halved = try_expecting(|| ops::divide(10.0, 2.0), FaultKind::ZeroDivision)?;
/// assert!(halved.is_success());
/// assert_eq!(halved.unwrap(), 5.0);
/// # Ok::<(), no_exceptions::Fault>(())
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<S, F> {
    /// The operation returned normally.
    Success(S),

    /// The operation raised an expected condition.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Wraps a known value as a success.
    pub fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Wraps a failure payload.
    pub fn failure(failure: F) -> Self {
        Outcome::Failure(failure)
    }

    /// Returns `true` if the outcome is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Extracts the success value, panicking on a failure.
    ///
    /// Unwrapping a failure is misuse, not a domain error, so it is never
    /// turned into a value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure`, with the failure payload in the
    /// message.
    #[allow(clippy::panic)]
    #[track_caller]
    pub fn unwrap(self) -> S
    where
        F: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(failure) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {failure:?}")
            }
        }
    }

    /// Extracts the failure payload, panicking on a success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`.
    #[allow(clippy::panic)]
    #[track_caller]
    pub fn unwrap_failure(self) -> F
    where
        S: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value: {value:?}")
            }
            Outcome::Failure(failure) => failure,
        }
    }

    /// Returns the success value, or `default` on a failure.
    ///
    /// ```
    /// use no_exceptions::{ops, try_expecting, FaultKind};
    ///
    /// let value = try_expecting(|| ops::divide(10.0, 0.0), FaultKind::ZeroDivision)?
    ///     .unwrap_or(0.0);
    /// assert_eq!(value, 0.0);
    /// # Ok::<(), no_exceptions::Fault>(())
    /// ```
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure payload.
    pub fn unwrap_or_else<G>(self, fallback: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(failure) => fallback(failure),
        }
    }

    /// Transforms the success value, leaving a failure untouched.
    ///
    /// `f` is not called on a failure.
    pub fn map<T, G>(self, f: G) -> Outcome<T, F>
    where
        G: FnOnce(S) -> T,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the failure payload, leaving a success untouched.
    pub fn map_failure<E, G>(self, f: G) -> Outcome<S, E>
    where
        G: FnOnce(F) -> E,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => Outcome::Failure(f(failure)),
        }
    }

    /// Chains a further fallible step onto a success.
    ///
    /// On a failure, `f` is skipped and the failure is returned as is.
    ///
    /// ```
    /// use no_exceptions::{ops, Outcome};
    ///
    /// let reciprocal = |x: f64| Outcome::from(ops::divide(1.0, x));
    /// assert_eq!(Outcome::success(4.0).and_then(reciprocal), Outcome::Success(0.25));
    /// assert!(Outcome::success(0.0).and_then(reciprocal).is_failure());
    /// ```
    pub fn and_then<T, G>(self, f: G) -> Outcome<T, F>
    where
        G: FnOnce(S) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Splits the outcome into a success flag and the success value, if any.
    pub fn unpack(self) -> (bool, Option<S>) {
        match self {
            Outcome::Success(value) => (true, Some(value)),
            Outcome::Failure(_) => (false, None),
        }
    }

    /// Converts into the success value, discarding a failure.
    pub fn into_success(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts into the failure payload, discarding a success.
    pub fn into_failure(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Borrows both payloads.
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(failure) => Outcome::Failure(failure),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Fallible operation result: {value}"),
            Outcome::Failure(failure) => write!(f, "Fallible operation result: {failure}"),
        }
    }
}
