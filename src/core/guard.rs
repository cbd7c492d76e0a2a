//! Guard predicates protecting state transitions.
//!
//! A guard inspects the (current, goal) pair for an attempted transition
//! and either allows it or reports a denial with a reason. Guards for one
//! transition are evaluated concurrently, so they must be thread-safe and
//! must not depend on any ordering among their siblings.

use super::state::State;
use thiserror::Error;

/// A denial reported by a single guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The subject's current state does not match the transition's
    /// registered origin. Produced by [`Guard::origin`].
    #[error("cannot transition from {from} to {to}")]
    InvalidAttempt { from: String, to: String },

    /// An application guard rejected the transition.
    #[error("{0}")]
    Denied(String),

    /// The guard panicked; the panic is converted into a denial rather
    /// than crashing the evaluation call.
    #[error("guard panicked: {0}")]
    Panicked(String),
}

impl GuardError {
    /// Reject a transition with a human-readable reason.
    pub fn denied(reason: impl Into<String>) -> Self {
        GuardError::Denied(reason.into())
    }
}

/// Verdict returned by a single guard: `Ok(())` to allow, a
/// [`GuardError`] to deny.
pub type GuardResult = Result<(), GuardError>;

/// Predicate deciding whether a specific transition attempt is allowed.
///
/// Guards receive the current state and the goal state and return a
/// [`GuardResult`]. They run concurrently with the other guards of the
/// same transition and may take non-trivial time (an authorization
/// lookup, say); total evaluation latency is bounded by the slowest
/// guard, not the sum.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Guard, GuardError, Label};
///
/// let no_skipping = Guard::new(|current: &Label, _goal: &Label| {
///     if current == &Label::new("pending") {
///         Ok(())
///     } else {
///         Err(GuardError::denied("only pending orders may start"))
///     }
/// });
///
/// assert!(no_skipping.check(&Label::new("pending"), &Label::new("started")).is_ok());
/// assert!(no_skipping.check(&Label::new("finished"), &Label::new("started")).is_err());
/// ```
pub struct Guard<S: State> {
    check: Box<dyn Fn(&S, &S) -> GuardResult + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a predicate over (current, goal).
    ///
    /// The predicate must be thread-safe (`Send + Sync`): it will be
    /// invoked from a worker thread during concurrent evaluation.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&S, &S) -> GuardResult + Send + Sync + 'static,
    {
        Guard {
            check: Box::new(check),
        }
    }

    /// The synthesized default guard for a registered transition: allows
    /// the attempt only when the current state equals `origin`.
    ///
    /// This is what makes "is this transition legal from here" hold; a
    /// transition registered without it (or an equivalent custom guard)
    /// passes from any state.
    pub fn origin(origin: S) -> Self
    where
        S: 'static,
    {
        Guard::new(move |current: &S, goal: &S| {
            if *current == origin {
                Ok(())
            } else {
                Err(GuardError::InvalidAttempt {
                    from: current.name().to_string(),
                    to: goal.name().to_string(),
                })
            }
        })
    }

    /// Evaluate this guard for a transition attempt.
    pub fn check(&self, current: &S, goal: &S) -> GuardResult {
        (self.check)(current, goal)
    }
}
