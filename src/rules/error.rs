//! Evaluation errors for transition attempts.

use crate::core::{GuardError, State};
use thiserror::Error;

/// Why a transition attempt was rejected.
///
/// Every failure is returned as a value to the caller of
/// [`Ruleset::permitted`](crate::Ruleset::permitted) or
/// [`Machine::transition`](crate::Machine::transition); nothing is thrown
/// across thread boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The (origin, goal) pair has no entry in the rule table. Categorical
    /// rejection: no guard ever runs.
    #[error("no rules found for {from} to {to}")]
    NoRule { from: String, to: String },

    /// A guard denied the transition. The originating guard's verdict is
    /// carried as the source. An origin check registered under a key
    /// whose origin differs surfaces here as
    /// [`GuardError::InvalidAttempt`]; the stock
    /// [`add_transition`](crate::Ruleset::add_transition) guard always
    /// sees a matching origin, because the exact-key lookup already
    /// guaranteed it.
    #[error("guard failed from {from} to {to}: {source}")]
    GuardFailed {
        from: String,
        to: String,
        source: GuardError,
    },
}

impl TransitionError {
    pub(crate) fn no_rule<S: State>(current: &S, goal: &S) -> Self {
        TransitionError::NoRule {
            from: current.name().to_string(),
            to: goal.name().to_string(),
        }
    }

    pub(crate) fn guard_failed<S: State>(current: &S, goal: &S, source: GuardError) -> Self {
        TransitionError::GuardFailed {
            from: current.name().to_string(),
            to: goal.name().to_string(),
            source,
        }
    }

    /// The guard verdict behind a [`TransitionError::GuardFailed`], if any.
    pub fn guard_error(&self) -> Option<&GuardError> {
        match self {
            TransitionError::GuardFailed { source, .. } => Some(source),
            TransitionError::NoRule { .. } => None,
        }
    }
}
