//! Transition keys for the rule table.

use super::state::State;
use serde::{Deserialize, Serialize};

/// An ordered (origin, destination) pair naming an allowed state change.
///
/// A transition is purely a lookup key: two transitions are equal iff both
/// components are equal, and registering guards under a transition makes
/// exactly that origin/destination pair addressable.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Label, State, Transition};
///
/// let t = Transition::new(Label::new("pending"), Label::new("started"));
/// assert_eq!(t.from().name(), "pending");
/// assert_eq!(t.to().name(), "started");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    from: S,
    to: S,
}

impl<S: State> Transition<S> {
    /// Create a transition from an origin state to a destination state.
    pub fn new(from: S, to: S) -> Self {
        Transition { from, to }
    }

    /// The origin state of this transition.
    pub fn from(&self) -> &S {
        &self.from
    }

    /// The destination state of this transition.
    pub fn to(&self) -> &S {
        &self.to
    }
}
