//! Core State trait for transition rule evaluation.
//!
//! A state is the opaque identity the rule table is keyed on. The engine
//! never inspects a state beyond equality, hashing, and its display name.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for states governed by a [`Ruleset`](crate::Ruleset).
///
/// States are immutable identity values. The engine compares them for
/// equality, hashes them as rule-table keys, and renders them in error
/// messages via [`name`](State::name) — nothing more.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into concurrently running guards
/// - `Eq` + `Hash`: states form the components of rule-table keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so host
///   applications can persist them (the engine itself persists nothing)
/// - `Send` + `Sync`: guards evaluating a state may run on other threads
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum OrderState {
///     Pending,
///     Started,
///     Finished,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "pending",
///             Self::Started => "started",
///             Self::Finished => "finished",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display in error messages.
    fn name(&self) -> &str;
}

/// A plain string state, for callers who key states by name rather than
/// defining an enum.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Label, State};
///
/// let pending = Label::new("pending");
/// assert_eq!(pending.name(), "pending");
/// assert_eq!(pending, Label::new("pending"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Create a labeled state from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Label(name.into())
    }
}

impl State for Label {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::new(name)
    }
}
