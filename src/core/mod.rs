//! Core vocabulary: states, transition keys, and guard predicates.
//!
//! These are the value types the rule engine is built from. They carry no
//! concurrency of their own; evaluation lives in [`crate::rules`].

pub mod guard;
pub mod macros;
pub mod state;
pub mod transition;

pub use guard::{Guard, GuardError, GuardResult};
pub use state::{Label, State};
pub use transition::Transition;
