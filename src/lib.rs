//! Turnstile: a guarded state-transition engine
//!
//! Turnstile decides whether a subject may move from its current state to
//! a requested goal state. Permitted moves are declared as a table of
//! (origin, destination) transitions, each protected by one or more
//! guards — predicates over the (current, goal) pair that allow or deny
//! the attempt with a reason.
//!
//! Guards for a transition are evaluated concurrently, one unit of work
//! per guard, with first-failure-wins semantics: the first denial decides
//! the outcome immediately, so total latency is bounded by the slowest
//! guard rather than the sum. Guards are expected to sometimes perform
//! slow external checks (authorization lookups, say), which is what the
//! concurrent dispatch is for.
//!
//! # Core Concepts
//!
//! - **State**: an opaque, equality-comparable identity (the [`State`]
//!   trait, the [`Label`] string state, or the [`state_enum!`] macro)
//! - **Transition**: an ordered (origin, destination) lookup key
//! - **Guard**: a predicate deciding whether a specific attempt is allowed
//! - **Ruleset**: the registry mapping transitions to their guards, with
//!   the concurrent evaluation engine behind [`Ruleset::permitted`]
//! - **Machine**: a ruleset bound to a current state, committing the goal
//!   state only when evaluation succeeds
//!
//! # Example
//!
//! ```rust
//! use turnstile::{Guard, GuardError, Label, Machine, Ruleset, Transition};
//!
//! let mut rules = Ruleset::from_transitions([
//!     Transition::new(Label::new("pending"), Label::new("started")),
//!     Transition::new(Label::new("started"), Label::new("finished")),
//! ]);
//!
//! // Finishing additionally requires captured payment.
//! let payment_captured = true;
//! rules.add_rule(
//!     Transition::new(Label::new("started"), Label::new("finished")),
//!     Guard::new(move |_current: &Label, _goal: &Label| {
//!         if payment_captured {
//!             Ok(())
//!         } else {
//!             Err(GuardError::denied("payment not captured"))
//!         }
//!     }),
//! );
//!
//! let mut order = Machine::new(rules, Label::new("pending"));
//! assert!(order.transition(Label::new("finished")).is_err());
//! order.transition(Label::new("started")).unwrap();
//! order.transition(Label::new("finished")).unwrap();
//! assert_eq!(order.state(), &Label::new("finished"));
//! ```

pub mod core;
pub mod machine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Guard, GuardError, GuardResult, Label, State, Transition};
pub use machine::Machine;
pub use rules::{Ruleset, TransitionError};
