//! The rule table and its concurrent guard evaluation engine.
//!
//! A [`Ruleset`] maps transitions to guard lists. [`Ruleset::permitted`]
//! is the evaluation engine: it fans the attempted transition's guards
//! out across threads and reports the first denial it receives, or
//! success once every guard has allowed.

pub mod error;

pub use error::TransitionError;

use crate::core::{Guard, GuardError, State, Transition};
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// Registry mapping transitions to the guards that must all pass.
///
/// A transition absent from the table is categorically not permitted; no
/// guard outcome can change that. Build the table fully before sharing it
/// for evaluation: mutation takes `&mut self`, so the borrow checker
/// rules out adding rules while another thread evaluates. Share a
/// finished table across machines with `Arc<Ruleset<S>>`.
///
/// # Example
///
/// ```rust
/// use turnstile::{Label, Ruleset, Transition};
///
/// let rules = Ruleset::from_transitions([
///     Transition::new(Label::new("pending"), Label::new("started")),
///     Transition::new(Label::new("started"), Label::new("finished")),
/// ]);
///
/// assert!(rules.permitted(&Label::new("pending"), &Label::new("started")).is_ok());
/// assert!(rules.permitted(&Label::new("pending"), &Label::new("finished")).is_err());
/// ```
pub struct Ruleset<S: State> {
    rules: HashMap<Transition<S>, Vec<Arc<Guard<S>>>>,
}

impl<S: State + 'static> Ruleset<S> {
    /// Create an empty rule table.
    pub fn new() -> Self {
        Ruleset {
            rules: HashMap::new(),
        }
    }

    /// Establish a rule table from a list of transitions, each registered
    /// with the synthesized origin guard (see [`Ruleset::add_transition`]).
    ///
    /// This eases initialization when the table is stored inside another
    /// structure.
    pub fn from_transitions(transitions: impl IntoIterator<Item = Transition<S>>) -> Self {
        let mut rules = Ruleset::new();
        for transition in transitions {
            rules.add_transition(transition);
        }
        rules
    }

    /// Append a guard to the transition's guard list, creating the list
    /// if absent.
    ///
    /// Guards are not deduplicated: adding the same guard twice doubles
    /// its evaluation cost.
    pub fn add_rule(&mut self, transition: Transition<S>, guard: Guard<S>) {
        self.rules
            .entry(transition)
            .or_default()
            .push(Arc::new(guard));
    }

    /// Append several guards to the transition's guard list.
    ///
    /// The entry is created even when `guards` is empty. A registered
    /// transition with zero guards passes from ANY current state — pair
    /// this with [`Ruleset::add_transition`] or a custom origin check
    /// unless that is what you want.
    pub fn add_rules(
        &mut self,
        transition: Transition<S>,
        guards: impl IntoIterator<Item = Guard<S>>,
    ) {
        let entry = self.rules.entry(transition).or_default();
        entry.extend(guards.into_iter().map(Arc::new));
    }

    /// Register a transition guarded by the synthesized origin guard,
    /// which allows the attempt only when the subject's current state
    /// equals the transition's origin.
    pub fn add_transition(&mut self, transition: Transition<S>) {
        let origin = transition.from().clone();
        self.add_rule(transition, Guard::origin(origin));
    }

    /// Whether the table has an entry for this transition.
    pub fn contains(&self, transition: &Transition<S>) -> bool {
        self.rules.contains_key(transition)
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no registered transitions.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decide whether moving from `current` to `goal` is permitted.
    ///
    /// An unregistered transition fails with [`TransitionError::NoRule`]
    /// without spawning any work. Otherwise every guard registered for
    /// the transition runs on its own thread with the same
    /// (current, goal) inputs, and the call blocks until it can decide:
    /// the first denial received wins and is returned at once, without
    /// waiting for slower guards; success requires every guard to allow.
    ///
    /// Guards that are still running when a denial decides the outcome
    /// are not cancelled — their verdicts are discarded, and any side
    /// effects they have may be observed after the decision. A guard
    /// that panics counts as a denial ([`GuardError::Panicked`]); it
    /// never crashes the evaluating call.
    ///
    /// There is no built-in timeout. A guard that never returns blocks
    /// the call unless a sibling denies first; callers wanting bounded
    /// latency must impose a deadline externally and treat expiry as a
    /// denial.
    pub fn permitted(&self, current: &S, goal: &S) -> Result<(), TransitionError> {
        let attempt = Transition::new(current.clone(), goal.clone());

        let Some(guards) = self.rules.get(&attempt) else {
            return Err(TransitionError::no_rule(current, goal));
        };

        let (tx, rx) = mpsc::channel();
        for guard in guards {
            let guard = Arc::clone(guard);
            let tx = tx.clone();
            let current = current.clone();
            let goal = goal.clone();

            thread::spawn(move || {
                let verdict = panic::catch_unwind(AssertUnwindSafe(|| {
                    guard.check(&current, &goal)
                }))
                .unwrap_or_else(|payload| Err(GuardError::Panicked(panic_message(payload))));

                // Late verdicts after an early decision find the receiver
                // gone; the failed send is discarded.
                let _ = tx.send(verdict);
            });
        }
        drop(tx);

        let mut outstanding = guards.len();
        for verdict in rx {
            match verdict {
                Ok(()) => {
                    outstanding -= 1;
                    if outstanding == 0 {
                        break;
                    }
                }
                Err(guard_err) => {
                    return Err(TransitionError::guard_failed(current, goal, guard_err));
                }
            }
        }

        Ok(())
    }
}

impl<S: State + 'static> Default for Ruleset<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
