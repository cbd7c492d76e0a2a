//! The transition executor: a rule table bound to a current state.

use crate::core::State;
use crate::rules::{Ruleset, TransitionError};
use std::sync::Arc;

/// Pairing of a [`Ruleset`] and a subject's current state.
///
/// The machine is a sequential wrapper around one evaluation call per
/// attempt: it reads the current state, asks the ruleset whether the move
/// to the goal is permitted, and commits the goal state only on success.
/// It holds no locks of its own — `&mut self` on
/// [`transition`](Machine::transition) means concurrent attempts on one
/// machine are a compile error, and callers wanting to share a machine
/// across threads add their own synchronization.
///
/// The ruleset is held behind an `Arc`, so one table can drive any number
/// of machines.
///
/// # Example
///
/// ```rust
/// use turnstile::{Label, Machine, Ruleset, Transition};
///
/// let rules = Ruleset::from_transitions([
///     Transition::new(Label::new("pending"), Label::new("started")),
///     Transition::new(Label::new("started"), Label::new("finished")),
/// ]);
///
/// let mut machine = Machine::new(rules, Label::new("pending"));
///
/// assert!(machine.transition(Label::new("finished")).is_err());
/// assert_eq!(machine.state(), &Label::new("pending"));
///
/// machine.transition(Label::new("started")).unwrap();
/// machine.transition(Label::new("finished")).unwrap();
/// assert_eq!(machine.state(), &Label::new("finished"));
/// ```
pub struct Machine<S: State> {
    rules: Arc<Ruleset<S>>,
    state: S,
}

impl<S: State + 'static> Machine<S> {
    /// Bind a rule table to a subject starting in `initial`.
    ///
    /// Accepts either an owned [`Ruleset`] or an `Arc<Ruleset>` shared
    /// with other machines.
    pub fn new(rules: impl Into<Arc<Ruleset<S>>>, initial: S) -> Self {
        Machine {
            rules: rules.into(),
            state: initial,
        }
    }

    /// The subject's current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The rule table this machine evaluates against.
    pub fn rules(&self) -> &Ruleset<S> {
        &self.rules
    }

    /// Attempt to move the subject to the goal state.
    ///
    /// On success the goal becomes the current state. On any failure the
    /// current state is left untouched and the denial is returned
    /// unchanged. There is no retry and no queueing; retrying a denied
    /// attempt is a caller decision.
    pub fn transition(&mut self, goal: S) -> Result<(), TransitionError> {
        self.rules.permitted(&self.state, &goal)?;
        self.state = goal;
        Ok(())
    }

    /// Whether a move to the goal state would currently be permitted,
    /// without committing anything.
    pub fn can_transition(&self, goal: &S) -> bool {
        self.rules.permitted(&self.state, goal).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guard, GuardError, Label, Transition};

    fn label(s: &str) -> Label {
        Label::new(s)
    }

    fn workflow_rules() -> Ruleset<Label> {
        Ruleset::from_transitions([
            Transition::new(label("pending"), label("started")),
            Transition::new(label("started"), label("finished")),
        ])
    }

    #[test]
    fn walks_the_registered_workflow() {
        let mut machine = Machine::new(workflow_rules(), label("pending"));

        // No direct pending -> finished rule.
        assert!(machine.transition(label("finished")).is_err());
        assert_eq!(machine.state(), &label("pending"));

        machine.transition(label("started")).unwrap();
        assert_eq!(machine.state(), &label("started"));

        // Self transition has no entry of its own.
        assert!(machine.transition(label("started")).is_err());
        assert_eq!(machine.state(), &label("started"));

        machine.transition(label("finished")).unwrap();
        assert_eq!(machine.state(), &label("finished"));
    }

    #[test]
    fn denial_leaves_state_untouched() {
        let mut rules = Ruleset::new();
        rules.add_rule(
            Transition::new(label("pending"), label("started")),
            Guard::new(|_: &Label, _: &Label| Err(GuardError::denied("not yet"))),
        );

        let mut machine = Machine::new(rules, label("pending"));
        let verdict = machine.transition(label("started"));

        assert_eq!(
            verdict.unwrap_err().guard_error(),
            Some(&GuardError::denied("not yet"))
        );
        assert_eq!(machine.state(), &label("pending"));
    }

    #[test]
    fn unregistered_goal_is_rejected() {
        let mut machine = Machine::new(workflow_rules(), label("pending"));

        assert_eq!(
            machine.transition(label("cancelled")),
            Err(TransitionError::NoRule {
                from: "pending".to_string(),
                to: "cancelled".to_string(),
            })
        );
        assert_eq!(machine.state(), &label("pending"));
    }

    #[test]
    fn can_transition_does_not_commit() {
        let machine = Machine::new(workflow_rules(), label("pending"));

        assert!(machine.can_transition(&label("started")));
        assert!(!machine.can_transition(&label("finished")));
        assert_eq!(machine.state(), &label("pending"));
    }

    #[test]
    fn machines_share_one_ruleset() {
        let rules = Arc::new(workflow_rules());

        let mut first = Machine::new(Arc::clone(&rules), label("pending"));
        let mut second = Machine::new(rules, label("pending"));

        first.transition(label("started")).unwrap();
        assert_eq!(first.state(), &label("started"));
        assert_eq!(second.state(), &label("pending"));

        second.transition(label("started")).unwrap();
        assert_eq!(second.state(), &label("started"));
    }
}
