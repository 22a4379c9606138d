//! Recording probe for dispatch tests.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One recorded invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    /// The predicate of the branch at this index ran.
    Predicate(usize),
    /// The action of the branch at this index ran.
    Action(usize),
    /// The default action ran.
    Default,
}

impl Call {
    /// Returns true for action and default calls.
    pub fn is_action(&self) -> bool {
        matches!(self, Call::Action(_) | Call::Default)
    }
}

/// Error returned by the probe's failing closures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeError(pub &'static str);

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "probe failure: {}", self.0)
    }
}

impl std::error::Error for ProbeError {}

/// Hands out closures that log each call into a shared, ordered journal.
///
/// Every closure holds a clone of the journal handle, so
/// [`Probe::handle_count`] tells how many closures are still alive.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    journal: Rc<RefCell<Vec<Call>>>,
}

impl Probe {
    /// Creates an empty probe.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(journal: &Rc<RefCell<Vec<Call>>>, call: Call) {
        journal.borrow_mut().push(call);
    }

    /// A predicate that records its call and returns `outcome`.
    pub fn predicate<T>(&self, index: usize, outcome: bool) -> impl Fn(&T) -> bool {
        let journal = Rc::clone(&self.journal);
        move |_: &T| {
            Self::record(&journal, Call::Predicate(index));
            outcome
        }
    }

    /// A predicate that records its call and delegates to `test`.
    pub fn predicate_with<T, F>(&self, index: usize, test: F) -> impl Fn(&T) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let journal = Rc::clone(&self.journal);
        move |value: &T| {
            Self::record(&journal, Call::Predicate(index));
            test(value)
        }
    }

    /// A fallible predicate that records its call and returns `outcome`.
    pub fn fallible_predicate<T>(
        &self,
        index: usize,
        outcome: Result<bool, ProbeError>,
    ) -> impl Fn(&T) -> Result<bool, ProbeError> {
        let journal = Rc::clone(&self.journal);
        move |_: &T| {
            Self::record(&journal, Call::Predicate(index));
            outcome.clone()
        }
    }

    /// A predicate that records its call and then panics.
    pub fn panicking_predicate<T>(&self, index: usize) -> impl Fn(&T) -> bool {
        let journal = Rc::clone(&self.journal);
        move |_: &T| -> bool {
            Self::record(&journal, Call::Predicate(index));
            panic!("predicate {} panicked", index)
        }
    }

    /// An action that records its call.
    pub fn action(&self, index: usize) -> impl FnMut() {
        let journal = Rc::clone(&self.journal);
        move || Self::record(&journal, Call::Action(index))
    }

    /// A fallible action that records its call and returns `outcome`.
    pub fn fallible_action(
        &self,
        index: usize,
        outcome: Result<(), ProbeError>,
    ) -> impl FnMut() -> Result<(), ProbeError> {
        let journal = Rc::clone(&self.journal);
        move || {
            Self::record(&journal, Call::Action(index));
            outcome.clone()
        }
    }

    /// A default action that records its call.
    pub fn default_action(&self) -> impl FnMut() {
        let journal = Rc::clone(&self.journal);
        move || Self::record(&journal, Call::Default)
    }

    /// A fallible default action that records its call and returns `outcome`.
    pub fn fallible_default(
        &self,
        outcome: Result<(), ProbeError>,
    ) -> impl FnMut() -> Result<(), ProbeError> {
        let journal = Rc::clone(&self.journal);
        move || {
            Self::record(&journal, Call::Default);
            outcome.clone()
        }
    }

    /// Returns every recorded call in order.
    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().clone()
    }

    /// Returns the indices of predicates that ran, in order.
    pub fn predicates_called(&self) -> Vec<usize> {
        self.journal
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Predicate(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Returns the action and default calls, in order.
    pub fn actions_fired(&self) -> Vec<Call> {
        self.journal
            .borrow()
            .iter()
            .copied()
            .filter(Call::is_action)
            .collect()
    }

    /// Forgets all recorded calls.
    pub fn clear(&self) {
        self.journal.borrow_mut().clear();
    }

    /// Returns how many handles to the journal exist, including this probe.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let probe = Probe::new();
        let p0 = probe.predicate::<i32>(0, false);
        let p1 = probe.predicate::<i32>(1, true);
        let mut a1 = probe.action(1);

        assert!(!p0(&1));
        assert!(p1(&1));
        a1();

        assert_eq!(
            probe.calls(),
            vec![Call::Predicate(0), Call::Predicate(1), Call::Action(1)]
        );
        assert_eq!(probe.predicates_called(), vec![0, 1]);
        assert_eq!(probe.actions_fired(), vec![Call::Action(1)]);
    }

    #[test]
    fn test_handle_count_tracks_closures() {
        let probe = Probe::new();
        assert_eq!(probe.handle_count(), 1);
        let action = probe.action(0);
        assert_eq!(probe.handle_count(), 2);
        drop(action);
        assert_eq!(probe.handle_count(), 1);
    }

    #[test]
    fn test_clear() {
        let probe = Probe::new();
        let mut default = probe.default_action();
        default();
        assert_eq!(probe.calls(), vec![Call::Default]);
        probe.clear();
        assert!(probe.calls().is_empty());
    }
}
