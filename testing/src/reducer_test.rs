//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable
//! Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todoflow_core::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Running the test also checks purity for free: the transition is applied
/// twice and both successor states must be structurally equal, and the
/// input state must come out of the reducer untouched.
///
/// # Example
///
/// ```ignore
/// ReducerTest::new(TodoReducer)
///     .given_state(AppState::new())
///     .when_action(Action::ToggleAll { is_completed: true })
///     .then_state(|state| {
///         assert_eq!(state.completed_count(), state.count());
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A>
where
    R: Reducer<State = S, Action = A>,
{
    reducer: R,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
}

impl<R, S, A> ReducerTest<R, S, A>
where
    R: Reducer<State = S, Action = A>,
    S: Clone + PartialEq + std::fmt::Debug,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state or action is not set, if the reducer is not
    /// pure (the input state changed, or two applications disagreed), or if
    /// any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let before = state.clone();
        let next = self.reducer.reduce(&state, &action);
        let again = self.reducer.reduce(&state, &action);

        assert_eq!(state, before, "reducer mutated its input state");
        assert_eq!(next, again, "reducer is not deterministic");

        for assertion in self.state_assertions {
            assertion(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &TestState, action: &TestAction) -> TestState {
            match action {
                TestAction::Increment => TestState {
                    count: state.count + 1,
                },
                TestAction::Decrement => TestState {
                    count: state.count - 1,
                },
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_decrement() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }
}
