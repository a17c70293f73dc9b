//! Property-based invariant tests for the editing lifecycle state machine.
//!
//! These tests verify structural invariants that must hold under any
//! sequence of transitions:
//!
//! 1. Untouched is never re-entered once left.
//! 2. The validation outcome fully determines the post-validation state.
//! 3. Focus-enter is idempotent.
//! 4. `shows_error` holds exactly in the error state.
//! 5. `is_visited` is monotone: once visited, always visited.

use proptest::prelude::*;
use statefield_core::EditingState;

#[derive(Debug, Clone, Copy)]
enum Transition {
    FocusEnter,
    Validate(bool),
    ResetTouched,
}

fn transition_strategy() -> impl Strategy<Value = Transition> {
    prop_oneof![
        Just(Transition::FocusEnter),
        any::<bool>().prop_map(Transition::Validate),
        Just(Transition::ResetTouched),
    ]
}

fn apply(state: EditingState, t: Transition) -> EditingState {
    match t {
        Transition::FocusEnter => state.on_focus_enter(),
        Transition::Validate(passed) => state.on_validation(passed),
        Transition::ResetTouched => state.reset_touched(),
    }
}

proptest! {
    #[test]
    fn untouched_is_never_reentered(script in prop::collection::vec(transition_strategy(), 1..32)) {
        let mut state = EditingState::Untouched;
        let mut left = false;
        for t in script {
            state = apply(state, t);
            if state != EditingState::Untouched {
                left = true;
            }
            if left {
                prop_assert_ne!(state, EditingState::Untouched);
            }
        }
    }

    #[test]
    fn validation_outcome_determines_state(
        script in prop::collection::vec(transition_strategy(), 0..16),
        passed in any::<bool>(),
    ) {
        let state = script
            .into_iter()
            .fold(EditingState::Untouched, apply);
        let expected = if passed { EditingState::Valid } else { EditingState::Error };
        prop_assert_eq!(state.on_validation(passed), expected);
    }

    #[test]
    fn focus_enter_is_idempotent(script in prop::collection::vec(transition_strategy(), 0..16)) {
        let state = script
            .into_iter()
            .fold(EditingState::Untouched, apply);
        let once = state.on_focus_enter();
        prop_assert_eq!(once.on_focus_enter(), once);
    }

    #[test]
    fn shows_error_iff_error_state(script in prop::collection::vec(transition_strategy(), 0..16)) {
        let state = script
            .into_iter()
            .fold(EditingState::Untouched, apply);
        prop_assert_eq!(state.shows_error(), state == EditingState::Error);
    }

    #[test]
    fn visited_is_monotone(script in prop::collection::vec(transition_strategy(), 1..32)) {
        let mut state = EditingState::Untouched;
        let mut visited = false;
        for t in script {
            state = apply(state, t);
            if visited {
                prop_assert!(state.is_visited());
            }
            visited = visited || state.is_visited();
        }
    }
}
