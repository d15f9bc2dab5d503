use super::*;

#[test]
fn default_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggled_flips_between_states() {
    assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
    assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
}

#[test]
fn toggle_parity_from_closed() {
    let mut state = MenuState::Closed;
    for n in 1..=6 {
        state = state.toggled();
        assert_eq!(state.is_open(), n % 2 == 1, "after {n} toggles");
    }
}
