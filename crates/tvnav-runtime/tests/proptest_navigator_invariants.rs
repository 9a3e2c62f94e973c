//! Property-based invariant tests for the focus navigator.
//!
//! Verifies:
//! 1. Focus and memory stay inside the grid across inputs, taps, and reloads
//! 2. Every scroll request targets the focus that was current right after it
//! 3. Edge moves never produce a scroll request
//! 4. Input before initialization never assigns focus

use proptest::prelude::*;
use tvnav_core::{GridModel, NavInput};
use tvnav_runtime::{FocusNavigator, NavSimulator, RecordingAdapter};

#[derive(Debug, Clone)]
enum Step {
    Input(NavInput),
    Tap(usize, usize),
    Reload(Vec<usize>),
    Search,
}

fn arb_input() -> impl Strategy<Value = NavInput> {
    prop_oneof![
        4 => Just(NavInput::Up),
        4 => Just(NavInput::Down),
        4 => Just(NavInput::Left),
        4 => Just(NavInput::Right),
        1 => Just(NavInput::Select),
        1 => Just(NavInput::Back),
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        12 => arb_input().prop_map(Step::Input),
        2 => (0usize..6, 0usize..12).prop_map(|(r, c)| Step::Tap(r, c)),
        1 => prop::collection::vec(0usize..10, 0..5).prop_map(Step::Reload),
        1 => Just(Step::Search),
    ]
}

fn assert_in_bounds(nav: &FocusNavigator<RecordingAdapter>) -> Result<(), TestCaseError> {
    let grid = nav.grid();
    if let Some(cell) = nav.focus() {
        prop_assert!(grid.contains(cell), "focus {cell} outside {:?}", grid.row_lengths());
    }
    let mut reconciled = nav.memory().clone();
    reconciled.reconcile(grid);
    prop_assert_eq!(&reconciled, nav.memory(), "stored columns outside {:?}", grid.row_lengths());
    Ok(())
}

proptest! {
    #[test]
    fn navigator_state_stays_in_bounds(
        rows in prop::collection::vec(0usize..10, 1..5),
        steps in prop::collection::vec(arb_step(), 0..80),
    ) {
        let mut nav = FocusNavigator::new(GridModel::from_row_lengths(rows), RecordingAdapter::new());
        nav.initialize();
        for step in steps {
            match step {
                Step::Input(input) => { nav.handle_input(input); }
                Step::Tap(r, c) => { nav.select_direct(r, c); }
                Step::Reload(lengths) => { nav.replace_grid(GridModel::from_row_lengths(lengths)); }
                Step::Search => { nav.focus_search(); }
            }
            assert_in_bounds(&nav)?;
        }
    }

    #[test]
    fn last_scroll_request_matches_focus(
        items in 1usize..10,
        inputs in prop::collection::vec(arb_input(), 1..40),
    ) {
        let mut sim = NavSimulator::new(GridModel::uniform(3, items));
        sim.init();
        sim.inject_all(&inputs);
        let last = sim.scroll_requests().last().map(|r| r.target);
        prop_assert_eq!(last, sim.focus());
    }

    #[test]
    fn scroll_requests_only_on_change(
        items in 1usize..10,
        inputs in prop::collection::vec(arb_input(), 0..40),
    ) {
        let mut sim = NavSimulator::new(GridModel::uniform(3, items));
        sim.init();
        sim.inject_all(&inputs);
        for request in sim.scroll_requests() {
            prop_assert_ne!(request.previous, Some(request.target));
        }
    }

    #[test]
    fn uninitialized_input_never_focuses(
        inputs in prop::collection::vec(arb_input(), 0..40),
    ) {
        let mut sim = NavSimulator::new(GridModel::uniform(3, 5));
        sim.inject_all(&inputs);
        prop_assert_eq!(sim.focus(), None);
        prop_assert!(sim.scroll_requests().is_empty());
    }
}
