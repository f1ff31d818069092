//! Incremental domain-consistency maintenance.
//!
//! Each user-editable cell alternates between two states: empty with a
//! candidate domain, and assigned. [`assign`] moves a cell to the assigned
//! state and forward-checks by removing the value from the domain of every
//! cell in the affected row, column, and box. [`retract`] moves it back and
//! re-admits the value, but never blindly: a value goes back into a cell's
//! domain only when a fresh scan of that cell's peers finds no current
//! assignment of it — another assignment made since the removal may still
//! forbid it.
//!
//! The legality re-scan is recomputed from the live grid on every
//! retraction rather than reference-counted per candidate slot. At ≤20
//! peers per cell the quadratic scan is a handful of comparisons, and it is
//! correct by construction against whatever the board looks like now.
//!
//! Forward checking is all this engine does: it never inspects whether a
//! removal leaves a domain empty. An empty domain marks an unsatisfiable
//! branch that the user, not the engine, backs out of.

use pencilmark_core::{Digit, Position};

use crate::grid_state::GridState;

/// Result of a propagator operation.
///
/// Every violated precondition resolves to [`NoOp`](Self::NoOp) with the
/// grid untouched; no operation raises an error. Tests assert "state
/// unchanged" against this instead of catching failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Outcome {
    /// A value was assigned and stripped from the affected domains.
    #[display("assigned")]
    Assigned,
    /// An assigned value was cleared and re-admitted where legal.
    #[display("retracted")]
    Retracted,
    /// The request violated a precondition; the grid is unchanged.
    #[display("no-op")]
    NoOp,
}

/// Assigns `digit` at `pos` and strips it from the affected domains.
///
/// Silent no-op when `pos` is a given cell, already holds a *different*
/// value, or `digit` is not a current member of its domain. Assigning the
/// value the cell already holds toggles it off by delegating to [`retract`].
pub fn assign(grid: &mut GridState, pos: Position, digit: Digit) -> Outcome {
    if grid.is_given(pos) {
        return Outcome::NoOp;
    }
    match grid.value_at(pos) {
        Some(current) if current == digit => return retract(grid, pos),
        Some(_) => return Outcome::NoOp,
        None => {}
    }
    // The cell variable refuses values outside its current domain.
    if !grid.try_set_value(pos, digit) {
        return Outcome::NoOp;
    }

    log::debug!("assign {digit} at {pos}");
    strip_affected_domains(grid, pos, digit);
    Outcome::Assigned
}

/// Clears the assigned value at `pos` and re-admits it where legal.
///
/// Silent no-op when `pos` is a given cell or currently empty. The cleared
/// value is restored to the cell itself and to each of its peers only where
/// [`can_restore`] holds against the current grid.
pub fn retract(grid: &mut GridState, pos: Position) -> Outcome {
    if grid.is_given(pos) {
        return Outcome::NoOp;
    }
    let Some(digit) = grid.value_at(pos) else {
        return Outcome::NoOp;
    };

    log::debug!("retract {digit} at {pos}");
    grid.clear_value(pos);
    restore_affected_domains(grid, pos, digit);
    Outcome::Retracted
}

/// Applies a digit keypress at `pos`.
///
/// If the cell already holds `digit`, it is retracted; if it holds a
/// different value, nothing happens (the user must retract first); if it is
/// empty and `digit` is a legal candidate, it is assigned. This is exactly
/// the precondition set of [`assign`], which it delegates to.
pub fn toggle(grid: &mut GridState, pos: Position, digit: Digit) -> Outcome {
    assign(grid, pos, digit)
}

/// Removes `digit` from the domain of `pos` and of every peer of `pos`.
///
/// Also used by [`GridState::from_givens`] to establish the initial
/// domains. Removal is idempotent, so overlapping strips are harmless.
pub(crate) fn strip_affected_domains(grid: &mut GridState, pos: Position, digit: Digit) {
    grid.domain_mut(pos).remove(digit);
    for peer in pos.house_peers() {
        grid.domain_mut(peer).remove(digit);
    }
}

/// Re-admits `digit` to the domain of `pos` and of every peer of `pos`,
/// each only where re-admission is legal against the current grid.
fn restore_affected_domains(grid: &mut GridState, pos: Position, digit: Digit) {
    if can_restore(grid, pos, digit) {
        grid.domain_mut(pos).insert(digit);
    }
    for peer in pos.house_peers() {
        if can_restore(grid, peer, digit) {
            grid.domain_mut(peer).insert(digit);
        }
    }
}

/// Returns whether `digit` is legal at `pos`: no peer of `pos` is currently
/// assigned `digit`.
fn can_restore(grid: &GridState, pos: Position, digit: Digit) -> bool {
    pos.house_peers()
        .iter()
        .all(|&peer| grid.value_at(peer) != Some(digit))
}

#[cfg(test)]
mod tests {
    use pencilmark_core::DigitDomain;
    use proptest::prelude::*;

    use super::*;

    /// Checks the two grid invariants against a from-scratch recomputation:
    /// an empty cell's domain holds exactly the values unassigned among its
    /// peers, and no two peers share an assigned value.
    fn check_invariants(grid: &GridState) {
        for pos in Position::ALL {
            match grid.value_at(pos) {
                Some(digit) => {
                    for peer in pos.house_peers() {
                        assert_ne!(
                            grid.value_at(peer),
                            Some(digit),
                            "peers {pos} and {peer} both hold {digit}"
                        );
                    }
                }
                None => {
                    let mut expected = DigitDomain::FULL;
                    for peer in pos.house_peers() {
                        if let Some(digit) = grid.value_at(peer) {
                            expected.remove(digit);
                        }
                    }
                    assert_eq!(
                        grid.domain_at(pos),
                        expected,
                        "domain at {pos} out of sync with peer assignments"
                    );
                }
            }
        }
    }

    #[test]
    fn test_assign_strips_affected_domains() {
        let mut grid = GridState::empty();
        let pos = Position::new(4, 4);

        assert_eq!(assign(&mut grid, pos, Digit::D3), Outcome::Assigned);
        assert_eq!(grid.value_at(pos), Some(Digit::D3));
        for peer in pos.house_peers() {
            assert!(!grid.domain_at(peer).contains(Digit::D3));
        }
        check_invariants(&grid);
    }

    #[test]
    fn test_assign_same_value_toggles_off() {
        let mut grid = GridState::empty();
        let pos = Position::new(2, 7);

        assert_eq!(assign(&mut grid, pos, Digit::D8), Outcome::Assigned);
        assert_eq!(assign(&mut grid, pos, Digit::D8), Outcome::Retracted);
        assert_eq!(grid, GridState::empty());
    }

    #[test]
    fn test_assign_over_different_value_is_noop() {
        let mut grid = GridState::empty();
        let pos = Position::new(0, 0);

        assign(&mut grid, pos, Digit::D5);
        let before = grid.clone();

        assert_eq!(assign(&mut grid, pos, Digit::D3), Outcome::NoOp);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_assign_excluded_value_is_noop() {
        let mut grid = GridState::empty();
        assign(&mut grid, Position::new(0, 0), Digit::D5);
        let before = grid.clone();

        // 5 was stripped from the rest of row 0.
        assert_eq!(
            assign(&mut grid, Position::new(1, 0), Digit::D5),
            Outcome::NoOp
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_given_cells_are_immutable() {
        let pos = Position::new(3, 3);
        let mut grid = GridState::from_givens([(pos, Digit::D6)]);
        let before = grid.clone();

        assert_eq!(assign(&mut grid, pos, Digit::D2), Outcome::NoOp);
        assert_eq!(assign(&mut grid, pos, Digit::D6), Outcome::NoOp);
        assert_eq!(retract(&mut grid, pos), Outcome::NoOp);
        assert_eq!(toggle(&mut grid, pos, Digit::D6), Outcome::NoOp);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_retract_empty_cell_is_noop() {
        let mut grid = GridState::empty();
        assert_eq!(retract(&mut grid, Position::new(5, 5)), Outcome::NoOp);
        assert_eq!(grid, GridState::empty());
    }

    #[test]
    fn test_retract_restores_domains() {
        let mut grid = GridState::empty();
        let pos = Position::new(4, 4);

        assign(&mut grid, pos, Digit::D3);
        assert_eq!(retract(&mut grid, pos), Outcome::Retracted);
        assert_eq!(grid, GridState::empty());
    }

    #[test]
    fn test_retract_respects_remaining_constraints() {
        // (0,0) and (3,3) share no house, but (3,0) and (0,3) are peers of
        // both. After retracting (0,0), 5 must come back everywhere in its
        // houses except where (3,3) still forbids it.
        let mut grid = GridState::empty();
        let a = Position::new(0, 0);
        let b = Position::new(3, 3);

        assert_eq!(assign(&mut grid, a, Digit::D5), Outcome::Assigned);
        assert_eq!(assign(&mut grid, b, Digit::D5), Outcome::Assigned);
        assert_eq!(retract(&mut grid, a), Outcome::Retracted);

        assert!(grid.domain_at(a).contains(Digit::D5));
        for peer in a.house_peers() {
            let still_forbidden = peer.is_peer_of(b);
            assert_eq!(
                !grid.domain_at(peer).contains(Digit::D5),
                still_forbidden,
                "wrong restore decision at {peer}"
            );
        }
        assert!(!grid.domain_at(Position::new(3, 0)).contains(Digit::D5));
        assert!(!grid.domain_at(Position::new(0, 3)).contains(Digit::D5));
        check_invariants(&grid);
    }

    #[test]
    fn test_full_row_assign_and_retract_round_trip() {
        let mut grid = GridState::empty();
        for (x, digit) in (0..9).zip(Digit::ALL) {
            assert_eq!(
                assign(&mut grid, Position::new(x, 0), digit),
                Outcome::Assigned
            );
            check_invariants(&grid);
        }

        // Every row-0 cell saw all nine values stripped by its row peers.
        for x in 0..9 {
            assert!(grid.domain_at(Position::new(x, 0)).is_empty());
        }

        // Every cell below row 0 lost the candidate assigned in its column.
        for (x, digit) in (0..9).zip(Digit::ALL) {
            for y in 1..9 {
                assert!(!grid.domain_at(Position::new(x, y)).contains(digit));
            }
        }

        for x in 0..9 {
            assert_eq!(retract(&mut grid, Position::new(x, 0)), Outcome::Retracted);
            check_invariants(&grid);
        }
        assert_eq!(grid, GridState::empty());
    }

    #[test]
    fn test_domain_may_become_empty_without_failure() {
        // Cover all nine values among the peers of (0,0).
        let mut grid = GridState::empty();
        for (x, digit) in (1..9).zip(Digit::ALL) {
            assert_eq!(
                assign(&mut grid, Position::new(x, 0), digit),
                Outcome::Assigned
            );
        }
        assert_eq!(
            assign(&mut grid, Position::new(0, 1), Digit::D9),
            Outcome::Assigned
        );

        let dead = Position::new(0, 0);
        assert!(grid.domain_at(dead).is_empty());
        check_invariants(&grid);

        // Nothing can be assigned there, but nothing fails either.
        for digit in Digit::ALL {
            assert!(assign(&mut grid, dead, digit).is_no_op());
        }
    }

    #[test]
    fn test_toggle_sequence() {
        let mut grid = GridState::empty();
        let pos = Position::new(6, 2);

        assert!(toggle(&mut grid, pos, Digit::D4).is_assigned());
        assert!(toggle(&mut grid, pos, Digit::D7).is_no_op());
        assert!(toggle(&mut grid, pos, Digit::D4).is_retracted());
        assert_eq!(grid, GridState::empty());
    }

    fn arbitrary_ops(max: usize) -> impl Strategy<Value = Vec<(usize, u8)>> {
        prop::collection::vec((0usize..81, 1u8..=9), 0..max)
    }

    fn replay(ops: &[(usize, u8)]) -> GridState {
        let mut grid = GridState::empty();
        for &(cell, value) in ops {
            let _ = toggle(&mut grid, Position::ALL[cell], Digit::from_value(value));
        }
        grid
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_after_every_operation(ops in arbitrary_ops(80)) {
            let mut grid = GridState::empty();
            for (cell, value) in ops {
                let _ = toggle(&mut grid, Position::ALL[cell], Digit::from_value(value));
                check_invariants(&grid);
            }
        }

        #[test]
        fn prop_assign_retract_restores_reachable_state(
            ops in arbitrary_ops(40),
            probe in (0usize..81, 1u8..=9u8),
        ) {
            let mut grid = replay(&ops);
            let pos = Position::ALL[probe.0];
            let digit = Digit::from_value(probe.1);
            prop_assume!(
                grid.value_at(pos).is_none() && grid.domain_at(pos).contains(digit)
            );

            let before = grid.clone();
            prop_assert_eq!(assign(&mut grid, pos, digit), Outcome::Assigned);
            prop_assert_eq!(retract(&mut grid, pos), Outcome::Retracted);
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn prop_illegal_requests_leave_grid_untouched(
            ops in arbitrary_ops(40),
            probe in (0usize..81, 1u8..=9u8),
        ) {
            let mut grid = replay(&ops);
            let pos = Position::ALL[probe.0];
            let digit = Digit::from_value(probe.1);

            let before = grid.clone();
            let assigned_other = matches!(grid.value_at(pos), Some(v) if v != digit);
            let excluded = grid.value_at(pos).is_none() && !grid.domain_at(pos).contains(digit);
            prop_assume!(assigned_other || excluded);

            prop_assert_eq!(assign(&mut grid, pos, digit), Outcome::NoOp);
            prop_assert_eq!(grid, before);
        }
    }
}
