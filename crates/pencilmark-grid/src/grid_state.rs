//! The 9×9 board: assigned values, candidate domains, and given flags.

use std::fmt::{self, Display, Write as _};

use pencilmark_core::{CellVar, Digit, DigitDomain, Position, digit_domain::DigitSemantics};

use crate::propagator;

/// The complete state of a board session.
///
/// Holds, per cell, the assigned value (if any), the candidate domain, and
/// whether the cell is a given from the original puzzle. Given cells are
/// immutable for the lifetime of the grid.
///
/// Values are stored as [`CellVar`]s paired with the cell's domain, so an
/// assignment is only accepted while the value is a current domain member;
/// the domain may shrink afterwards without re-validating the stored value.
///
/// The public API is read-only: [`value_at`](Self::value_at),
/// [`domain_at`](Self::domain_at), and [`is_given`](Self::is_given) are the
/// queries a renderer pulls after each completed operation. Mutation goes
/// through the [`propagator`] functions exclusively, so observers can never
/// hold a mutation handle.
///
/// A cell's domain is only meaningful while the cell is empty; the domain
/// of an assigned or given cell is bookkeeping the propagator maintains for
/// retraction and is not part of the rendered state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: [CellVar<DigitSemantics>; 81],
    domains: [DigitDomain; 81],
    given: [bool; 81],
}

impl GridState {
    /// Creates a grid with no givens: every cell empty with a full domain.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [CellVar::new(); 81],
            domains: [DigitDomain::FULL; 81],
            given: [false; 81],
        }
    }

    /// Creates a grid from the given cells of a puzzle.
    ///
    /// Each given cell is marked immutable, its value set, and its own
    /// domain emptied. Every other cell starts with the full domain, then
    /// the assignment peer-strip runs for each given, so the invariant
    /// "an empty cell's domain holds exactly the values unassigned among
    /// its peers" is established before any user interaction.
    ///
    /// The given set is not checked for conflicts; validating solvability
    /// is out of scope, and conflicting givens simply narrow domains like
    /// any other assignment.
    #[must_use]
    pub fn from_givens(givens: impl IntoIterator<Item = (Position, Digit)>) -> Self {
        let mut grid = Self::empty();
        for (pos, digit) in givens {
            let i = pos.cell_index();
            // The domain is still full here, so the variable accepts.
            let accepted = grid.cells[i].set_value(&grid.domains[i], digit);
            debug_assert!(accepted);
            grid.given[i] = true;
            grid.domains[i] = DigitDomain::EMPTY;
        }
        for pos in Position::ALL {
            if let Some(digit) = grid.value_at(pos) {
                propagator::strip_affected_domains(&mut grid, pos, digit);
            }
        }
        grid
    }

    /// Returns the assigned value at `pos`, or `None` for an empty cell.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()].value()
    }

    /// Returns the candidate domain at `pos`.
    ///
    /// Meaningful only while the cell is empty.
    #[must_use]
    pub fn domain_at(&self, pos: Position) -> DigitDomain {
        self.domains[pos.cell_index()]
    }

    /// Returns whether the cell at `pos` is a given from the original puzzle.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.given[pos.cell_index()]
    }

    /// Returns the number of cells with an assigned value, givens included.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.cells.iter().filter(|c| c.value().is_some()).count()
    }

    /// Assigns `digit` at `pos` if it is a current member of the cell's
    /// domain, returning whether the assignment was accepted.
    pub(crate) fn try_set_value(&mut self, pos: Position, digit: Digit) -> bool {
        debug_assert!(!self.is_given(pos));
        let i = pos.cell_index();
        let domain = self.domains[i];
        self.cells[i].set_value(&domain, digit)
    }

    pub(crate) fn clear_value(&mut self, pos: Position) {
        debug_assert!(!self.is_given(pos));
        self.cells[pos.cell_index()].unset_value();
    }

    pub(crate) fn domain_mut(&mut self, pos: Position) -> &mut DigitDomain {
        &mut self.domains[pos.cell_index()]
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for GridState {
    /// Renders the assigned values as a bordered grid, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 && y % 3 == 0 {
                f.write_str("------+-------+------\n")?;
            }
            for x in 0..9 {
                if x > 0 {
                    f.write_char(' ')?;
                    if x % 3 == 0 {
                        f.write_str("| ")?;
                    }
                }
                match self.value_at(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('.')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
