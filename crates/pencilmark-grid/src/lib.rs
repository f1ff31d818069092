//! Board state and constraint propagation for the pencilmark engine.
//!
//! [`GridState`] holds the 9×9 matrix of assigned values, the matching
//! matrix of per-cell candidate domains, and the given-cell flags. All
//! mutation flows through the [`propagator`] operations, which keep every
//! empty cell's domain equal to exactly the values not assigned among its
//! peers:
//!
//! - [`propagator::assign`] forward-checks: it strips the new value from
//!   every peer's domain.
//! - [`propagator::retract`] re-admits the value to each affected cell only
//!   after re-scanning that cell's peers against the *current* board, since
//!   other assignments may still forbid it.
//!
//! Invalid requests (given cell, wrong state, excluded value) are silent
//! no-ops reported as [`Outcome::NoOp`], never errors — the caller is a
//! direct-manipulation UI where "nothing happens" is the correct response.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Digit, Position};
//! use pencilmark_grid::{GridState, Outcome, propagator};
//!
//! let mut grid = GridState::empty();
//! let pos = Position::new(0, 0);
//!
//! assert_eq!(propagator::assign(&mut grid, pos, Digit::D5), Outcome::Assigned);
//! assert!(!grid.domain_at(Position::new(8, 0)).contains(Digit::D5));
//!
//! assert_eq!(propagator::retract(&mut grid, pos), Outcome::Retracted);
//! assert!(grid.domain_at(Position::new(8, 0)).contains(Digit::D5));
//! ```

pub mod grid_state;
pub mod propagator;

pub use self::{grid_state::GridState, propagator::Outcome};
