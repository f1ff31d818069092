//! Core data structures for the pencilmark board engine.
//!
//! This crate provides the value and coordinate primitives plus the generic
//! candidate containers the board layer is built on:
//!
//! - [`digit`]: type-safe Sudoku values 1-9
//! - [`position`]: (x, y) board coordinates and the peer relation
//! - [`domain_set`]: generic 9-slot bitmask candidate sets
//! - [`digit_domain`]: the [`Digit`]-valued candidate set used by the board
//! - [`cell_var`]: an optional value validated against an external domain
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Digit, DigitDomain, Position};
//!
//! let mut domain = DigitDomain::FULL;
//! domain.remove(Digit::D5);
//! assert_eq!(domain.len(), 8);
//!
//! // Every cell has exactly 20 peers (row, column, box).
//! assert_eq!(Position::new(4, 4).house_peers().len(), 20);
//! ```

pub mod cell_var;
pub mod digit;
pub mod digit_domain;
pub mod domain_set;
pub mod position;

pub use self::{
    cell_var::CellVar,
    digit::Digit,
    digit_domain::{DigitDomain, DigitSemantics},
    domain_set::{DomainSemantics, DomainSet},
    position::Position,
};
