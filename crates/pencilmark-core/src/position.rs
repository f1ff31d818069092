//! Board coordinates and the peer relation.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). The 3×3 box containing a position is identified by
/// [`box_index`](Self::box_index) (0-8, left to right, top to bottom).
///
/// # Examples
///
/// ```
/// use pencilmark_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a box index and a cell index within that box.
    ///
    /// Cells within a box are numbered 0-8, left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self::new(
            (box_index % 3) * 3 + cell % 3,
            (box_index / 3) * 3 + cell / 3,
        )
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the index (0-80) of this position in row-major order.
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the 20 peers of this position: every other cell sharing its
    /// row, column, or 3×3 box.
    ///
    /// Order is row peers left to right, then column peers top to bottom,
    /// then the four remaining box peers.
    #[must_use]
    pub fn house_peers(self) -> [Self; 20] {
        let mut peers = [self; 20];
        let mut n = 0;
        for x in 0..9 {
            if x != self.x {
                peers[n] = Self::new(x, self.y);
                n += 1;
            }
        }
        for y in 0..9 {
            if y != self.y {
                peers[n] = Self::new(self.x, y);
                n += 1;
            }
        }
        let (box_x, box_y) = (self.x / 3 * 3, self.y / 3 * 3);
        for y in box_y..box_y + 3 {
            for x in box_x..box_x + 3 {
                if x != self.x && y != self.y {
                    peers[n] = Self::new(x, y);
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }

    /// Returns whether `other` is a peer of this position.
    #[must_use]
    pub fn is_peer_of(self, other: Self) -> bool {
        self != other
            && (self.x == other.x || self.y == other.y || self.box_index() == other.box_index())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
