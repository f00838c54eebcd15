//! Board square representation.

use std::fmt;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns true if `(row, col)` lies on the 8x8 board.
///
/// Takes signed coordinates so that a square plus a knight offset can be
/// checked before it is turned into a [`Square`].
#[inline]
pub const fn is_valid(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from a column index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a'..='h' => Self::from_index(c.to_ascii_lowercase() as u8 - b'a'),
            _ => None,
        }
    }

    /// Returns the column index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase letter for this file.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from a row index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a rank from its 1-based number.
    #[inline]
    pub const fn from_number(number: u32) -> Option<Self> {
        if number >= 1 && number <= BOARD_SIZE as u32 {
            Self::from_index((number - 1) as u8)
        } else {
            None
        }
    }

    /// Returns the row index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the 1-based rank number.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A square on the board, addressed by zero-based (row, col).
///
/// Row 0 is rank 1 and column 0 is the a-file. Squares are stored as a
/// single index in little-endian rank-file order:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from zero-based row and column.
    ///
    /// Returns `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, as produced by applying an
    /// offset to another square.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if is_valid(row, col) {
            Some(Square(row as u8 * BOARD_SIZE + col as u8))
        } else {
            None
        }
    }

    /// Creates a square from file and rank.
    #[inline]
    pub const fn from_file_rank(file: File, rank: Rank) -> Self {
        Square(rank.index() * BOARD_SIZE + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the zero-based row (rank index).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the zero-based column (file index).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns `(row, col)`.
    #[inline]
    pub const fn coords(self) -> (u8, u8) {
        (self.row(), self.col())
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[self.col() as usize]
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[self.row() as usize]
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// Returns true for dark squares (a1 is dark).
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 0
    }

    /// Iterates over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    // Common squares
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(3, 4).unwrap();
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.coords(), (3, 4));
    }

    #[test]
    fn square_new_rejects_off_board() {
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
        assert_eq!(Square::from_coords(-1, 3), None);
        assert_eq!(Square::from_coords(2, -2), None);
        assert_eq!(Square::from_coords(7, 7), Some(Square::H8));
    }

    #[test]
    fn is_valid_bounds() {
        assert!(is_valid(0, 0));
        assert!(is_valid(7, 7));
        assert!(!is_valid(-1, 0));
        assert!(!is_valid(0, -1));
        assert!(!is_valid(8, 0));
        assert!(!is_valid(0, 8));
    }

    #[test]
    fn square_from_file_rank() {
        assert_eq!(Square::from_file_rank(File::A, Rank::R1), Square::A1);
        assert_eq!(Square::from_file_rank(File::H, Rank::R8), Square::H8);
        assert_eq!(Square::from_file_rank(File::G, Rank::R1), Square::G1);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A1.to_algebraic(), "a1");
        assert_eq!(Square::H8.to_algebraic(), "h8");
        assert_eq!(Square::new(3, 4).unwrap().to_algebraic(), "e4");
    }

    #[test]
    fn file_from_char_is_case_insensitive() {
        assert_eq!(File::from_char('c'), Some(File::C));
        assert_eq!(File::from_char('C'), Some(File::C));
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('1'), None);
    }

    #[test]
    fn rank_from_number() {
        assert_eq!(Rank::from_number(1), Some(Rank::R1));
        assert_eq!(Rank::from_number(8), Some(Rank::R8));
        assert_eq!(Rank::from_number(0), None);
        assert_eq!(Rank::from_number(9), None);
    }

    #[test]
    fn square_colors() {
        assert!(Square::A1.is_dark());
        assert!(!Square::B1.is_dark());
        assert!(Square::H8.is_dark());
        assert!(!Square::A8.is_dark());
    }

    #[test]
    fn all_squares_in_index_order() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[63], Square::H8);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }
}
