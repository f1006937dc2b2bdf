use std::error::Error;
use std::fmt::{self, Display};

pub const BOARD_SIZE: usize = 3;
pub const SQUARES_NUM: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opposite(&self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// A single board cell. Users refer to cells by position 1-9, row major.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    idx: u8,
}

impl Square {
    pub fn new(r: usize, c: usize) -> Self {
        Square::from_idx(r * BOARD_SIZE + c)
    }

    pub fn from_idx(idx: usize) -> Self {
        assert!(idx < SQUARES_NUM);
        Self { idx: idx as u8 }
    }

    /// Position as shown to the user (1-9). Out of range input is a user
    /// error, not a bug, so this one returns None instead of asserting.
    pub fn from_position(position: usize) -> Option<Self> {
        if (1..=SQUARES_NUM).contains(&position) {
            Some(Self {
                idx: (position - 1) as u8,
            })
        } else {
            None
        }
    }

    pub fn to_idx(&self) -> usize {
        self.idx as usize
    }

    pub fn position(&self) -> usize {
        self.idx as usize + 1
    }

    pub fn row(&self) -> usize {
        self.idx as usize / BOARD_SIZE
    }

    pub fn column(&self) -> usize {
        self.idx as usize % BOARD_SIZE
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct Bitboard {
    bitmap: u16,
}

impl Bitboard {
    fn new() -> Self {
        Self { bitmap: 0 }
    }

    fn get_raw(&self) -> u16 {
        self.bitmap
    }

    fn get(&self, idx: usize) -> bool {
        assert!(idx < SQUARES_NUM);
        (self.bitmap & (1u16 << idx)) != 0
    }

    fn set(&mut self, idx: usize, val: bool) {
        assert!(idx < SQUARES_NUM);
        if val {
            self.bitmap |= 1u16 << idx;
        } else {
            self.bitmap &= !(1u16 << idx);
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Ongoing,
    Finished(Option<Symbol>),
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    pub fn is_ongoing(&self) -> bool {
        !self.is_finished()
    }
}

/// Returned by [`Board::apply`] when the chosen square is already taken.
/// The board is left untouched; the caller should ask the mover again.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SquareOccupied(pub Square);

impl Display for SquareOccupied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square {} is already occupied", self.0)
    }
}

impl Error for SquareOccupied {}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    board_x: Bitboard,
    board_o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            board_x: Bitboard::new(),
            board_o: Bitboard::new(),
        }
    }

    /// Board literal for tests and fixtures: nine chars of 'x', 'o' or '_',
    /// row major from the top left.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        assert_eq!(s.chars().count(), SQUARES_NUM, "unexpected string length");
        let mut board = Self::new();
        for (idx, c) in s.chars().enumerate() {
            match c {
                'x' => board.board_x.set(idx, true),
                'o' => board.board_o.set(idx, true),
                '_' => {}
                _ => panic!("unknown board char: {:?}", c),
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Symbol> {
        let idx = square.to_idx();
        if self.board_x.get(idx) {
            return Some(Symbol::X);
        }
        if self.board_o.get(idx) {
            return Some(Symbol::O);
        }
        None
    }

    pub fn get_tile(&self, r: usize, c: usize) -> Option<Symbol> {
        assert!(r < BOARD_SIZE && c < BOARD_SIZE);
        self.get(Square::new(r, c))
    }

    pub fn is_free(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn free_squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..SQUARES_NUM)
            .map(Square::from_idx)
            .filter(|sq| self.is_free(*sq))
    }

    /// Marks a free square. Occupied squares are rejected without mutation.
    pub fn apply(&mut self, square: Square, symbol: Symbol) -> Result<(), SquareOccupied> {
        if !self.is_free(square) {
            return Err(SquareOccupied(square));
        }
        match symbol {
            Symbol::X => &mut self.board_x,
            Symbol::O => &mut self.board_o,
        }
        .set(square.to_idx(), true);
        Ok(())
    }

    pub fn is_winner(&self, symbol: Symbol) -> bool {
        let winning_sequences = [
            0b000000111, // row 1
            0b000111000, // row 2
            0b111000000, // row 3
            0b001001001, // col 1
            0b010010010, // col 2
            0b100100100, // col 3
            0b100010001, // dial 1
            0b001010100, // dial 2
        ];

        let bitmap = match symbol {
            Symbol::X => self.board_x.get_raw(),
            Symbol::O => self.board_o.get_raw(),
        };
        winning_sequences
            .into_iter()
            .any(|seq| (bitmap & seq) == seq)
    }

    pub fn is_full(&self) -> bool {
        (self.board_x.get_raw() | self.board_o.get_raw()) == ((1 << SQUARES_NUM) - 1)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_winner(Symbol::X) {
            return GameStatus::Finished(Some(Symbol::X));
        }
        if self.is_winner(Symbol::O) {
            return GameStatus::Finished(Some(Symbol::O));
        }
        if self.is_full() {
            return GameStatus::Finished(None);
        }
        GameStatus::Ongoing
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::board::{Board, GameStatus, Square, SquareOccupied, Symbol, SQUARES_NUM};

    #[test]
    fn wins_and_draw() {
        let to_board = |s: &str| Board::from_str(s);
        assert_eq!(
            to_board("xxxoo____").status(),
            GameStatus::Finished(Some(Symbol::X))
        );
        assert_eq!(
            to_board("oo_xxx___").status(),
            GameStatus::Finished(Some(Symbol::X))
        );
        assert_eq!(
            to_board("oo____xxx").status(),
            GameStatus::Finished(Some(Symbol::X))
        );
        assert_eq!(
            to_board("oxxo__ox_").status(),
            GameStatus::Finished(Some(Symbol::O))
        );
        assert_eq!(
            to_board("xox_o_xo_").status(),
            GameStatus::Finished(Some(Symbol::O))
        );
        assert_eq!(
            to_board("xxo__o_xo").status(),
            GameStatus::Finished(Some(Symbol::O))
        );
        assert_eq!(
            to_board("x_o_x_o_x").status(),
            GameStatus::Finished(Some(Symbol::X))
        );
        assert_eq!(
            to_board("x_o_o_o_x").status(),
            GameStatus::Finished(Some(Symbol::O))
        );
        assert_eq!(to_board("xxoooxxxo").status(), GameStatus::Finished(None));
    }

    #[test]
    fn winner_row_with_arbitrary_rest() {
        let board = Board::from_str("xxxo_o_o_");
        assert!(board.is_winner(Symbol::X));
        assert!(!board.is_winner(Symbol::O));
    }

    #[test]
    fn no_winner_on_mixed_lines() {
        let board = Board::from_str("xox_o_xo_");
        assert!(!board.is_winner(Symbol::X));
        let board = Board::from_str("xxo__o_xo");
        assert!(!board.is_winner(Symbol::X));
    }

    #[test]
    fn free_squares_on_empty_board() {
        let board = Board::new();
        let positions = board.free_squares().map(|sq| sq.position()).collect_vec();
        assert_eq!(positions, (1..=SQUARES_NUM).collect_vec());
    }

    #[test]
    fn free_squares_excludes_occupied() {
        let board = Board::from_str("x___o___x");
        let free = board.free_squares().collect_vec();
        assert_eq!(free.len(), 6);
        for sq in free {
            assert!(board.is_free(sq));
            assert_eq!(board.get(sq), None);
        }
    }

    #[test]
    fn apply_rejects_occupied_square_without_mutation() {
        let mut board = Board::new();
        let square = Square::from_position(5).unwrap();
        board.apply(square, Symbol::X).unwrap();

        let before = board;
        assert_eq!(
            board.apply(square, Symbol::O),
            Err(SquareOccupied(square))
        );
        assert_eq!(board.apply(square, Symbol::X), Err(SquareOccupied(square)));
        assert!(board == before);
        assert_eq!(board.get(square), Some(Symbol::X));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_str("xxoooxxxo");
        assert!(board.is_full());
        assert!(!board.is_winner(Symbol::X));
        assert!(!board.is_winner(Symbol::O));
        assert_eq!(board.status(), GameStatus::Finished(None));
    }

    #[test]
    fn square_positions() {
        assert_eq!(Square::from_position(0), None);
        assert_eq!(Square::from_position(10), None);
        let sq = Square::from_position(6).unwrap();
        assert_eq!(sq.to_idx(), 5);
        assert_eq!((sq.row(), sq.column()), (1, 2));
        assert_eq!(Square::new(1, 2), sq);
        assert_eq!(sq.to_string(), "6");
    }
}
