use itertools::Itertools;
use rand::prelude::*;

use crate::board::{Board, Square, Symbol};

/// A move producer. Implementations never return an occupied square on their
/// own, but the game loop re-asks if one slips through. None means the board
/// has no free square left.
pub trait GamePlayer {
    fn next_move(&mut self, board: &Board, symbol: Symbol) -> Option<Square>;
}

pub struct PlayerRand {
    rand: StdRng,
}

impl Default for PlayerRand {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRand {
    pub fn new() -> Self {
        Self::from_seed(thread_rng().gen())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rand: StdRng::seed_from_u64(seed),
        }
    }
}

impl GamePlayer for PlayerRand {
    fn next_move(&mut self, board: &Board, _symbol: Symbol) -> Option<Square> {
        let moves = board.free_squares().collect_vec();
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rand.gen_range(0..moves.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Symbol};
    use crate::player::{GamePlayer, PlayerRand};

    #[test]
    fn rand_player_is_deterministic_per_seed() {
        let board = Board::from_str("x___o____");
        let mut player1 = PlayerRand::from_seed(42);
        let mut player2 = PlayerRand::from_seed(42);
        for _ in 0..16 {
            assert_eq!(
                player1.next_move(&board, Symbol::X),
                player2.next_move(&board, Symbol::X)
            );
        }
    }

    #[test]
    fn rand_player_picks_only_free_squares() {
        let mut board = Board::new();
        let mut player = PlayerRand::from_seed(0xe4655449311aee87);
        let mut symbol = Symbol::X;
        for _ in 0..9 {
            let square = player.next_move(&board, symbol).unwrap();
            assert!(board.is_free(square));
            board.apply(square, symbol).unwrap();
            symbol = symbol.opposite();
        }
        assert!(board.is_full());
        assert_eq!(player.next_move(&board, symbol), None);
    }

    #[test]
    fn rand_player_takes_the_single_free_square() {
        let board = Board::from_str("xoxxox_xo");
        let mut player = PlayerRand::from_seed(7);
        let square = player.next_move(&board, Symbol::O).unwrap();
        assert_eq!(square.position(), 7);
    }
}
