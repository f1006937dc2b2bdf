use log::debug;

use crate::board::Board;
use crate::player::GamePlayer;
use crate::session::{Session, Side};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameResult {
    Win(Side),
    Draw,
}

/// One game of tic-tac-toe: the board plus the session created by the toss.
/// Owns both exclusively until the game is over.
pub struct TttGame {
    board: Board,
    session: Session,
}

impl TttGame {
    pub fn new(session: Session) -> Self {
        Self {
            board: Board::new(),
            session,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn to_move(&self) -> Side {
        self.session.to_move()
    }

    /// Plays one turn for the side to move. The player is asked again for as
    /// long as it produces occupied squares. Returns the terminal result if
    /// this turn ended the game, None otherwise.
    pub fn play_single_turn(&mut self, player: &mut dyn GamePlayer) -> Option<GameResult> {
        let side = self.session.to_move();
        let symbol = self.session.symbol_of(side);

        let square = loop {
            let square = match player.next_move(&self.board, symbol) {
                None => return Some(GameResult::Draw),
                Some(square) => square,
            };
            match self.board.apply(square, symbol) {
                Ok(()) => break square,
                Err(err) => debug!("{:?} move rejected: {}", side, err),
            }
        };
        debug!("{:?} ({}) played square {}", side, symbol, square);

        if self.board.is_winner(symbol) {
            return Some(GameResult::Win(side));
        }
        self.session.advance();
        if self.board.is_full() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    pub fn play_until_over(
        &mut self,
        user: &mut dyn GamePlayer,
        opponent: &mut dyn GamePlayer,
    ) -> GameResult {
        loop {
            let player: &mut dyn GamePlayer = match self.session.to_move() {
                Side::User => user,
                Side::Opponent => opponent,
            };
            if let Some(result) = self.play_single_turn(player) {
                debug!("game over: {:?}", result);
                return result;
            }
        }
    }
}
