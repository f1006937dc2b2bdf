use std::fmt::{self, Display};

use log::debug;
use rand::Rng;

use crate::board::Symbol;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Opponent {
    Computer,
    Friend,
}

impl Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opponent::Computer => write!(f, "Computer"),
            Opponent::Friend => write!(f, "Friend"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn flip(rng: &mut impl Rng) -> CoinSide {
        if rng.gen() {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }
}

impl Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinSide::Heads => write!(f, "Heads"),
            CoinSide::Tails => write!(f, "Tails"),
        }
    }
}

/// Per game state created by the toss: who the opponent is, which symbol the
/// user plays, and whose turn is next. The toss winner plays X and moves
/// first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Session {
    opponent: Opponent,
    user_symbol: Symbol,
    next: Side,
}

impl Session {
    pub fn from_toss(opponent: Opponent, call: CoinSide, coin: CoinSide) -> Self {
        let session = if coin == call {
            Session {
                opponent,
                user_symbol: Symbol::X,
                next: Side::User,
            }
        } else {
            Session {
                opponent,
                user_symbol: Symbol::O,
                next: Side::Opponent,
            }
        };
        debug!(
            "toss: call {}, coin {}, winner {:?}",
            call,
            coin,
            session.toss_winner()
        );
        session
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    pub fn toss_winner(&self) -> Side {
        match self.user_symbol {
            Symbol::X => Side::User,
            Symbol::O => Side::Opponent,
        }
    }

    pub fn symbol_of(&self, side: Side) -> Symbol {
        match side {
            Side::User => self.user_symbol,
            Side::Opponent => self.user_symbol.opposite(),
        }
    }

    pub fn to_move(&self) -> Side {
        self.next
    }

    pub fn advance(&mut self) {
        self.next = self.next.opposite();
    }
}
