use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use itertools::Itertools;

use crate::board::{Board, Square, Symbol, BOARD_SIZE};
use crate::player::GamePlayer;
use crate::session::{CoinSide, Opponent};

fn read_trimmed_line() -> String {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read input");
    line.trim().to_string()
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    io::stdout().flush().expect("failed to flush stdout");
    read_trimmed_line()
}

/// Human mover reading positions 1-9 from stdin. Invalid, out of range and
/// occupied inputs are re-prompted without limit.
pub struct CmdPlayer {
    prompt: &'static str,
}

impl CmdPlayer {
    pub fn user() -> Self {
        Self {
            prompt: "Input your move (1-9): ",
        }
    }

    pub fn friend() -> Self {
        Self {
            prompt: "Input friend's move (1-9): ",
        }
    }
}

impl GamePlayer for CmdPlayer {
    fn next_move(&mut self, board: &Board, _symbol: Symbol) -> Option<Square> {
        loop {
            let position = match prompt(self.prompt).parse::<usize>() {
                Err(_) => {
                    println!("Invalid input. Enter a number between 1 and 9.");
                    continue;
                }
                Ok(position) => position,
            };
            match Square::from_position(position) {
                Some(square) if board.is_free(square) => return Some(square),
                _ => println!("This position is already taken or invalid."),
            }
        }
    }
}

/// Renders the bordered grid. Free squares show their position number.
pub fn print_board(board: &Board) {
    println!("+-------+-------+-------+");
    for r in 0..BOARD_SIZE {
        println!("|       |       |       |");
        let cells = (0..BOARD_SIZE)
            .map(|c| {
                let square = Square::new(r, c);
                match board.get(square) {
                    Some(symbol) => symbol.to_string(),
                    None => square.position().to_string(),
                }
            })
            .map(|cell| format!("|   {}   ", cell))
            .join("");
        println!("{}|", cells);
        println!("|       |       |       |");
        println!("+-------+-------+-------+");
    }
}

pub fn prompt_opponent() -> Opponent {
    loop {
        let choice = prompt("Do you want to play with Computer(C) or with Friend(F): ");
        match choice.to_uppercase().as_str() {
            "C" => return Opponent::Computer,
            "F" => return Opponent::Friend,
            _ => println!("Invalid choice. Type C or F."),
        }
    }
}

pub fn prompt_call() -> CoinSide {
    loop {
        let call = prompt("Call it! Heads (H) or Tails (T): ");
        match call.to_uppercase().as_str() {
            "H" => return CoinSide::Heads,
            "T" => return CoinSide::Tails,
            _ => println!("Invalid choice. Type H or T."),
        }
    }
}

pub fn prompt_replay() -> bool {
    prompt("Do you want to play again? (Y/N): ").to_uppercase() == "Y"
}

/// Cosmetic only, the coin is flipped by the caller.
pub fn flip_animation() {
    print!("Flipping the coin");
    io::stdout().flush().expect("failed to flush stdout");
    for _ in 0..5 {
        thread::sleep(Duration::from_millis(300));
        print!(".");
        io::stdout().flush().expect("failed to flush stdout");
    }
    println!();
}
