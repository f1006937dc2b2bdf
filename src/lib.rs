pub mod board;
pub mod cli;
pub mod game;
pub mod player;
pub mod session;
pub mod utils;
