use tictactoe::board::Board;
use tictactoe::cli::{self, CmdPlayer};
use tictactoe::game::{GameResult, TttGame};
use tictactoe::player::{GamePlayer, PlayerRand};
use tictactoe::session::{CoinSide, Opponent, Session, Side};

fn play_one_game(rng: &mut impl rand::Rng) {
    cli::print_board(&Board::new());

    let opponent = cli::prompt_opponent();
    let call = cli::prompt_call();
    cli::flip_animation();
    let coin = CoinSide::flip(rng);

    let session = Session::from_toss(opponent, call, coin);
    match session.toss_winner() {
        Side::User => println!("Coin landed {}! You won the toss.", coin),
        Side::Opponent => println!("Coin landed {}! {} won the toss.", coin, opponent),
    }
    println!(
        "You: {} | {}: {}",
        session.symbol_of(Side::User),
        opponent,
        session.symbol_of(Side::Opponent)
    );

    let mut user = CmdPlayer::user();
    let mut opponent_player: Box<dyn GamePlayer> = match opponent {
        Opponent::Computer => Box::new(PlayerRand::new()),
        Opponent::Friend => Box::new(CmdPlayer::friend()),
    };

    let mut game = TttGame::new(session);
    let result = loop {
        let side = game.to_move();
        let player: &mut dyn GamePlayer = match side {
            Side::User => &mut user,
            Side::Opponent => opponent_player.as_mut(),
        };
        let outcome = game.play_single_turn(player);
        match side {
            Side::User => println!("You played:"),
            Side::Opponent => println!("{} played:", opponent),
        }
        cli::print_board(game.board());
        if let Some(result) = outcome {
            break result;
        }
    };

    match result {
        GameResult::Win(Side::User) => println!("You Won!"),
        GameResult::Win(Side::Opponent) => println!("{} Won!", opponent),
        GameResult::Draw => println!("It's a draw!"),
    }
}

fn main() {
    tictactoe::utils::init_globals();

    println!("===== Welcome to Tic-Tac-Toe =====");
    let mut rng = rand::thread_rng();
    loop {
        play_one_game(&mut rng);
        if !cli::prompt_replay() {
            println!("Thanks for playing!");
            break;
        }
    }
}
