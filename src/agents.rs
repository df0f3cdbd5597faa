/// Differing kinds of agents that can play the game
use crate::algorithms::AlphaBetaSearch;
use crate::boards::Board;
use crate::game::Agent;
use crate::moves::Move;
use std::io::{stdout, Write};
use text_io::read;

/// Reads moves as text commands from standard input. Accepts both the
/// absolute and the relative spear notation; `quit` and `dump` pass
/// through as commands, anything else that does not parse is reported
/// and the player asked again.
pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }
}

impl Agent for HumanAgent {
    fn play_move(&mut self, board: &mut Board) {
        loop {
            print!("{} move: ", board.turn().name());
            stdout().flush().unwrap();
            let line: String = read!("{}\n");
            let line = line.trim();
            match line {
                "quit" => std::process::exit(0),
                "dump" => {
                    println!("{}", board);
                    continue;
                }
                _ => {}
            }
            match line.parse::<Move>() {
                Ok(mv) => {
                    if board.is_legal(&mv) {
                        board.make_move(&mv);
                        return;
                    }
                    println!("Illegal move. Please try again.");
                }
                Err(e) => println!("{}", e),
            }
        }
    }
}

/// Plays the move picked by the alpha-beta search.
pub struct AiAgent {
    search: AlphaBetaSearch,
}

impl AiAgent {
    pub fn new() -> Self {
        AiAgent {
            search: AlphaBetaSearch::new(),
        }
    }
}

impl Agent for AiAgent {
    fn play_move(&mut self, board: &mut Board) {
        let mv = self.search.find_best_move(board).expect("No moves left");
        board.make_move(&mv);
    }
}

pub struct RandomAgent {}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {}
    }
}

impl Agent for RandomAgent {
    fn play_move(&mut self, board: &mut Board) {
        use rand::seq::SliceRandom;

        let moves: Vec<Move> = board.legal_moves().collect();
        let mv = moves.choose(&mut rand::thread_rng()).expect("No moves left");
        board.make_move(mv);
    }
}

/// Looks one move ahead and keeps the move leaving it the largest
/// mobility edge over the opponent. Shuffles first so equal moves vary
/// from game to game.
pub struct GreedyMobilityAgent {}

impl GreedyMobilityAgent {
    pub fn new() -> Self {
        GreedyMobilityAgent {}
    }
}

impl Agent for GreedyMobilityAgent {
    fn play_move(&mut self, board: &mut Board) {
        use rand::seq::SliceRandom;

        let player = board.turn();
        let mut moves: Vec<Move> = board.legal_moves().collect();
        moves.shuffle(&mut rand::thread_rng());

        let mut best_move = None;
        let mut best_gain = i32::MIN;
        for mv in moves {
            board.make_move(&mv);
            let ours = board.legal_moves_for(player).count() as i32;
            let theirs = board.legal_moves_for(player.opponent()).count() as i32;
            board.undo().expect("a just-made move can be undone");

            let gain = ours - theirs;
            if gain > best_gain {
                best_move = Some(mv);
                best_gain = gain;
            }
        }

        board.make_move(&best_move.expect("No moves left"));
    }
}
