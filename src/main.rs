mod agents;
mod algorithms;
mod amazons_errors;
mod boards;
mod game;
mod moves;
mod pieces;
mod squares;
#[cfg(test)]
mod utils;

use agents::*;
use game::*;

use std::env;
use std::process;

// ---------------------------------------------
// Main
// ---------------------------------------------

// Usage: amazons [WHITE] [BLACK]
// where each player is one of human, ai, random or greedy.
// Defaults to a human playing White against the AI.

fn agent_named(kind: &str) -> Box<dyn Agent> {
    match kind {
        "human" => Box::new(HumanAgent::new()),
        "ai" => Box::new(AiAgent::new()),
        "random" => Box::new(RandomAgent::new()),
        "greedy" => Box::new(GreedyMobilityAgent::new()),
        _ => {
            eprintln!(
                "Unknown player kind: {} (expected human, ai, random or greedy)",
                kind
            );
            process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let white = args.get(1).map(String::as_str).unwrap_or("human");
    let black = args.get(2).map(String::as_str).unwrap_or("ai");

    let mut game = Game::new(agent_named(white), agent_named(black));
    game.play();
}
