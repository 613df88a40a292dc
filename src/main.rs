//! Command-line front end for the engine library.
//!
//! Three plain-text subcommands over the core surface: `perft` for move
//! generation verification, `bestmove` for one-shot search, and `selfplay`
//! for engine-versus-engine games with optional PGN archiving.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use quince_chess::engines::engine_negamax::NegamaxEngine;
use quince_chess::engines::engine_random::RandomEngine;
use quince_chess::engines::engine_trait::Engine;
use quince_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use quince_chess::game_state::chess_types::Color;
use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::perft::{perft, perft_divide};
use quince_chess::moves::chess_move::Move;
use quince_chess::moves::notation::{long_algebraic, notation};
use quince_chess::search::board_scoring::StandardScorer;
use quince_chess::search::negamax::{find_best_move, SearchConfig};
use quince_chess::utils::pgn::write_pgn;
use quince_chess::utils::render_game_state::render_game_state;

#[derive(Parser)]
#[command(name = "quince_chess", version, about = "Chess move generation and search toolkit")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count move-tree nodes to a fixed depth.
    Perft {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(long, default_value_t = 3)]
        depth: u8,
        /// Show per-root-move node counts.
        #[arg(long)]
        divide: bool,
    },
    /// Search a position and print the chosen move.
    Bestmove {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(long, default_value_t = 2)]
        depth: u8,
        /// Skip the root shuffle for reproducible output.
        #[arg(long)]
        deterministic: bool,
    },
    /// Play the engine against itself and print the game.
    Selfplay {
        #[arg(long, default_value_t = 2)]
        depth: u8,
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
        /// Choose moves uniformly at random instead of searching.
        #[arg(long)]
        random: bool,
        /// Write the finished game as PGN to this path.
        #[arg(long)]
        pgn: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    match Args::parse().command {
        Command::Perft { fen, depth, divide } => run_perft(&fen, depth, divide),
        Command::Bestmove {
            fen,
            depth,
            deterministic,
        } => run_bestmove(&fen, depth, deterministic),
        Command::Selfplay {
            depth,
            max_plies,
            random,
            pgn,
        } => run_selfplay(depth, max_plies, random, pgn),
    }
}

fn run_perft(fen: &str, depth: u8, divide: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = GameState::from_fen(fen)?;

    if divide {
        for (mv, nodes) in perft_divide(&mut game, depth) {
            println!("{}: {}", long_algebraic(&mv), nodes);
        }
    }

    let counts = perft(&mut game, depth);
    println!(
        "depth {depth}: nodes {} captures {} en-passant {} castles {} promotions {}",
        counts.nodes, counts.captures, counts.en_passant, counts.castles, counts.promotions
    );

    Ok(())
}

fn run_bestmove(fen: &str, depth: u8, deterministic: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = GameState::from_fen(fen)?;
    let moves = game.generate_legal_moves();
    if moves.is_empty() {
        let verdict = if game.is_checkmate() {
            "checkmate"
        } else {
            "stalemate"
        };
        println!("no legal moves: {verdict}");
        return Ok(());
    }

    let config = SearchConfig {
        depth,
        shuffle_root: !deterministic,
    };
    let result = find_best_move(&mut game, moves, &StandardScorer, config);

    match result.best_move {
        Some(mv) => println!(
            "bestmove {} ({}) score {} nodes {}",
            long_algebraic(&mv),
            notation(&mv),
            result.best_score,
            result.nodes
        ),
        None => println!("no move found"),
    }

    Ok(())
}

fn run_selfplay(
    depth: u8,
    max_plies: u32,
    random: bool,
    pgn_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine: Box<dyn Engine> = if random {
        Box::new(RandomEngine)
    } else {
        Box::new(NegamaxEngine::new(depth))
    };

    let initial = GameState::new_game();
    let mut game = initial.clone();
    let mut history = Vec::<Move>::new();

    for ply in 0..max_plies {
        let Some(mv) = engine.choose_move(&mut game) else {
            break;
        };
        info!(
            "ply {} {:?} plays {}",
            ply + 1,
            game.side_to_move(),
            notation(&mv)
        );
        game.apply_move(mv);
        history.push(mv);
    }

    // Refresh the terminal flags for the final position.
    let finished = game.generate_legal_moves().is_empty();
    let result = if finished && game.is_checkmate() {
        // The side to move has no answer; the mover of the last ply won.
        match game.side_to_move() {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if finished {
        "1/2-1/2"
    } else {
        "*"
    };

    println!("{}", render_game_state(&game));
    println!("{} after {} plies ({})", result, history.len(), engine.name());

    let pgn = write_pgn(&initial, &history, result);
    if let Some(path) = pgn_path {
        fs::write(&path, &pgn)?;
        println!("wrote {}", path.display());
    } else {
        println!("\n{pgn}");
    }

    Ok(())
}
