use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{hand_code, index_card, parse_hand, Board, NUM_HANDS};
use crate::display::{board_display, print_error, strategy_table};
use crate::game_tree::ALL_NODES;
use crate::hand_evaluator::evaluate_river_hand;
use crate::solver::{Session, DEFAULT_ITERATIONS, DEFAULT_SEED};

/// The warm-up board solved when none is given.
pub const DEFAULT_BOARD: &str = "Ks Th 7s 4d 2s";

#[derive(Parser)]
#[command(
    name = "river-gto",
    version = "1.0.0",
    about = "River equilibrium trainer: CFR strategies for a one-street check/bet game."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board and print the average strategy at every node
    Solve {
        /// Board cards (e.g., "Ks Th 7s 4d 2s")
        #[arg(default_value = DEFAULT_BOARD)]
        board: String,
        /// Number of training iterations
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,
        /// Seed for the hand sampler
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Emit the full solution as JSON
        #[arg(long)]
        json: bool,
        /// Show only this hand code (e.g., Ah)
        #[arg(long)]
        hand: Option<String>,
    },
    /// Rank all holdings by showdown strength on a board
    Strengths {
        /// Board cards (e.g., "Ks Th 7s 4d 2s")
        #[arg(default_value = DEFAULT_BOARD)]
        board: String,
    },
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

pub fn run_with_args(args: Vec<String>) {
    let cli = Cli::parse_from(args);
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    match cli.command {
        Commands::Solve {
            board,
            iterations,
            seed,
            json,
            hand,
        } => cmd_solve(board, iterations, seed, json, hand),
        Commands::Strengths { board } => cmd_strengths(board),
    }
}

fn cmd_solve(board: String, iterations: usize, seed: u64, json: bool, hand: Option<String>) {
    let board = match Board::parse(&board) {
        Ok(b) => b,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    let only = match hand {
        Some(code) => match parse_hand(&code) {
            Ok(h) => Some(h),
            Err(e) => {
                print_error(&e.to_string());
                return;
            }
        },
        None => None,
    };

    let mut session = Session::new(board, seed);
    session.train(iterations);
    let solution = session.solution();

    if json {
        match serde_json::to_string_pretty(&solution) {
            Ok(s) => println!("{}", s),
            Err(e) => print_error(&e.to_string()),
        }
        return;
    }

    println!();
    println!(
        "  {} River Solution  |  Board: {}  |  {} iterations  |  seed {}",
        "GTO".bold(),
        board_display(session.board().cards()),
        iterations,
        seed,
    );

    for (node, strat) in ALL_NODES.iter().zip(&solution.nodes) {
        println!();
        println!(
            "  {} (\"{}\")  |  player {} to act",
            node.label().bold(),
            node.name(),
            node.player(),
        );
        println!("{}", strategy_table(strat, session.board(), only));
    }
    println!();
}

fn cmd_strengths(board: String) {
    let board = match Board::parse(&board) {
        Ok(b) => b,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    let mut ranked: Vec<(usize, i32, String)> = (0..NUM_HANDS)
        .filter(|&h| !board.is_blocked(h))
        .map(|h| {
            let result = evaluate_river_hand(index_card(h), &board);
            (h, result.score(), result.category.to_string())
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    println!();
    println!("  Board: {}", board_display(board.cards()));
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").set_alignment(CellAlignment::Right),
        Cell::new("Hand"),
        Cell::new("Made hand"),
    ]);

    for (pos, (h, _, category)) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{}", pos + 1)).set_alignment(CellAlignment::Right),
            Cell::new(hand_code(*h).bold().to_string()),
            Cell::new(category),
        ]);
    }

    println!("{}", table);
    println!();
}
