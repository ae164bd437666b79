use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{hand_code, Board, Card, Suit, NUM_HANDS};
use crate::solver::NodeStrategy;

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let rank = card.rank.to_char();
            let symbol = card.suit.symbol();
            match card.suit {
                Suit::Spades => format!("{}{}", rank, symbol).white().to_string(),
                Suit::Hearts => format!("{}{}", rank, symbol).red().to_string(),
                Suit::Diamonds => format!("{}{}", rank, symbol).blue().to_string(),
                Suit::Clubs => format!("{}{}", rank, symbol).green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn freq_cell(p: f64) -> String {
    let pct = p * 100.0;
    if pct > 70.0 {
        format!("{:.1}%", pct).green().to_string()
    } else if pct > 30.0 {
        format!("{:.1}%", pct).yellow().to_string()
    } else {
        format!("{:.1}%", pct)
    }
}

/// Render one node's average strategy as a table, holdings ace-first.
/// Blocked holdings are dimmed; `only` narrows the rows to one universe
/// index.
pub fn strategy_table(node: &NodeStrategy, board: &Board, only: Option<usize>) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let words = if node.actions == ["c", "b"] {
        ["check", "bet"]
    } else {
        ["fold", "call"]
    };
    table.set_header(vec![
        Cell::new("Hand"),
        Cell::new(words[0]).set_alignment(CellAlignment::Right),
        Cell::new(words[1]).set_alignment(CellAlignment::Right),
    ]);

    for h in (0..NUM_HANDS).rev() {
        if only.is_some() && only != Some(h) {
            continue;
        }
        let code = hand_code(h);
        let strat = match node.hands.get(code) {
            Some(s) => *s,
            None => continue,
        };
        if board.is_blocked(h) {
            table.add_row(vec![
                Cell::new(code.dimmed().to_string()),
                Cell::new("-".dimmed().to_string()).set_alignment(CellAlignment::Right),
                Cell::new("-".dimmed().to_string()).set_alignment(CellAlignment::Right),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(code.bold().to_string()),
                Cell::new(freq_cell(strat[0])).set_alignment(CellAlignment::Right),
                Cell::new(freq_cell(strat[1])).set_alignment(CellAlignment::Right),
            ]);
        }
    }

    table.to_string()
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
