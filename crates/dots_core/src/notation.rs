//! Text form of moves: `<orientation> <row> <col>` with 1-based indices.
//!
//! Orientation accepts `h`, `horizontal` or `2` and `v`, `vertical` or `1`
//! (the numeric codes are what the console game has always prompted for).
//! Bounds and occupancy are left to [`crate::Board::apply`].

use crate::error::{Error, Result};
use crate::types::*;

pub fn move_to_notation(mv: Move) -> String {
    format!("{} {} {}", mv.orientation.letter(), mv.row + 1, mv.col + 1)
}

pub fn parse_orientation(token: &str) -> Option<Orientation> {
    match token.to_ascii_lowercase().as_str() {
        "h" | "horizontal" | "2" => Some(Orientation::Horizontal),
        "v" | "vertical" | "1" => Some(Orientation::Vertical),
        _ => None,
    }
}

pub fn parse_move(input: &str, player: Player) -> Result<Move> {
    let notation_err = |message: String| Error::Notation {
        input: input.trim().to_string(),
        message,
    };

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(notation_err(format!(
            "expected 3 fields (orientation row col), found {}",
            parts.len()
        )));
    }

    let orientation = parse_orientation(parts[0])
        .ok_or_else(|| notation_err(format!("unknown orientation '{}'", parts[0])))?;

    let index = |name: &str, token: &str| -> Result<usize> {
        match token.parse::<usize>() {
            Ok(0) => Err(notation_err(format!("{name} is 1-based, got 0"))),
            Ok(n) => Ok(n - 1),
            Err(_) => Err(notation_err(format!("{name} '{token}' is not a number"))),
        }
    };
    let row = index("row", parts[1])?;
    let col = index("col", parts[2])?;

    Ok(Move::new(player, orientation, row, col))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
