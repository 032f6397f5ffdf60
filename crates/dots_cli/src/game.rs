//! Console game between a human and an engine.
//!
//! The computer always plays A (the maximizer) and the human plays B, so the
//! reported score estimate reads from the computer's side.

use anyhow::{Context, Result, bail};
use dots_core::{Applied, Board, Engine, Player, move_to_notation, parse_move};
use match_runner::commit_move;
use std::io::{BufRead, Write};
use tracing::info;

use crate::config::{FirstPlayer, GameConfig};

pub const COMPUTER: Player = Player::A;
pub const HUMAN: Player = Player::B;

/// Cells each side ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub computer: usize,
    pub human: usize,
}

impl GameSummary {
    pub fn winner(&self) -> Option<Player> {
        match self.computer.cmp(&self.human) {
            std::cmp::Ordering::Greater => Some(COMPUTER),
            std::cmp::Ordering::Less => Some(HUMAN),
            std::cmp::Ordering::Equal => None,
        }
    }
}

pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    engine: Box<dyn Engine>,
    config: GameConfig,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, engine: Box<dyn Engine>, config: GameConfig) -> Self {
        Self {
            input,
            output,
            engine,
            config,
        }
    }

    /// Plays one game to completion. Fails if the input closes before the
    /// board is complete or the output cannot be written.
    pub fn run(&mut self) -> Result<GameSummary> {
        let rows = match self.config.rows {
            Some(rows) => rows,
            None => self.ask_dimension("rows")?,
        };
        let cols = match self.config.cols {
            Some(cols) => cols,
            None => self.ask_dimension("columns")?,
        };
        let first = match self.config.first {
            Some(first) => first,
            None => self.ask_first()?,
        };

        let mut board = Board::new(rows, cols).context("cannot set up the board")?;
        self.engine.new_game();
        info!(rows, cols, ?first, engine = self.engine.name(), "game started");

        writeln!(
            self.output,
            "Computer plays {COMPUTER}, you play {HUMAN}. Moves are: <h|v> <row> <col>"
        )?;
        write!(self.output, "\n{board}")?;

        let mut to_move = match first {
            FirstPlayer::Computer => COMPUTER,
            FirstPlayer::Human => HUMAN,
        };
        while !board.is_complete() {
            let applied = if to_move == COMPUTER {
                match self.computer_turn(&mut board)? {
                    Some(applied) => applied,
                    None => break,
                }
            } else {
                self.human_turn(&mut board)?
            };
            write!(self.output, "\n{board}")?;

            if applied.extra_turn() && !board.is_complete() {
                let who = if to_move == COMPUTER { "Computer" } else { "You" };
                writeln!(self.output, "Box completed. {who} again.")?;
            } else {
                to_move = to_move.other();
            }
        }

        let summary = GameSummary {
            computer: board.owned_by(COMPUTER),
            human: board.owned_by(HUMAN),
        };
        writeln!(
            self.output,
            "\nFinal score: computer {}, you {}",
            summary.computer, summary.human
        )?;
        let verdict = match summary.winner() {
            Some(COMPUTER) => "Computer wins!",
            Some(_) => "You win!",
            None => "It's a draw.",
        };
        writeln!(self.output, "{verdict}")?;
        info!(computer = summary.computer, human = summary.human, "game over");
        Ok(summary)
    }

    fn computer_turn(&mut self, board: &mut Board) -> Result<Option<Applied>> {
        let result = self
            .engine
            .search(board, COMPUTER, self.config.search_limits());

        let solved = if result.exhaustive { " (solved)" } else { "" };
        writeln!(self.output, "REACHED DEPTH: {}{solved}", result.depth)?;
        writeln!(self.output, "ESTIMATED SCORE: {:+}", result.score)?;

        let Some((mv, applied)) = commit_move(board, COMPUTER, result.best_move, self.engine.name())?
        else {
            return Ok(None);
        };
        writeln!(self.output, "Computer plays {}", move_to_notation(mv))?;
        Ok(Some(applied))
    }

    fn human_turn(&mut self, board: &mut Board) -> Result<Applied> {
        loop {
            let line = self.prompt("Your move: ")?;
            let mv = match parse_move(&line, HUMAN) {
                Ok(mv) => mv,
                Err(err) => {
                    writeln!(self.output, "Invalid move: {err}")?;
                    continue;
                }
            };
            match board.apply(mv) {
                Ok(applied) => return Ok(applied),
                Err(err) => writeln!(self.output, "Invalid move: {err}")?,
            }
        }
    }

    fn ask_dimension(&mut self, name: &str) -> Result<usize> {
        loop {
            let line = self.prompt(&format!("Number of {name}: "))?;
            match line.parse::<usize>() {
                Ok(n) if n > 0 => return Ok(n),
                _ => writeln!(self.output, "Please enter a positive whole number.")?,
            }
        }
    }

    fn ask_first(&mut self) -> Result<FirstPlayer> {
        loop {
            let line = self.prompt("Who moves first? (computer/human): ")?;
            if let Some(first) = FirstPlayer::parse(&line) {
                return Ok(first);
            }
            writeln!(self.output, "Please answer computer or human.")?;
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
