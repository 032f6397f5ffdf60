use std::fmt;

use crate::error::{Error, InvalidMoveReason, Result};
use crate::types::*;
use crate::zobrist::ZobristKeys;

/// Dots-and-boxes board of `rows x cols` unit cells.
///
/// The board is mutated only through [`Board::apply`] and [`Board::undo`].
/// Search code applies trial moves to the same instance and undoes them on
/// the way back up, so both operations are O(1) and an apply/undo pair
/// restores every field exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    owner: Vec<Option<Player>>,
    score_diff: i32,
    edges_placed: usize,
    last_move_extra_turn: bool,
    /// XOR of the keys of drawn edges and claimed cells.
    key: u64,
    keys: ZobristKeys,
}

/// Returned by [`Board::apply`], handed back to [`Board::undo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Applied {
    claimed: u8,
    previous_extra_turn: bool,
}

impl Applied {
    /// Cells completed by the move, 0..=2.
    pub fn claimed(&self) -> u8 {
        self.claimed
    }

    /// The mover plays again.
    pub fn extra_turn(&self) -> bool {
        self.claimed > 0
    }
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            horizontal: vec![false; horizontal_edge_count(rows, cols)],
            vertical: vec![false; vertical_edge_count(rows, cols)],
            owner: vec![None; rows * cols],
            score_diff: 0,
            edges_placed: 0,
            last_move_extra_turn: false,
            key: 0,
            keys: ZobristKeys::new(rows, cols),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn total_edges(&self) -> usize {
        total_edge_count(self.rows, self.cols)
    }

    pub fn edges_placed(&self) -> usize {
        self.edges_placed
    }

    /// Cells owned by A minus cells owned by B.
    #[inline]
    pub fn score_diff(&self) -> i32 {
        self.score_diff
    }

    pub fn last_move_extra_turn(&self) -> bool {
        self.last_move_extra_turn
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.edges_placed == self.total_edges()
    }

    /// `(a, b)` cell counts. Only meaningful once the board is complete.
    pub fn final_scores(&self) -> (usize, usize) {
        let cells = self.cells() as i32;
        let a = (cells + self.score_diff) / 2;
        (a as usize, (cells - a) as usize)
    }

    /// Flat index of an edge within its orientation, if in range.
    fn slot(&self, orientation: Orientation, row: usize, col: usize) -> Option<usize> {
        match orientation {
            Orientation::Horizontal if row <= self.rows && col < self.cols => {
                Some(row * self.cols + col)
            }
            Orientation::Vertical if row < self.rows && col <= self.cols => {
                Some(row * (self.cols + 1) + col)
            }
            _ => None,
        }
    }

    pub fn in_bounds(&self, orientation: Orientation, row: usize, col: usize) -> bool {
        self.slot(orientation, row, col).is_some()
    }

    fn edge_mut(&mut self, orientation: Orientation, slot: usize) -> &mut bool {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal[slot],
            Orientation::Vertical => &mut self.vertical[slot],
        }
    }

    /// Whether an edge is drawn. Out-of-range edges read as not drawn.
    pub fn has_edge(&self, orientation: Orientation, row: usize, col: usize) -> bool {
        match (orientation, self.slot(orientation, row, col)) {
            (Orientation::Horizontal, Some(i)) => self.horizontal[i],
            (Orientation::Vertical, Some(i)) => self.vertical[i],
            (_, None) => false,
        }
    }

    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        if row < self.rows && col < self.cols {
            self.owner[row * self.cols + col]
        } else {
            None
        }
    }

    pub fn owned_by(&self, player: Player) -> usize {
        self.owner.iter().filter(|&&o| o == Some(player)).count()
    }

    pub fn is_cell_complete(&self, row: usize, col: usize) -> bool {
        self.has_edge(Orientation::Horizontal, row, col)
            && self.has_edge(Orientation::Horizontal, row + 1, col)
            && self.has_edge(Orientation::Vertical, row, col)
            && self.has_edge(Orientation::Vertical, row, col + 1)
    }

    /// The (at most two) cells bordered by an in-range edge, as `(row, col)`.
    fn adjacent_cells(&self, mv: &Move) -> [Option<(usize, usize)>; 2] {
        match mv.orientation {
            Orientation::Horizontal => [
                (mv.row > 0).then(|| (mv.row - 1, mv.col)),
                (mv.row < self.rows).then_some((mv.row, mv.col)),
            ],
            Orientation::Vertical => [
                (mv.col > 0).then(|| (mv.row, mv.col - 1)),
                (mv.col < self.cols).then_some((mv.row, mv.col)),
            ],
        }
    }

    /// Draws `mv`'s edge and claims any cell it completes for `mv.player`.
    ///
    /// A refused move leaves the board untouched.
    pub fn apply(&mut self, mv: Move) -> Result<Applied> {
        let slot = self
            .slot(mv.orientation, mv.row, mv.col)
            .ok_or_else(|| Error::invalid_move(mv, InvalidMoveReason::OutOfBounds))?;
        let edge = self.edge_mut(mv.orientation, slot);
        if *edge {
            return Err(Error::invalid_move(mv, InvalidMoveReason::AlreadyDrawn));
        }
        *edge = true;
        self.key ^= self.keys.edge_key(mv.orientation, slot);

        let mut claimed = 0u8;
        for (row, col) in self.adjacent_cells(&mv).into_iter().flatten() {
            if self.is_cell_complete(row, col) {
                let cell = row * self.cols + col;
                self.owner[cell] = Some(mv.player);
                self.key ^= self.keys.owner_key(cell, mv.player);
                claimed += 1;
            }
        }
        self.score_diff += i32::from(claimed) * mv.player.sign();

        let previous_extra_turn = self.last_move_extra_turn;
        self.last_move_extra_turn = claimed > 0;
        self.edges_placed += 1;

        Ok(Applied {
            claimed,
            previous_extra_turn,
        })
    }

    /// Exact inverse of the [`Board::apply`] call that produced `applied`.
    pub fn undo(&mut self, mv: Move, applied: Applied) -> Result<()> {
        let slot = self
            .slot(mv.orientation, mv.row, mv.col)
            .ok_or_else(|| Error::invalid_move(mv, InvalidMoveReason::OutOfBounds))?;
        if !*self.edge_mut(mv.orientation, slot) {
            return Err(Error::invalid_move(mv, InvalidMoveReason::NotDrawn));
        }

        // Every complete neighbour was completed by this edge.
        let mut released = 0u8;
        for (row, col) in self.adjacent_cells(&mv).into_iter().flatten() {
            if self.is_cell_complete(row, col) {
                let cell = row * self.cols + col;
                if let Some(owner) = self.owner[cell].take() {
                    self.score_diff -= owner.sign();
                    self.key ^= self.keys.owner_key(cell, owner);
                }
                released += 1;
            }
        }
        debug_assert_eq!(released, applied.claimed, "undo does not match apply");

        *self.edge_mut(mv.orientation, slot) = false;
        self.key ^= self.keys.edge_key(mv.orientation, slot);
        self.edges_placed -= 1;
        self.last_move_extra_turn = applied.previous_extra_turn;
        Ok(())
    }

    /// Transposition key for this board with `to_move` on turn. O(1).
    #[inline]
    pub fn fingerprint(&self, to_move: Player) -> u64 {
        self.key ^ self.keys.side_key(to_move)
    }

    /// Recomputes [`Board::fingerprint`] from scratch.
    pub fn compute_fingerprint(&self, to_move: Player) -> u64 {
        let mut key = self.keys.side_key(to_move);
        for (i, _) in self.horizontal.iter().enumerate().filter(|(_, e)| **e) {
            key ^= self.keys.edge_key(Orientation::Horizontal, i);
        }
        for (i, _) in self.vertical.iter().enumerate().filter(|(_, e)| **e) {
            key ^= self.keys.edge_key(Orientation::Vertical, i);
        }
        for (cell, owner) in self.owner.iter().enumerate() {
            if let Some(p) = owner {
                key ^= self.keys.owner_key(cell, *p);
            }
        }
        key
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..=self.rows {
            for col in 0..self.cols {
                let edge = if self.has_edge(Orientation::Horizontal, row, col) {
                    '-'
                } else {
                    ' '
                };
                write!(f, "o{edge}")?;
            }
            writeln!(f, "o")?;

            if row < self.rows {
                for col in 0..=self.cols {
                    let edge = if self.has_edge(Orientation::Vertical, row, col) {
                        '|'
                    } else {
                        ' '
                    };
                    write!(f, "{edge}")?;
                    if col < self.cols {
                        let mark = self.owner(row, col).map_or(' ', Player::symbol);
                        write!(f, "{mark}")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
