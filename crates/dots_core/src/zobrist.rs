//! Zobrist keys for dots-and-boxes boards.
//!
//! Every edge slot, every (cell, owner) pair and the player to move get a
//! random 64-bit key. A board fingerprint is the XOR of the keys of its drawn
//! edges and claimed cells, so drawing or erasing an edge updates it in O(1)
//! and an apply/undo pair leaves it unchanged.
//!
//! Keys depend on the board shape, so unlike a fixed 8x8 game they are
//! generated per board from a fixed seed. Two boards of the same shape always
//! share the same keys.

use crate::types::{Orientation, Player, horizontal_edge_count, vertical_edge_count};

const SEED: u64 = 0x123456789ABCDEF0;

/// xorshift64 step, the same generator for every board shape.
#[inline]
fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    /// Indexed by `row * cols + col`.
    horizontal: Vec<u64>,
    /// Indexed by `row * (cols + 1) + col`.
    vertical: Vec<u64>,
    /// Indexed by `[cell][player]`.
    owners: Vec<[u64; 2]>,
    /// XOR-ed in when B is to move.
    side_to_move: u64,
}

impl ZobristKeys {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut state = SEED;
        let mut next = || {
            state = xorshift64(state);
            state
        };

        let horizontal = (0..horizontal_edge_count(rows, cols))
            .map(|_| next())
            .collect();
        let vertical = (0..vertical_edge_count(rows, cols))
            .map(|_| next())
            .collect();
        let owners = (0..rows * cols).map(|_| [next(), next()]).collect();
        let side_to_move = next();

        Self {
            horizontal,
            vertical,
            owners,
            side_to_move,
        }
    }

    /// Key of an edge slot, by its flat index within its orientation.
    #[inline(always)]
    pub fn edge_key(&self, orientation: Orientation, index: usize) -> u64 {
        match orientation {
            Orientation::Horizontal => self.horizontal[index],
            Orientation::Vertical => self.vertical[index],
        }
    }

    #[inline(always)]
    pub fn owner_key(&self, cell: usize, player: Player) -> u64 {
        self.owners[cell][player.idx()]
    }

    #[inline(always)]
    pub fn side_key(&self, to_move: Player) -> u64 {
        match to_move {
            Player::A => 0,
            Player::B => self.side_to_move,
        }
    }

    #[cfg(test)]
    pub(crate) fn all_keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .copied()
            .chain(self.owners.iter().flat_map(|pair| pair.iter().copied()))
            .chain(std::iter::once(self.side_to_move))
    }
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
