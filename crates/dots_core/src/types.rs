use std::fmt;

/// One of the two sides. `A` maximizes the score differential, `B` minimizes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Contribution of one claimed cell to the A-minus-B differential.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Edge direction. Declaration order is the search enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    pub fn idx(self) -> usize {
        match self {
            Orientation::Vertical => 0,
            Orientation::Horizontal => 1,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Orientation::Vertical => 'v',
            Orientation::Horizontal => 'h',
        }
    }
}

/// A single edge placement.
///
/// Horizontal edges live at `row in 0..=rows`, `col in 0..cols`; vertical
/// edges at `row in 0..rows`, `col in 0..=cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(player: Player, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            player,
            orientation,
            row,
            col,
        }
    }

    pub fn horizontal(player: Player, row: usize, col: usize) -> Self {
        Self::new(player, Orientation::Horizontal, row, col)
    }

    pub fn vertical(player: Player, row: usize, col: usize) -> Self {
        Self::new(player, Orientation::Vertical, row, col)
    }

    /// Same edge, drawn by someone else.
    pub fn with_player(self, player: Player) -> Self {
        Self { player, ..self }
    }

    pub fn same_edge(&self, other: &Move) -> bool {
        self.orientation == other.orientation && self.row == other.row && self.col == other.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {}",
            self.player,
            self.orientation.letter(),
            self.row + 1,
            self.col + 1
        )
    }
}

/// Number of horizontal edge slots on a `rows x cols` board.
pub fn horizontal_edge_count(rows: usize, cols: usize) -> usize {
    (rows + 1) * cols
}

/// Number of vertical edge slots on a `rows x cols` board.
pub fn vertical_edge_count(rows: usize, cols: usize) -> usize {
    rows * (cols + 1)
}

pub fn total_edge_count(rows: usize, cols: usize) -> usize {
    horizontal_edge_count(rows, cols) + vertical_edge_count(rows, cols)
}
