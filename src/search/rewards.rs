use crate::grid::{Cell, GameObject, StateSpace};

pub type Score = i64;

/// Reward values for the collectible game objects. Negative values are
/// accepted; the engines do not assume rewards are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rewards {
    pub coin: Score,
    pub trash: Score,
}

impl Rewards {
    pub fn new(coin: Score, trash: Score) -> Self {
        Self { coin, trash }
    }

    pub fn reward_for(&self, object: GameObject) -> Score {
        match object {
            GameObject::Coin => self.coin,
            GameObject::Trash => self.trash,
            _ => 0,
        }
    }
}

/// Assigns a dense bit index to every reward-bearing cell of a state space,
/// in row-major order. The index is built once per search; the bit of a cell
/// is looked up in constant time.
#[derive(Debug, Clone)]
pub struct RewardIndex {
    cols: usize,
    bits: Vec<Option<usize>>,
    num_rewards: usize,
}

impl RewardIndex {
    pub fn new(state_space: &dyn StateSpace) -> Self {
        let (rows, cols) = (state_space.rows(), state_space.cols());
        let mut bits = Vec::with_capacity(rows * cols);
        let mut num_rewards = 0;
        for r in 0..rows {
            for c in 0..cols {
                let cell = Cell::new(r as i32, c as i32);
                if state_space.cell_content(cell).is_collectible() {
                    bits.push(Some(num_rewards));
                    num_rewards += 1;
                } else {
                    bits.push(None);
                }
            }
        }
        Self {
            cols,
            bits,
            num_rewards,
        }
    }

    /// The bit of a reward-bearing cell, `None` for every other cell.
    pub fn bit(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 || cell.col as usize >= self.cols {
            return None;
        }
        let index = (cell.row as usize)
            .checked_mul(self.cols)?
            .checked_add(cell.col as usize)?;
        self.bits
            .get(index)
            .copied()
            .flatten()
    }

    pub fn num_rewards(&self) -> usize {
        self.num_rewards
    }
}
