use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameObject {
    #[default]
    Empty,
    Wall,
    Coin,
    Trash,
    Agent,
    Goal,
}

impl GameObject {
    pub const ALL: [GameObject; 6] = [
        GameObject::Empty,
        GameObject::Wall,
        GameObject::Coin,
        GameObject::Trash,
        GameObject::Agent,
        GameObject::Goal,
    ];

    /// Coins and trash carry a reward the first time they are entered.
    pub fn is_collectible(&self) -> bool {
        matches!(self, GameObject::Coin | GameObject::Trash)
    }

    /// The single-character code used by the grid text format.
    pub fn code(&self) -> char {
        match self {
            GameObject::Empty => '_',
            GameObject::Wall => 'W',
            GameObject::Coin => 'C',
            GameObject::Trash => 'T',
            GameObject::Agent => 'A',
            GameObject::Goal => 'G',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|object| object.code() == code)
    }
}

impl Display for GameObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_invertible() {
        for object in GameObject::ALL {
            assert_eq!(GameObject::from_code(object.code()), Some(object));
        }
        assert_eq!(GameObject::from_code('?'), None);
    }

    #[test]
    fn only_coins_and_trash_are_collectible() {
        let collectible: Vec<_> = GameObject::ALL
            .into_iter()
            .filter(GameObject::is_collectible)
            .collect();
        assert_eq!(collectible, vec![GameObject::Coin, GameObject::Trash]);
    }
}
