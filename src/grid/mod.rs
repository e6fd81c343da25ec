//! The grid world the search engines plan over. The engines only see it
//! through the [`StateSpace`] trait; [`Grid`] is the concrete implementation
//! the rest of the crate edits and loads from text.

mod cell;
mod game_object;
mod grid;
mod state_space;

pub use cell::Cell;
pub use game_object::GameObject;
pub use grid::{Grid, GridParseError};
pub use state_space::{StateSpace, NEIGHBOUR_OFFSETS};
