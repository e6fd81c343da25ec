use crate::{grid::Cell, search::Path};

/// Agent top left, goal bottom right, with a wall row forcing the path down
/// the right-hand column.
pub const WALLED_CORRIDOR_TEXT: &str = "
A _ _ _ _
W W W W _
_ _ _ _ G
";

/// Three coins and one piece of trash around a single wall.
pub const COIN_FIELD_TEXT: &str = "
A C _ _
_ W C _
_ T _ _
_ _ C G
";

/// The shortest path runs along the top row; a coin two rows below is worth
/// a four-step detour.
pub const DETOUR_TEXT: &str = "
A _ _ _ G
_ _ _ _ _
_ _ C _ _
";

/// The goal is walled in on every side.
pub const ENCLOSED_GOAL_TEXT: &str = "
A _ _ _ _
_ _ W _ _
_ W G W _
_ _ W _ _
";

/// The goal sits directly behind a wall, so every first move leads away from
/// it.
pub const POCKET_TEXT: &str = "
_ _ _
A W G
_ _ _
";

pub fn path_of(cells: &[(i32, i32)]) -> Path {
    cells.iter().map(|&cell| Cell::from(cell)).collect()
}
