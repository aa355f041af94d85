//! Deterministic, seeded 2D text mazes: rooms, corridors, doors, and entity
//! tokens, exported as plain character grids for an external training loop.

pub mod char_grid;
pub mod defaults;
pub mod fixed_maze;
pub mod flood_fill;
pub mod grid;
pub mod maze;
pub mod random_maze;

pub use char_grid::CharGrid;
pub use fixed_maze::{FixedMaze, FixedMazeConfig, FixedMazeError};
pub use flood_fill::FloodFill;
pub use grid::{Delta, Pos, Rect, Size};
pub use maze::{FLOOR_CELL, Layer, TextMaze, WALL_CELL};
pub use random_maze::{ConfigError, MazeConfig, RandomMaze};
