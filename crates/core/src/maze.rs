//! The in-memory maze: two parallel character layers plus per-cell region ids
//! over one rectangular area. Mutation happens through bounds-checked cell
//! writes; reads outside the area degrade to sentinel values.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::char_grid::CharGrid;
use crate::grid::{Pos, Rect, Size};

pub const WALL_CELL: u8 = b'*';
pub const FLOOR_CELL: u8 = b' ';
pub const UNLABELED_CELL: u8 = b'.';

/// Selects which character buffer of a [`TextMaze`] is addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Entity,
    Variations,
}

/// A maze of `height * width` cells. The entity layer holds walls, floors,
/// doors, and tokens; the variations layer holds per-room cosmetic labels;
/// the id buffer groups cells into regions (0 = unassigned).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMaze {
    area: Rect,
    entity: Vec<u8>,
    variations: Vec<u8>,
    ids: Vec<u32>,
}

impl TextMaze {
    /// A blank maze: entity layer all walls, variations layer all `'.'`,
    /// region ids all 0.
    pub fn new(size: Size) -> TextMaze {
        let cells = size.area();
        TextMaze {
            area: Rect::from_size(size),
            entity: vec![WALL_CELL; cells],
            variations: vec![UNLABELED_CELL; cells],
            ids: vec![0; cells],
        }
    }

    /// Copies parsed literal text into the entity layer of a fresh maze.
    /// Cells past the end of a short line keep the wall default.
    pub fn from_char_grid(grid: &CharGrid) -> TextMaze {
        let size = Size { height: grid.height() as i32, width: grid.width() as i32 };
        let mut maze = TextMaze::new(size);
        for pos in maze.area.cells() {
            let value = grid.cell_at(pos.y as usize, pos.x as usize);
            if value != 0 {
                maze.set_cell(Layer::Entity, pos, value);
            }
        }
        maze
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn cell(&self, layer: Layer, pos: Pos) -> u8 {
        match self.index(pos) {
            Some(index) => self.layer_buffer(layer)[index],
            None => 0,
        }
    }

    pub fn set_cell(&mut self, layer: Layer, pos: Pos, value: u8) {
        if let Some(index) = self.index(pos) {
            self.layer_buffer_mut(layer)[index] = value;
        }
    }

    pub fn cell_id(&self, pos: Pos) -> u32 {
        match self.index(pos) {
            Some(index) => self.ids[index],
            None => 0,
        }
    }

    pub fn set_cell_id(&mut self, pos: Pos, id: u32) {
        if let Some(index) = self.index(pos) {
            self.ids[index] = id;
        }
    }

    /// Row-major snapshot of one layer, every row terminated with `'\n'`.
    pub fn text(&self, layer: Layer) -> String {
        let width = self.area.size.width as usize;
        let mut out = String::with_capacity(self.ids.len() + self.area.size.height.max(0) as usize);
        for row in self.layer_buffer(layer).chunks(width.max(1)) {
            for &cell in row {
                out.push(cell as char);
            }
            out.push('\n');
        }
        out
    }

    /// A new maze rotated by `quarter_turns * 90°` clockwise; the receiver is
    /// untouched. Extents swap for odd turn counts, and entity cells,
    /// variation cells, and region ids all travel to the mapped position.
    pub fn rotate(&self, quarter_turns: i32) -> TextMaze {
        let turns = quarter_turns.rem_euclid(4);
        let old = self.area.size;
        let size = if turns % 2 == 0 {
            old
        } else {
            Size { height: old.width, width: old.height }
        };
        let mut rotated = TextMaze::new(size);
        for pos in self.area.cells() {
            // Each case is a 90°-multiple rotation plus the translation that
            // pins the result's top-left corner back at (0, 0).
            let target = match turns {
                0 => pos,
                1 => Pos { y: pos.x, x: size.width - 1 - pos.y },
                2 => Pos { y: size.height - 1 - pos.y, x: size.width - 1 - pos.x },
                _ => Pos { y: size.height - 1 - pos.x, x: pos.y },
            };
            rotated.set_cell(Layer::Entity, target, self.cell(Layer::Entity, pos));
            rotated.set_cell(Layer::Variations, target, self.cell(Layer::Variations, pos));
            rotated.set_cell_id(target, self.cell_id(pos));
        }
        rotated
    }

    /// Stable fingerprint over extents, both layers, and region ids.
    pub fn layout_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_i32(self.area.size.height);
        hasher.write_i32(self.area.size.width);
        hasher.update(&self.entity);
        hasher.update(&self.variations);
        for &id in &self.ids {
            hasher.write_u32(id);
        }
        hasher.finish()
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if self.area.in_bounds(pos) {
            Some((pos.y * self.area.size.width + pos.x) as usize)
        } else {
            None
        }
    }

    fn layer_buffer(&self, layer: Layer) -> &[u8] {
        match layer {
            Layer::Entity => &self.entity,
            Layer::Variations => &self.variations,
        }
    }

    fn layer_buffer_mut(&mut self, layer: Layer) -> &mut [u8] {
        match layer {
            Layer::Entity => &mut self.entity,
            Layer::Variations => &mut self.variations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lettered_4x3() -> TextMaze {
        let mut maze = TextMaze::new(Size { height: 4, width: 3 });
        for (index, pos) in maze.area().cells().enumerate() {
            maze.set_cell(Layer::Entity, pos, b'A' + index as u8);
            maze.set_cell_id(pos, index as u32);
        }
        maze
    }

    #[test]
    fn blank_maze_has_wall_entity_and_unlabeled_variations() {
        let maze = TextMaze::new(Size { height: 2, width: 3 });
        assert_eq!(maze.text(Layer::Entity), "***\n***\n");
        assert_eq!(maze.text(Layer::Variations), "...\n...\n");
        for pos in maze.area().cells() {
            assert_eq!(maze.cell_id(pos), 0);
        }
    }

    #[test]
    fn out_of_bounds_reads_are_sentinels_and_writes_are_ignored() {
        let mut maze = TextMaze::new(Size { height: 2, width: 2 });
        let outside = Pos { y: -1, x: 0 };
        assert_eq!(maze.cell(Layer::Entity, outside), 0);
        assert_eq!(maze.cell_id(outside), 0);

        maze.set_cell(Layer::Entity, outside, b'X');
        maze.set_cell_id(outside, 9);
        assert_eq!(maze.text(Layer::Entity), "**\n**\n");
        assert_eq!(maze.cell_id(Pos { y: 0, x: 0 }), 0);
    }

    #[test]
    fn from_char_grid_fills_missing_tail_cells_with_walls() {
        let maze = TextMaze::from_char_grid(&CharGrid::new("ab\n1234\n"));
        assert_eq!(maze.text(Layer::Entity), "ab**\n1234\n");
        assert_eq!(maze.text(Layer::Variations), "....\n....\n");
    }

    #[test]
    fn rotate_clockwise_matches_the_hand_worked_map() {
        // old          new
        //   ABC          JGDA
        //   DEF   =>     KHEB
        //   GHI          LIFC
        //   JKL
        let rotated = lettered_4x3().rotate(1);
        assert_eq!(rotated.text(Layer::Entity), "JGDA\nKHEB\nLIFC\n");
    }

    #[test]
    fn rotate_half_turn_reverses_the_grid() {
        let rotated = lettered_4x3().rotate(2);
        assert_eq!(rotated.text(Layer::Entity), "LKJ\nIHG\nFED\nCBA\n");
    }

    #[test]
    fn rotate_counterclockwise_equals_three_clockwise_turns() {
        let maze = lettered_4x3();
        assert_eq!(maze.rotate(-1), maze.rotate(3));
        assert_eq!(maze.rotate(-1).text(Layer::Entity), "CFIL\nBEHK\nADGJ\n");
    }

    #[test]
    fn four_rotations_reproduce_every_buffer_exactly() {
        let mut maze = lettered_4x3();
        maze.set_cell(Layer::Variations, Pos { y: 2, x: 1 }, b'Q');
        let full_turn = maze.rotate(1).rotate(1).rotate(1).rotate(1);
        assert_eq!(full_turn, maze);
        assert_eq!(maze.rotate(4), maze);
        assert_eq!(maze.rotate(0), maze);
    }

    #[test]
    fn odd_rotations_swap_extents() {
        let maze = TextMaze::new(Size { height: 4, width: 3 });
        let rotated = maze.rotate(1);
        assert_eq!(rotated.area().size, Size { height: 3, width: 4 });
        assert_eq!(maze.area().size, Size { height: 4, width: 3 });
    }

    #[test]
    fn layout_hash_tracks_cell_and_id_changes() {
        let mut maze = TextMaze::new(Size { height: 3, width: 3 });
        let baseline = maze.layout_hash();
        maze.set_cell(Layer::Entity, Pos { y: 1, x: 1 }, FLOOR_CELL);
        let with_floor = maze.layout_hash();
        assert_ne!(baseline, with_floor);
        maze.set_cell_id(Pos { y: 1, x: 1 }, 1);
        assert_ne!(with_floor, maze.layout_hash());
    }
}
