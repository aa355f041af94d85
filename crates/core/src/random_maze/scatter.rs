//! Token placement inside rooms on the entity layer.

use rand_chacha::ChaCha8Rng;

use super::sample;
use crate::grid::Rect;
use crate::maze::{Layer, TextMaze};

/// Stamps up to `count_per_room` copies of `token` on distinct floor cells of
/// each room. Rooms with fewer floor cells than requested are saturated.
pub(super) fn add_tokens_to_rooms(
    rooms: &[Rect],
    count_per_room: i32,
    token: u8,
    floor: u8,
    maze: &mut TextMaze,
    rng: &mut ChaCha8Rng,
) {
    if count_per_room <= 0 {
        return;
    }
    let area = maze.area();
    for room in rooms {
        let mut open_cells: Vec<_> = area
            .intersect(*room)
            .cells()
            .filter(|&pos| maze.cell(Layer::Entity, pos) == floor)
            .collect();
        let placements = (count_per_room as usize).min(open_cells.len());
        for _ in 0..placements {
            let index = sample::uniform_below(rng, open_cells.len() as u64) as usize;
            let pos = open_cells.swap_remove(index);
            maze.set_cell(Layer::Entity, pos, token);
        }
    }
}
