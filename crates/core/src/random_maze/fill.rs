//! Corridor carving: a randomized depth-first backtracker over the odd cell
//! lattice. Every vacant lattice component receives corridors under its own
//! region id, so afterwards no carvable wall space remains.

use rand_chacha::ChaCha8Rng;

use super::sample;
use crate::grid::{Delta, NEIGHBOR_DELTAS, Pos};
use crate::maze::{FLOOR_CELL, Layer, TextMaze, WALL_CELL};

/// Carves corridors through every wall cell of the odd lattice, assigning
/// region ids sequentially from `first_region_id` per disconnected component
/// (normally exactly one).
pub(super) fn fill_walls_with_corridors(
    first_region_id: u32,
    maze: &mut TextMaze,
    rng: &mut ChaCha8Rng,
) {
    let area = maze.area();
    let mut region_id = first_region_id;
    for start_y in (1..area.size.height).step_by(2) {
        for start_x in (1..area.size.width).step_by(2) {
            let start = Pos { y: area.pos.y + start_y, x: area.pos.x + start_x };
            if maze.cell(Layer::Entity, start) != WALL_CELL {
                continue;
            }
            carve_component(start, region_id, maze, rng);
            region_id += 1;
        }
    }
}

fn carve_component(start: Pos, region_id: u32, maze: &mut TextMaze, rng: &mut ChaCha8Rng) {
    let area = maze.area();
    maze.set_cell(Layer::Entity, start, FLOOR_CELL);
    maze.set_cell_id(start, region_id);

    let mut trail = vec![start];
    while let Some(&current) = trail.last() {
        let mut open_directions: Vec<Delta> = Vec::with_capacity(4);
        for delta in NEIGHBOR_DELTAS {
            let target = current.shifted(delta.scaled(2));
            if area.in_bounds(target) && maze.cell(Layer::Entity, target) == WALL_CELL {
                open_directions.push(delta);
            }
        }
        if open_directions.is_empty() {
            trail.pop();
            continue;
        }
        let delta = sample::pick(rng, &open_directions);
        // The cell between two vacant lattice cells is never room floor, so
        // carving the passage cannot breach a room.
        let passage = current.shifted(delta);
        let target = current.shifted(delta.scaled(2));
        maze.set_cell(Layer::Entity, passage, FLOOR_CELL);
        maze.set_cell_id(passage, region_id);
        maze.set_cell(Layer::Entity, target, FLOOR_CELL);
        maze.set_cell_id(target, region_id);
        trail.push(target);
    }
}
