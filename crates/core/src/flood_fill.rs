//! Single-source BFS over one maze layer. Built once from a maze snapshot and
//! frozen; a new maze state needs a new instance. Distance and path queries
//! degrade to sentinel values instead of failing.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::grid::{Pos, Rect};
use crate::maze::{Layer, TextMaze};

/// Distance value for cells whose character is in the wall set. Never
/// overwritten by the fill.
const WALL_DISTANCE: i32 = -2;
/// Distance value for cells the fill has not (yet) reached.
const UNREACHED: i32 = -1;

/// Distance-to-goal field for every cell of a maze, plus the reachable cells
/// in ascending-distance discovery order.
pub struct FloodFill {
    distances: Vec<i32>,
    connected: Vec<Pos>,
    area: Rect,
}

impl FloodFill {
    /// Runs the fill from `goal`, treating every character in `wall_cells` as
    /// impassable. A goal that is out of bounds or on a wall leaves nothing
    /// reachable; that is deliberate, not an error.
    pub fn new(maze: &TextMaze, layer: Layer, goal: Pos, wall_cells: &[u8]) -> FloodFill {
        let area = maze.area();
        let is_wall = wall_table(wall_cells);
        let mut distances = Vec::with_capacity(area.size.area());
        for pos in area.cells() {
            let blocked = is_wall[maze.cell(layer, pos) as usize];
            distances.push(if blocked { WALL_DISTANCE } else { UNREACHED });
        }
        let mut fill = FloodFill { distances, connected: Vec::new(), area };
        fill.expand_from(goal);
        fill
    }

    /// Minimum path length from `pos` to the goal, or `-1` when `pos` is out
    /// of bounds, a wall, or unreachable. The three cases are deliberately
    /// indistinguishable.
    pub fn distance_from(&self, pos: Pos) -> i32 {
        if !self.area.in_bounds(pos) {
            return -1;
        }
        let distance = self.distances[flat_index(self.area, pos)];
        if distance >= 0 { distance } else { -1 }
    }

    /// A shortest route from `pos` to the goal, both endpoints included, or
    /// an empty vector when the goal is unreachable. Where several neighbors
    /// tie, each is chosen with equal probability: the running candidate is
    /// replaced with probability `1/k` by the k-th one, drawing from `rng`
    /// once per candidate after the first.
    pub fn shortest_path_from(&self, pos: Pos, rng: &mut ChaCha8Rng) -> Vec<Pos> {
        let mut distance = self.distance_from(pos);
        if distance == -1 {
            return Vec::new();
        }
        let mut path = Vec::with_capacity(distance as usize + 1);
        path.push(pos);
        while distance > 0 {
            distance -= 1;
            let current = *path.last().expect("path starts with its origin");
            let mut chosen = current;
            let mut candidates = 0u64;
            for neighbor in self.area.neighbors(current) {
                if self.distances[flat_index(self.area, neighbor)] == distance {
                    candidates += 1;
                    if candidates == 1 || rng.next_u64() % candidates == 0 {
                        chosen = neighbor;
                    }
                }
            }
            path.push(chosen);
        }
        path
    }

    /// Reachable cells with their distances, replayed in the order the fill
    /// discovered them (non-decreasing distance).
    pub fn connected_cells(&self) -> impl Iterator<Item = (Pos, i32)> + '_ {
        self.connected.iter().map(|&pos| (pos, self.distances[flat_index(self.area, pos)]))
    }

    fn expand_from(&mut self, goal: Pos) {
        let area = self.area;
        if !area.in_bounds(goal) {
            return;
        }
        let goal_index = flat_index(area, goal);
        if self.distances[goal_index] != UNREACHED {
            return;
        }
        self.distances[goal_index] = 0;
        let mut frontier = vec![goal];
        let mut next = Vec::new();
        let mut cost = 0;
        while !frontier.is_empty() {
            cost += 1;
            for index in 0..frontier.len() {
                let pos = frontier[index];
                for neighbor in area.neighbors(pos) {
                    let neighbor_index = flat_index(area, neighbor);
                    if self.distances[neighbor_index] == UNREACHED {
                        self.distances[neighbor_index] = cost;
                        next.push(neighbor);
                    }
                }
            }
            self.connected.append(&mut frontier);
            std::mem::swap(&mut frontier, &mut next);
        }
    }
}

/// Constant-time membership table over all 256 cell values.
fn wall_table(wall_cells: &[u8]) -> [bool; 256] {
    let mut table = [false; 256];
    for &cell in wall_cells {
        table[cell as usize] = true;
    }
    table
}

/// Flat buffer index of an in-bounds position.
fn flat_index(area: Rect, pos: Pos) -> usize {
    ((pos.y - area.pos.y) * area.size.width + (pos.x - area.pos.x)) as usize
}
