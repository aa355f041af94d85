//! Region joining. Every wall cell separating two different regions is a
//! candidate; one candidate per region pair is opened, plus optionally a
//! second one controlled by the extra connection probability.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;

use super::sample;
use crate::grid::{Delta, NEIGHBOR_DELTAS, Pos};
use crate::maze::{FLOOR_CELL, Layer, TextMaze, WALL_CELL};

/// An opened wall cell together with the direction facing the higher-numbered
/// of the two regions it joins.
#[derive(Clone, Copy, Debug)]
pub(super) struct Connection {
    pub pos: Pos,
    pub toward: Delta,
}

struct Candidate {
    pos: Pos,
    toward: Delta,
}

pub(super) fn connect_regions(
    extra_connection_probability: f64,
    maze: &mut TextMaze,
    rng: &mut ChaCha8Rng,
) -> Vec<Connection> {
    let area = maze.area();
    // Keyed by (lower id, higher id) so pairs are processed in a stable order.
    let mut candidates: BTreeMap<(u32, u32), Vec<Candidate>> = BTreeMap::new();
    let axes =
        [(NEIGHBOR_DELTAS[0], NEIGHBOR_DELTAS[1]), (NEIGHBOR_DELTAS[2], NEIGHBOR_DELTAS[3])];
    for pos in area.cells() {
        if maze.cell(Layer::Entity, pos) != WALL_CELL {
            continue;
        }
        for axis in axes {
            let first = pos.shifted(axis.0);
            let second = pos.shifted(axis.1);
            if !area.in_bounds(first) || !area.in_bounds(second) {
                continue;
            }
            if maze.cell(Layer::Entity, first) == WALL_CELL
                || maze.cell(Layer::Entity, second) == WALL_CELL
            {
                continue;
            }
            let first_id = maze.cell_id(first);
            let second_id = maze.cell_id(second);
            if first_id == 0 || second_id == 0 || first_id == second_id {
                continue;
            }
            let (key, toward) = if first_id < second_id {
                ((first_id, second_id), axis.1)
            } else {
                ((second_id, first_id), axis.0)
            };
            candidates.entry(key).or_default().push(Candidate { pos, toward });
        }
    }

    let mut connections = Vec::new();
    for pair_candidates in candidates.values() {
        let first_choice = sample::uniform_below(rng, pair_candidates.len() as u64) as usize;
        open(&pair_candidates[first_choice], maze, &mut connections);
        // One probability roll per pair regardless of candidate count keeps
        // the draw sequence independent of maze shape.
        let wants_extra = sample::roll(rng, extra_connection_probability);
        if wants_extra && pair_candidates.len() > 1 {
            let mut extra =
                sample::uniform_below(rng, pair_candidates.len() as u64 - 1) as usize;
            if extra >= first_choice {
                extra += 1;
            }
            open(&pair_candidates[extra], maze, &mut connections);
        }
    }
    connections
}

fn open(candidate: &Candidate, maze: &mut TextMaze, connections: &mut Vec<Connection>) {
    maze.set_cell(Layer::Entity, candidate.pos, FLOOR_CELL);
    connections.push(Connection { pos: candidate.pos, toward: candidate.toward });
}
