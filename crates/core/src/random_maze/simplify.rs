//! Layout simplification passes run after connecting regions: prune dead-end
//! corridor stubs, then straighten horseshoe bends left behind by the carver.

use crate::grid::{Delta, NEIGHBOR_DELTAS, Pos};
use crate::maze::{FLOOR_CELL, Layer, TextMaze};

/// Repeatedly walls over floor cells with fewer than two open neighbors until
/// the layout stabilizes. Out-of-bounds neighbors count as walls; cells in
/// `protected` are never walled over.
pub(super) fn remove_dead_ends(floor: u8, wall: u8, protected: &[Pos], maze: &mut TextMaze) {
    let area = maze.area();
    loop {
        let mut changed = false;
        for pos in area.cells() {
            if maze.cell(Layer::Entity, pos) != floor || protected.contains(&pos) {
                continue;
            }
            let open_neighbors = NEIGHBOR_DELTAS
                .into_iter()
                .filter(|&delta| {
                    let cell = maze.cell(Layer::Entity, pos.shifted(delta));
                    cell != 0 && cell != wall
                })
                .count();
            if open_neighbors < 2 {
                maze.set_cell(Layer::Entity, pos, wall);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}

/// Straightens U-shaped detours: a lone wall cell with open cells on both
/// sides and a parallel three-cell corridor directly past it becomes open,
/// and the detour cells become wall.
pub(super) fn remove_horseshoe_bends(wall: u8, protected: &[Pos], maze: &mut TextMaze) {
    loop {
        let mut changed = false;
        let area = maze.area();
        for pos in area.cells() {
            if maze.cell(Layer::Entity, pos) != wall {
                continue;
            }
            for side in NEIGHBOR_DELTAS {
                if straighten_bend(pos, side, wall, protected, maze) {
                    changed = true;
                    break;
                }
            }
        }
        if !changed {
            break;
        }
    }
}

fn straighten_bend(
    pos: Pos,
    side: Delta,
    wall: u8,
    protected: &[Pos],
    maze: &mut TextMaze,
) -> bool {
    let along = Delta { dy: side.dx, dx: side.dy };
    let before = pos.shifted(along.reversed());
    let after = pos.shifted(along);
    let detour_before = before.shifted(side);
    let detour_mid = pos.shifted(side);
    let detour_after = after.shifted(side);

    let open = |p: Pos| {
        let cell = maze.cell(Layer::Entity, p);
        cell != 0 && cell != wall
    };
    let blocked = |p: Pos| !open(p);

    let untouchable = protected.contains(&detour_before)
        || protected.contains(&detour_mid)
        || protected.contains(&detour_after);
    if untouchable {
        return false;
    }

    let detour_is_isolated = open(before)
        && open(after)
        && open(detour_before)
        && open(detour_mid)
        && open(detour_after)
        && blocked(detour_mid.shifted(side))
        && blocked(detour_before.shifted(side))
        && blocked(detour_before.shifted(along.reversed()))
        && blocked(detour_after.shifted(side))
        && blocked(detour_after.shifted(along));
    if !detour_is_isolated {
        return false;
    }

    maze.set_cell(Layer::Entity, pos, FLOOR_CELL);
    maze.set_cell(Layer::Entity, detour_before, wall);
    maze.set_cell(Layer::Entity, detour_mid, wall);
    maze.set_cell(Layer::Entity, detour_after, wall);
    true
}
