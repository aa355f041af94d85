//! Signed grid-space primitives shared by the maze layers and generation passes.
//! Positions may be transiently out of bounds; every consumer bounds-checks
//! through `Rect` before indexing a buffer.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dy: i32, dx: i32) -> Pos {
        Pos { y: self.y + dy, x: self.x + dx }
    }

    pub fn shifted(self, delta: Delta) -> Pos {
        Pos { y: self.y + delta.dy, x: self.x + delta.dx }
    }
}

/// Unit (or scaled) step between cells, also used to orient connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delta {
    pub dy: i32,
    pub dx: i32,
}

impl Delta {
    pub fn scaled(self, factor: i32) -> Delta {
        Delta { dy: self.dy * factor, dx: self.dx * factor }
    }

    pub fn reversed(self) -> Delta {
        Delta { dy: -self.dy, dx: -self.dx }
    }
}

/// The one fixed 4-neighbor order: up, down, left, right. Randomized
/// tie-breaking consumes entropy in exactly this order, so every traversal in
/// the crate goes through this table.
pub const NEIGHBOR_DELTAS: [Delta; 4] = [
    Delta { dy: -1, dx: 0 },
    Delta { dy: 1, dx: 0 },
    Delta { dy: 0, dx: -1 },
    Delta { dy: 0, dx: 1 },
];

pub fn neighbor_candidates(pos: Pos) -> [Pos; 4] {
    [
        pos.shifted(NEIGHBOR_DELTAS[0]),
        pos.shifted(NEIGHBOR_DELTAS[1]),
        pos.shifted(NEIGHBOR_DELTAS[2]),
        pos.shifted(NEIGHBOR_DELTAS[3]),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size {
    pub height: i32,
    pub width: i32,
}

impl Size {
    pub fn area(self) -> usize {
        (self.height.max(0) as usize) * (self.width.max(0) as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rect {
    pub pos: Pos,
    pub size: Size,
}

impl Rect {
    pub fn from_size(size: Size) -> Rect {
        Rect { pos: Pos { y: 0, x: 0 }, size }
    }

    pub fn in_bounds(self, pos: Pos) -> bool {
        pos.y >= self.pos.y
            && pos.y < self.pos.y + self.size.height
            && pos.x >= self.pos.x
            && pos.x < self.pos.x + self.size.width
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let origin = self.pos;
        let width = self.size.width;
        (0..self.size.height)
            .flat_map(move |dy| (0..width).map(move |dx| origin.offset(dy, dx)))
    }

    /// In-bounds orthogonal neighbors of `pos`, in the `NEIGHBOR_DELTAS` order.
    pub fn neighbors(self, pos: Pos) -> impl Iterator<Item = Pos> {
        neighbor_candidates(pos).into_iter().filter(move |&neighbor| self.in_bounds(neighbor))
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let top = self.pos.y.max(other.pos.y);
        let left = self.pos.x.max(other.pos.x);
        let bottom = (self.pos.y + self.size.height).min(other.pos.y + other.size.height);
        let right = (self.pos.x + self.size.width).min(other.pos.x + other.size.width);
        Rect {
            pos: Pos { y: top, x: left },
            size: Size { height: (bottom - top).max(0), width: (right - left).max(0) },
        }
    }

    pub fn intersects(self, other: Rect) -> bool {
        let shared = self.intersect(other);
        shared.size.height > 0 && shared.size.width > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_rejects_negative_and_overflowing_positions() {
        let area = Rect::from_size(Size { height: 3, width: 4 });
        assert!(area.in_bounds(Pos { y: 0, x: 0 }));
        assert!(area.in_bounds(Pos { y: 2, x: 3 }));
        assert!(!area.in_bounds(Pos { y: -1, x: 0 }));
        assert!(!area.in_bounds(Pos { y: 0, x: -1 }));
        assert!(!area.in_bounds(Pos { y: 3, x: 0 }));
        assert!(!area.in_bounds(Pos { y: 0, x: 4 }));
    }

    #[test]
    fn cells_enumerates_in_row_major_order() {
        let area = Rect { pos: Pos { y: 1, x: 2 }, size: Size { height: 2, width: 2 } };
        let visited: Vec<Pos> = area.cells().collect();
        assert_eq!(
            visited,
            vec![
                Pos { y: 1, x: 2 },
                Pos { y: 1, x: 3 },
                Pos { y: 2, x: 2 },
                Pos { y: 2, x: 3 },
            ]
        );
    }

    #[test]
    fn neighbors_keep_the_fixed_up_down_left_right_order() {
        let area = Rect::from_size(Size { height: 3, width: 3 });
        let inner: Vec<Pos> = area.neighbors(Pos { y: 1, x: 1 }).collect();
        assert_eq!(
            inner,
            vec![
                Pos { y: 0, x: 1 },
                Pos { y: 2, x: 1 },
                Pos { y: 1, x: 0 },
                Pos { y: 1, x: 2 },
            ]
        );

        let corner: Vec<Pos> = area.neighbors(Pos { y: 0, x: 0 }).collect();
        assert_eq!(corner, vec![Pos { y: 1, x: 0 }, Pos { y: 0, x: 1 }]);
    }

    #[test]
    fn intersect_clamps_to_the_shared_region() {
        let area = Rect::from_size(Size { height: 5, width: 5 });
        let other = Rect { pos: Pos { y: 3, x: -1 }, size: Size { height: 4, width: 3 } };
        let shared = area.intersect(other);
        assert_eq!(shared.pos, Pos { y: 3, x: 0 });
        assert_eq!(shared.size, Size { height: 2, width: 2 });
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let left = Rect { pos: Pos { y: 1, x: 1 }, size: Size { height: 3, width: 3 } };
        let right = Rect { pos: Pos { y: 1, x: 5 }, size: Size { height: 3, width: 3 } };
        assert!(!left.intersects(right));
        assert!(left.intersects(left));
    }
}
