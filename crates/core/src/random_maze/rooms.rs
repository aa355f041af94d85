//! Non-overlapping room placement on the odd cell lattice. Odd origins plus
//! odd extents guarantee at least one wall cell between any two rooms and
//! between a room and the maze border, which the corridor and connection
//! passes rely on.

use rand_chacha::ChaCha8Rng;

use super::sample;
use crate::grid::{Pos, Rect, Size};

pub(super) struct RoomPlacement {
    pub(super) min_size: i32,
    pub(super) max_size: i32,
    pub(super) max_rooms: i32,
    pub(super) retry_count: i32,
}

/// Up to `max_rooms` mutually disjoint rectangles inside `area`, each tried
/// up to `retry_count` times. Repeated failure just yields fewer rooms.
pub(super) fn place_rooms(
    area: Rect,
    placement: &RoomPlacement,
    rng: &mut ChaCha8Rng,
) -> Vec<Rect> {
    let mut rooms: Vec<Rect> = Vec::new();
    for _ in 0..placement.max_rooms {
        for _ in 0..placement.retry_count {
            let Some(candidate) = sample_room(area, placement, rng) else {
                // No room of the requested size fits this area at all.
                return rooms;
            };
            if rooms.iter().any(|room| room.intersects(candidate)) {
                continue;
            }
            rooms.push(candidate);
            break;
        }
    }
    rooms
}

fn sample_room(area: Rect, placement: &RoomPlacement, rng: &mut ChaCha8Rng) -> Option<Rect> {
    let height = sample::odd_in_range(
        rng,
        placement.min_size,
        placement.max_size.min(area.size.height - 2),
    )?;
    let width = sample::odd_in_range(
        rng,
        placement.min_size,
        placement.max_size.min(area.size.width - 2),
    )?;
    let y = sample::odd_in_range(rng, 1, area.size.height - height - 1)?;
    let x = sample::odd_in_range(rng, 1, area.size.width - width - 1)?;
    Some(Rect {
        pos: Pos { y: area.pos.y + y, x: area.pos.x + x },
        size: Size { height, width },
    })
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn standard_placement() -> RoomPlacement {
        RoomPlacement { min_size: 3, max_size: 5, max_rooms: 4, retry_count: 100 }
    }

    #[test]
    fn rooms_are_odd_aligned_and_inside_the_border() {
        let area = Rect::from_size(Size { height: 17, width: 17 });
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let rooms = place_rooms(area, &standard_placement(), &mut rng);
        assert!(!rooms.is_empty());
        assert!(rooms.len() <= 4);
        for room in &rooms {
            assert_eq!(room.pos.y % 2, 1, "odd origin row: {room:?}");
            assert_eq!(room.pos.x % 2, 1, "odd origin column: {room:?}");
            assert_eq!(room.size.height % 2, 1, "odd height: {room:?}");
            assert_eq!(room.size.width % 2, 1, "odd width: {room:?}");
            assert!((3..=5).contains(&room.size.height));
            assert!((3..=5).contains(&room.size.width));
            assert!(room.pos.y >= 1 && room.pos.y + room.size.height <= 16);
            assert!(room.pos.x >= 1 && room.pos.x + room.size.width <= 16);
        }
    }

    #[test]
    fn rooms_never_touch_each_other() {
        let area = Rect::from_size(Size { height: 21, width: 21 });
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let rooms = place_rooms(
            area,
            &RoomPlacement { min_size: 3, max_size: 5, max_rooms: 8, retry_count: 200 },
            &mut rng,
        );
        for (index, left) in rooms.iter().enumerate() {
            for right in rooms.iter().skip(index + 1) {
                assert!(!left.intersects(*right), "{left:?} overlaps {right:?}");
                // Odd alignment forces a gap of at least one wall cell.
                let gap_y = (left.pos.y - (right.pos.y + right.size.height))
                    .max(right.pos.y - (left.pos.y + left.size.height));
                let gap_x = (left.pos.x - (right.pos.x + right.size.width))
                    .max(right.pos.x - (left.pos.x + left.size.width));
                assert!(gap_y >= 1 || gap_x >= 1, "{left:?} touches {right:?}");
            }
        }
    }

    #[test]
    fn oversized_requests_degrade_to_no_rooms() {
        let area = Rect::from_size(Size { height: 5, width: 5 });
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let rooms = place_rooms(
            area,
            &RoomPlacement { min_size: 7, max_size: 9, max_rooms: 3, retry_count: 10 },
            &mut rng,
        );
        assert!(rooms.is_empty());
    }
}
