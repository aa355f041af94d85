//! Default generation parameters shared by the library and the command-line
//! tools.

pub const HEIGHT: i32 = 11;
pub const WIDTH: i32 = 11;
pub const MAX_ROOMS: i32 = 4;
pub const ROOM_MIN_SIZE: i32 = 3;
pub const ROOM_MAX_SIZE: i32 = 5;
pub const RETRY_COUNT: i32 = 1000;
pub const EXTRA_CONNECTION_PROBABILITY: f64 = 0.0;
pub const MAX_VARIATIONS: i32 = 26;
pub const HAS_DOORS: bool = false;
pub const SIMPLIFY: bool = true;
pub const SPAWNS_PER_ROOM: i32 = 0;
pub const SPAWN_TOKEN: char = 'P';
pub const OBJECTS_PER_ROOM: i32 = 0;
pub const OBJECT_TOKEN: char = 'G';
pub const RANDOM_SEED: u64 = 0;
