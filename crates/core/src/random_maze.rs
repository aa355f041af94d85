//! Seeded multi-stage maze generation: room placement, corridor carving,
//! region connection, simplification, variation labeling, entity scatter, and
//! connection finalization, in that fixed order. All randomness flows through
//! one owned ChaCha stream, so the draw order of the stages is part of the
//! determinism contract.

mod connect;
mod fill;
mod rooms;
mod sample;
mod scatter;
mod simplify;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::grid::{Pos, Size};
use crate::maze::{FLOOR_CELL, Layer, TextMaze, WALL_CELL};
use rooms::RoomPlacement;

pub const HORIZONTAL_DOOR_CELL: u8 = b'H';
pub const VERTICAL_DOOR_CELL: u8 = b'I';

/// Everything one generator run depends on. Deserializes from partial JSON;
/// missing fields take the crate defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub height: i32,
    pub width: i32,
    pub max_rooms: i32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub retry_count: i32,
    pub extra_connection_probability: f64,
    pub max_variations: i32,
    pub has_doors: bool,
    pub simplify: bool,
    pub spawns_per_room: i32,
    pub spawn_token: char,
    pub objects_per_room: i32,
    pub object_token: char,
    pub random_seed: u64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            height: defaults::HEIGHT,
            width: defaults::WIDTH,
            max_rooms: defaults::MAX_ROOMS,
            room_min_size: defaults::ROOM_MIN_SIZE,
            room_max_size: defaults::ROOM_MAX_SIZE,
            retry_count: defaults::RETRY_COUNT,
            extra_connection_probability: defaults::EXTRA_CONNECTION_PROBABILITY,
            max_variations: defaults::MAX_VARIATIONS,
            has_doors: defaults::HAS_DOORS,
            simplify: defaults::SIMPLIFY,
            spawns_per_room: defaults::SPAWNS_PER_ROOM,
            spawn_token: defaults::SPAWN_TOKEN,
            objects_per_room: defaults::OBJECTS_PER_ROOM,
            object_token: defaults::OBJECT_TOKEN,
            random_seed: defaults::RANDOM_SEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveExtents,
    /// The carving passes work on the odd cell lattice and need odd extents.
    EvenExtents,
    RoomSizeBounds,
    NegativeRoomCount,
    NegativeRetryCount,
    ProbabilityOutOfRange,
    VariationCountOutOfRange,
    NegativeTokenCount,
    TokenNotPrintableAscii,
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height <= 0 || self.width <= 0 {
            return Err(ConfigError::NonPositiveExtents);
        }
        if self.height % 2 == 0 || self.width % 2 == 0 {
            return Err(ConfigError::EvenExtents);
        }
        if self.room_min_size < 1 || self.room_min_size > self.room_max_size {
            return Err(ConfigError::RoomSizeBounds);
        }
        if self.max_rooms < 0 {
            return Err(ConfigError::NegativeRoomCount);
        }
        if self.retry_count < 0 {
            return Err(ConfigError::NegativeRetryCount);
        }
        if !(0.0..=1.0).contains(&self.extra_connection_probability) {
            return Err(ConfigError::ProbabilityOutOfRange);
        }
        if !(1..=26).contains(&self.max_variations) {
            return Err(ConfigError::VariationCountOutOfRange);
        }
        if self.spawns_per_room < 0 || self.objects_per_room < 0 {
            return Err(ConfigError::NegativeTokenCount);
        }
        if !self.spawn_token.is_ascii_graphic() || !self.object_token.is_ascii_graphic() {
            return Err(ConfigError::TokenNotPrintableAscii);
        }
        Ok(())
    }
}

/// Owns one config, one live maze, and one RNG stream. `regenerate` replaces
/// the maze but advances the stream, so repeated calls yield a deterministic
/// sequence of distinct mazes from one seed.
pub struct RandomMaze {
    config: MazeConfig,
    rng: ChaCha8Rng,
    maze: TextMaze,
}

impl RandomMaze {
    /// Validates the config and generates the first maze.
    pub fn new(config: MazeConfig) -> Result<RandomMaze, ConfigError> {
        config.validate()?;
        let size = Size { height: config.height, width: config.width };
        let rng = ChaCha8Rng::seed_from_u64(config.random_seed);
        let mut generator = RandomMaze { config, rng, maze: TextMaze::new(size) };
        generator.regenerate();
        Ok(generator)
    }

    /// Builds a fresh maze in place, drawing further values from the owned
    /// RNG stream.
    pub fn regenerate(&mut self) {
        let size = Size { height: self.config.height, width: self.config.width };
        self.maze = TextMaze::new(size);
        let area = self.maze.area();

        // Rooms first: carve each placed rectangle as floor under a distinct
        // 1-based region id. Placement failures just mean fewer rooms.
        let placement = RoomPlacement {
            min_size: self.config.room_min_size,
            max_size: self.config.room_max_size,
            max_rooms: self.config.max_rooms,
            retry_count: self.config.retry_count,
        };
        let room_rects = rooms::place_rooms(area, &placement, &mut self.rng);
        for (index, room) in room_rects.iter().enumerate() {
            let id = index as u32 + 1;
            for pos in area.intersect(*room).cells() {
                self.maze.set_cell(Layer::Entity, pos, FLOOR_CELL);
                self.maze.set_cell_id(pos, id);
            }
        }
        let room_count = room_rects.len() as u32;

        // Thread corridors through all remaining vacant space.
        fill::fill_walls_with_corridors(room_count + 1, &mut self.maze, &mut self.rng);

        // Open at least one cell between every pair of adjacent regions.
        let connections = connect::connect_regions(
            self.config.extra_connection_probability,
            &mut self.maze,
            &mut self.rng,
        );

        if self.config.simplify {
            // Connection cells are exempt so every region keeps its opened
            // crossings; step 8 walls the ones left stranded on both sides.
            let protected: Vec<Pos> =
                connections.iter().map(|connection| connection.pos).collect();
            simplify::remove_dead_ends(FLOOR_CELL, WALL_CELL, &protected, &mut self.maze);
            simplify::remove_horseshoe_bends(WALL_CELL, &protected, &mut self.maze);
        }

        // Cosmetic per-room labels on the variations layer.
        let variation_count = self.config.max_variations as u32;
        for pos in area.cells() {
            let id = self.maze.cell_id(pos);
            if id >= 1 && id <= room_count {
                let label = b'A' + ((id - 1) % variation_count) as u8;
                self.maze.set_cell(Layer::Variations, pos, label);
            }
        }

        scatter::add_tokens_to_rooms(
            &room_rects,
            self.config.spawns_per_room,
            self.config.spawn_token as u8,
            FLOOR_CELL,
            &mut self.maze,
            &mut self.rng,
        );
        scatter::add_tokens_to_rooms(
            &room_rects,
            self.config.objects_per_room,
            self.config.object_token as u8,
            FLOOR_CELL,
            &mut self.maze,
            &mut self.rng,
        );

        // Classify each connection cell now that simplification may have
        // walled off one of its sides.
        for connection in &connections {
            let ahead = self.maze.cell(Layer::Entity, connection.pos.shifted(connection.toward));
            let behind = self
                .maze
                .cell(Layer::Entity, connection.pos.shifted(connection.toward.reversed()));
            let cell = if ahead == WALL_CELL && behind == WALL_CELL {
                WALL_CELL
            } else if self.config.has_doors {
                if connection.toward.dx == 0 {
                    HORIZONTAL_DOOR_CELL
                } else {
                    VERTICAL_DOOR_CELL
                }
            } else {
                FLOOR_CELL
            };
            self.maze.set_cell(Layer::Entity, connection.pos, cell);
        }
    }

    pub fn entity_layer(&self) -> String {
        self.maze.text(Layer::Entity)
    }

    pub fn variations_layer(&self) -> String {
        self.maze.text(Layer::Variations)
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn maze(&self) -> &TextMaze {
        &self.maze
    }
}
