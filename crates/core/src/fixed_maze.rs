//! A maze with a fixed, prespecified layout. Walls never change; each
//! regeneration redraws spawn and object tokens over the layout's open cells.
//! Token positions can be constrained by stamping the tokens directly into
//! the layout text: those cells become the candidate pool, and only when more
//! tokens are requested than candidates exist does the surplus spill onto
//! ordinary open cells.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::char_grid::CharGrid;
use crate::defaults;
use crate::grid::Pos;
use crate::maze::{FLOOR_CELL, Layer, TextMaze};

/// Inputs for a fixed-layout maze. `None` token counts mean "use every token
/// already present in the layout text", which makes regeneration a no-op for
/// that token kind.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMazeConfig {
    pub entity_layer: String,
    pub variations_layer: Option<String>,
    pub num_spawns: Option<i32>,
    pub spawn_token: char,
    pub num_objects: Option<i32>,
    pub object_token: char,
    pub random_seed: u64,
}

impl FixedMazeConfig {
    /// A config with the crate-default tokens and seed for the given layout.
    pub fn new(entity_layer: impl Into<String>) -> FixedMazeConfig {
        FixedMazeConfig {
            entity_layer: entity_layer.into(),
            variations_layer: None,
            num_spawns: None,
            spawn_token: defaults::SPAWN_TOKEN,
            num_objects: None,
            object_token: defaults::OBJECT_TOKEN,
            random_seed: defaults::RANDOM_SEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedMazeError {
    EmptyEntityLayer,
    /// The variations text parses to a different extent than the entity text.
    LayerShapeMismatch,
    NegativeTokenCount,
    TokenNotPrintableAscii,
    /// More surplus tokens requested than the layout has open cells.
    NotEnoughOpenCells,
}

/// Owns the parsed layout, one RNG stream, and the cell pools regeneration
/// draws from. The pools are frozen at construction; only token placement
/// changes between regenerations.
#[derive(Debug)]
pub struct FixedMaze {
    config: FixedMazeConfig,
    rng: ChaCha8Rng,
    maze: TextMaze,
    open_cells: Vec<Pos>,
    spawn_sites: Vec<Pos>,
    object_sites: Vec<Pos>,
    spawn_count: usize,
    object_count: usize,
}

impl FixedMaze {
    /// Parses and validates the layout, then places the first set of tokens.
    pub fn new(config: FixedMazeConfig) -> Result<FixedMaze, FixedMazeError> {
        if !config.spawn_token.is_ascii_graphic() || !config.object_token.is_ascii_graphic() {
            return Err(FixedMazeError::TokenNotPrintableAscii);
        }
        if config.num_spawns.is_some_and(|n| n < 0) || config.num_objects.is_some_and(|n| n < 0) {
            return Err(FixedMazeError::NegativeTokenCount);
        }
        if config.entity_layer.lines().all(str::is_empty) {
            return Err(FixedMazeError::EmptyEntityLayer);
        }

        let entity_grid = CharGrid::new(&config.entity_layer);
        let mut maze = TextMaze::from_char_grid(&entity_grid);
        if let Some(variations_text) = &config.variations_layer {
            let variations_grid = CharGrid::new(variations_text);
            let same_shape = variations_grid.height() == entity_grid.height()
                && variations_grid.width() == entity_grid.width();
            if !same_shape {
                return Err(FixedMazeError::LayerShapeMismatch);
            }
            for pos in maze.area().cells() {
                let value = variations_grid.cell_at(pos.y as usize, pos.x as usize);
                if value != 0 {
                    maze.set_cell(Layer::Variations, pos, value);
                }
            }
        }

        let mut open_cells = Vec::new();
        let mut spawn_sites = Vec::new();
        let mut object_sites = Vec::new();
        for pos in maze.area().cells() {
            let cell = maze.cell(Layer::Entity, pos);
            if cell == FLOOR_CELL {
                open_cells.push(pos);
            } else if cell == config.spawn_token as u8 {
                spawn_sites.push(pos);
            } else if cell == config.object_token as u8 {
                object_sites.push(pos);
            }
        }

        let spawn_count =
            config.num_spawns.map_or(spawn_sites.len(), |n| n as usize);
        let object_count =
            config.num_objects.map_or(object_sites.len(), |n| n as usize);
        let surplus = spawn_count.saturating_sub(spawn_sites.len())
            + object_count.saturating_sub(object_sites.len());
        if surplus > open_cells.len() {
            return Err(FixedMazeError::NotEnoughOpenCells);
        }

        let rng = ChaCha8Rng::seed_from_u64(config.random_seed);
        let mut fixed = FixedMaze {
            config,
            rng,
            maze,
            open_cells,
            spawn_sites,
            object_sites,
            spawn_count,
            object_count,
        };
        fixed.regenerate();
        Ok(fixed)
    }

    /// Clears every token cell back to floor and redraws: first from the
    /// constrained candidate sites, then surplus tokens from the open-cell
    /// pool, all without replacement.
    pub fn regenerate(&mut self) {
        for &pos in
            self.open_cells.iter().chain(&self.spawn_sites).chain(&self.object_sites)
        {
            self.maze.set_cell(Layer::Entity, pos, FLOOR_CELL);
        }

        let mut site_pool = self.spawn_sites.clone();
        let spawn_take = self.spawn_count.min(site_pool.len());
        let mut spawns = take_random(&mut site_pool, spawn_take, &mut self.rng);
        let mut site_pool = self.object_sites.clone();
        let object_take = self.object_count.min(site_pool.len());
        let mut objects = take_random(&mut site_pool, object_take, &mut self.rng);

        let extra_spawns = self.spawn_count.saturating_sub(self.spawn_sites.len());
        let extra_objects = self.object_count.saturating_sub(self.object_sites.len());
        if extra_spawns + extra_objects > 0 {
            let mut open_pool = self.open_cells.clone();
            spawns.extend(take_random(&mut open_pool, extra_spawns, &mut self.rng));
            objects.extend(take_random(&mut open_pool, extra_objects, &mut self.rng));
        }

        let spawn_token = self.config.spawn_token as u8;
        for pos in spawns {
            self.maze.set_cell(Layer::Entity, pos, spawn_token);
        }
        let object_token = self.config.object_token as u8;
        for pos in objects {
            self.maze.set_cell(Layer::Entity, pos, object_token);
        }
    }

    pub fn entity_layer(&self) -> String {
        self.maze.text(Layer::Entity)
    }

    pub fn variations_layer(&self) -> String {
        self.maze.text(Layer::Variations)
    }

    pub fn config(&self) -> &FixedMazeConfig {
        &self.config
    }

    pub fn maze(&self) -> &TextMaze {
        &self.maze
    }
}

/// Removes and returns `count` uniformly drawn positions from `pool`.
fn take_random(pool: &mut Vec<Pos>, count: usize, rng: &mut ChaCha8Rng) -> Vec<Pos> {
    debug_assert!(count <= pool.len());
    let mut chosen = Vec::with_capacity(count);
    for _ in 0..count {
        let index = (rng.next_u64() % pool.len() as u64) as usize;
        chosen.push(pool.swap_remove(index));
    }
    chosen
}
