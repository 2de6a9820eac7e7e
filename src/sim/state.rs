//! Game state and core simulation types
//!
//! Everything one play-through mutates lives in [`Session`].

use std::collections::BTreeSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Scene not active yet
    #[default]
    Loading,
    /// Waiting for the player to tap
    TapToStart,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a tap to return to TapToStart
    GameOver,
}

/// Identity of a spawned target. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

/// Sound effects requested from the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// Target spawned
    Spawn,
    /// Target expired, life lost
    Die,
    /// Target tapped
    Collect,
}

/// Physics parameters for a new target, handed to the rendering/physics backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpawn {
    pub id: TargetId,
    pub glyph: char,
    /// Initial impulse (x random, y fixed)
    pub impulse: Vec2,
    /// Initial angular impulse
    pub torque: f32,
    /// Seconds until the target expires
    pub lifespan: f64,
}

/// A side-effecting request emitted by the core for a collaborator to execute
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetHud(String),
    PlaceAnchor { distance: f32 },
    RemoveAnchor,
    SpawnTarget(TargetSpawn),
    RemoveTarget(TargetId),
    PlaySound(Sound),
}

/// Mutable state of the game across play-throughs
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the RNG was created from
    pub seed: u64,
    pub state: GameState,
    pub score: u64,
    pub lives: u32,
    /// Timestamp of the next spawn; `None` until the first frame of a play-through
    pub spawn_clock: Option<f64>,
    pub anchor_present: bool,
    /// Targets spawned this play-through that are neither collected nor expired
    pub(crate) live_targets: BTreeSet<TargetId>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Session {
    /// Create a session in `Loading` with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            state: GameState::Loading,
            score: 0,
            lives: 0,
            spawn_clock: None,
            anchor_present: false,
            live_targets: BTreeSet::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new target ID
    pub fn next_target_id(&mut self) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// True if the target is still in play
    pub fn is_live(&self, id: TargetId) -> bool {
        self.live_targets.contains(&id)
    }

    /// Live targets in ascending id order
    pub fn live_targets(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.live_targets.iter().copied()
    }

    pub fn live_target_count(&self) -> usize {
        self.live_targets.len()
    }
}
