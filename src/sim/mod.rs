//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes from the frame timestamp only
//! - Seeded RNG only
//! - Side effects are returned as `Intent`s, never performed
//! - No rendering, tracking or audio dependencies

pub mod controller;
pub mod hud;
pub mod spawn;
pub mod state;
pub mod tick;

pub use controller::GameController;
pub use spawn::roll_target;
pub use state::{GameState, Intent, Session, Sound, TargetId, TargetSpawn};
pub use tick::{GameEvent, step};
