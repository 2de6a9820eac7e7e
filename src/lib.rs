//! Emoji Pop - tap the emoji before they fall
//!
//! Core modules:
//! - `sim`: Deterministic game core (state machine, spawn loop, intents)
//! - `host`: Backend-agnostic shell executing intents against collaborators
//! - `headless`: In-process backend for running without a platform
//! - `settings` / `tuning`: Data-driven configuration

pub mod error;
pub mod headless;
pub mod host;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Lives granted at the start of every play-through
    pub const START_LIVES: u32 = 10;

    /// Grace period before the first target of a play-through (seconds)
    pub const INITIAL_SPAWN_DELAY: f64 = 3.0;
    /// Spawn cadence after the first target (seconds)
    pub const SPAWN_INTERVAL: f64 = 0.5;
    /// How long a target lives before it expires (seconds)
    pub const TARGET_LIFESPAN: f64 = 3.0;

    /// Horizontal impulse range (uniform)
    pub const IMPULSE_X_MIN: f32 = -5.0;
    pub const IMPULSE_X_MAX: f32 = 5.0;
    /// Fixed vertical impulse
    pub const IMPULSE_Y: f32 = 10.0;
    /// Initial torque range (uniform)
    pub const TORQUE_MIN: f32 = -0.2;
    pub const TORQUE_MAX: f32 = 0.2;

    /// Anchor distance in front of the camera
    pub const ANCHOR_DISTANCE: f32 = 0.5;

    /// Default glyph multiset
    pub const EMOJIS: [char; 12] = [
        '😀', '🤣', '😍', '🤪', '🥳', '🥸', '😎', '🤡', '🎃', '🤖', '💀', '🤗',
    ];
}
