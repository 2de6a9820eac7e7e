//! Game controller
//!
//! Owns the session and tuning and exposes one entry point per host callback.
//! Every call returns the intents the host must execute, in order.

use super::state::{GameState, Intent, Session, TargetId};
use super::tick::{GameEvent, step};
use crate::tuning::Tuning;

/// Single owner of the game session
#[derive(Debug, Clone)]
pub struct GameController {
    session: Session,
    tuning: Tuning,
}

impl GameController {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            session: Session::new(seed),
            tuning,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn lives(&self) -> u32 {
        self.session.lives
    }

    /// Feed a raw event
    pub fn handle(&mut self, event: GameEvent) -> Vec<Intent> {
        step(&mut self.session, event, &self.tuning)
    }

    /// Scene became active: Loading -> TapToStart
    pub fn scene_activated(&mut self) -> Vec<Intent> {
        self.handle(GameEvent::SceneActivated)
    }

    /// Per-frame update with the frame timestamp in seconds
    pub fn update(&mut self, now: f64) -> Vec<Intent> {
        self.handle(GameEvent::Frame { now })
    }

    /// Tap, with the live target under it if the host's hit test found one
    pub fn tap(&mut self, target: Option<TargetId>) -> Vec<Intent> {
        self.handle(GameEvent::Tap { target })
    }

    pub fn target_expired(&mut self, id: TargetId) -> Vec<Intent> {
        self.handle(GameEvent::TargetExpired(id))
    }

    /// The backend refused a `SpawnTarget`; the core stops tracking it
    pub fn spawn_skipped(&mut self, id: TargetId) -> Vec<Intent> {
        self.handle(GameEvent::SpawnSkipped(id))
    }

    /// AR tracking came back; start over from TapToStart
    pub fn interruption_ended(&mut self) -> Vec<Intent> {
        self.handle(GameEvent::InterruptionEnded)
    }
}
