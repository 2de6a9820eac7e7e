//! Event-driven state machine step
//!
//! Advances the session for one event and returns the intents the host must
//! execute. Time only enters through `GameEvent::Frame`.

use super::hud;
use super::spawn::roll_target;
use super::state::{GameState, Intent, Session, Sound, TargetId};
use crate::tuning::Tuning;

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The scene became active (host finished loading)
    SceneActivated,
    /// One rendered frame at the given timestamp (seconds)
    Frame { now: f64 },
    /// Tap anywhere; `target` is the live target under the finger, if any
    Tap { target: Option<TargetId> },
    /// A spawned target's lifespan elapsed without being collected
    TargetExpired(TargetId),
    /// The backend could not create a spawned target (no view or anchor)
    SpawnSkipped(TargetId),
    /// AR tracking resumed after an interruption
    InterruptionEnded,
}

/// Advance the session by one event
pub fn step(session: &mut Session, event: GameEvent, tuning: &Tuning) -> Vec<Intent> {
    let mut intents = Vec::new();

    match (session.state, event) {
        (GameState::Loading, GameEvent::SceneActivated) => start_game(session, &mut intents),
        (GameState::Loading, _) => {}

        (_, GameEvent::InterruptionEnded) => start_game(session, &mut intents),

        (GameState::TapToStart, GameEvent::Tap { .. }) => {
            play_game(session, tuning, &mut intents)
        }

        (GameState::Playing, GameEvent::Frame { now }) => {
            update(session, now, tuning, &mut intents)
        }
        (GameState::Playing, GameEvent::Tap { target: Some(id) }) => {
            // Already-collected or expired targets can still be under the finger
            if session.live_targets.remove(&id) {
                session.score += 1;
                intents.push(Intent::RemoveTarget(id));
                intents.push(Intent::PlaySound(Sound::Collect));
            }
        }
        (GameState::Playing, GameEvent::TargetExpired(id)) => {
            if session.live_targets.remove(&id) {
                session.lives = session.lives.saturating_sub(1);
                intents.push(Intent::PlaySound(Sound::Die));
                if session.lives == 0 {
                    stop_game(session, &mut intents);
                }
            } else {
                log::debug!("Ignoring expiry of unknown target {id:?}");
            }
        }

        (GameState::Playing, GameEvent::SpawnSkipped(id)) => {
            session.live_targets.remove(&id);
        }

        (GameState::GameOver, GameEvent::Tap { .. }) => start_game(session, &mut intents),

        (state, GameEvent::TargetExpired(id)) => {
            log::debug!("Ignoring expiry of target {id:?} in {state:?}");
        }
        _ => {}
    }

    intents
}

/// Per-frame spawn clock and HUD refresh (Playing only)
fn update(session: &mut Session, now: f64, tuning: &Tuning, intents: &mut Vec<Intent>) {
    let spawn_at = *session
        .spawn_clock
        .get_or_insert(now + tuning.initial_spawn_delay);

    if now >= spawn_at {
        match roll_target(session, tuning) {
            Some(spawn) => {
                session.live_targets.insert(spawn.id);
                intents.push(Intent::SpawnTarget(spawn));
            }
            None => log::warn!("Empty glyph set, nothing to spawn"),
        }
        session.spawn_clock = Some(now + tuning.spawn_interval);
    }

    intents.push(Intent::SetHud(hud::playing(session.score, session.lives)));
}

/// Enter TapToStart (scene activation, restart after game over, tracking reset)
fn start_game(session: &mut Session, intents: &mut Vec<Intent>) {
    log::info!("{:?} -> TapToStart", session.state);
    session.state = GameState::TapToStart;
    intents.push(Intent::SetHud(hud::TAP_TO_START.to_string()));
    clear_targets(session, intents);
    if session.anchor_present {
        intents.push(Intent::RemoveAnchor);
        session.anchor_present = false;
    }
}

/// Enter Playing with a fresh score, lives and spawn clock
fn play_game(session: &mut Session, tuning: &Tuning, intents: &mut Vec<Intent>) {
    log::info!("TapToStart -> Playing");
    session.state = GameState::Playing;
    session.score = 0;
    session.lives = tuning.start_lives;
    session.spawn_clock = None;
    if session.anchor_present {
        intents.push(Intent::RemoveAnchor);
    }
    intents.push(Intent::PlaceAnchor {
        distance: tuning.anchor_distance,
    });
    session.anchor_present = true;
}

/// Enter GameOver; remaining targets are removed so they can't expire later
fn stop_game(session: &mut Session, intents: &mut Vec<Intent>) {
    log::info!("Playing -> GameOver (score {})", session.score);
    session.state = GameState::GameOver;
    intents.push(Intent::SetHud(hud::game_over(session.score)));
    clear_targets(session, intents);
}

fn clear_targets(session: &mut Session, intents: &mut Vec<Intent>) {
    for id in std::mem::take(&mut session.live_targets) {
        intents.push(Intent::RemoveTarget(id));
    }
}
