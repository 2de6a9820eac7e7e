//! Randomized target spawn parameters

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{Session, TargetSpawn};
use crate::tuning::Tuning;

/// Roll glyph, impulse and torque for a new target from the session RNG.
///
/// All draws are uniform: the glyph over the (multi)set, impulse x and torque
/// continuous over their inclusive ranges. Returns `None` for an empty glyph set.
pub fn roll_target(session: &mut Session, tuning: &Tuning) -> Option<TargetSpawn> {
    let glyph = *tuning.glyphs.choose(&mut session.rng)?;
    let (x_min, x_max) = tuning.impulse_x;
    let (t_min, t_max) = tuning.torque;
    let impulse = Vec2::new(session.rng.random_range(x_min..=x_max), tuning.impulse_y);
    let torque = session.rng.random_range(t_min..=t_max);

    Some(TargetSpawn {
        id: session.next_target_id(),
        glyph,
        impulse,
        torque,
        lifespan: tuning.target_lifespan,
    })
}
