//! Headless backend
//!
//! Implements every host collaborator in-process: targets fly as simple 2D
//! bodies launched from the anchor, HUD text and alerts are recorded and
//! logged, and sounds are logged at the configured volume. Also provides a
//! seeded autoplayer so a full game can run without a platform.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::host::{Alert, AnchorService, AudioService, HudSink, TargetService};
use crate::sim::{Sound, TargetId, TargetSpawn};

/// Downward acceleration applied to targets (units/s²)
pub const GRAVITY: f32 = 9.8;
/// Tap radius around a target's center
pub const HIT_RADIUS: f32 = 1.0;

/// Handle to the placed anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorHandle(pub u32);

/// A target in flight
#[derive(Debug, Clone)]
pub struct HeadlessTarget {
    pub id: TargetId,
    pub glyph: char,
    /// Position relative to the anchor
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    pub spin: f32,
    pub age: f64,
    pub lifespan: f64,
}

impl HeadlessTarget {
    fn from_spawn(spawn: &TargetSpawn) -> Self {
        Self {
            id: spawn.id,
            glyph: spawn.glyph,
            pos: Vec2::ZERO,
            // Unit mass: the impulse is the launch velocity
            vel: spawn.impulse,
            angle: 0.0,
            spin: spawn.torque,
            age: 0.0,
            lifespan: spawn.lifespan,
        }
    }

    fn integrate(&mut self, dt: f32) {
        self.vel.y -= GRAVITY * dt;
        self.pos += self.vel * dt;
        self.angle += self.spin * dt;
    }
}

/// In-process collaborator for every host service
#[derive(Debug)]
pub struct HeadlessBackend {
    /// Whether a display surface is bound
    pub display_bound: bool,
    /// Whether the AR session has a live tracking frame
    pub tracking_available: bool,
    volume: f32,
    hud: Option<String>,
    alerts: Vec<Alert>,
    anchor: Option<AnchorHandle>,
    next_anchor: u32,
    targets: Vec<HeadlessTarget>,
    sounds: Vec<Sound>,
}

impl HeadlessBackend {
    pub fn new(volume: f32) -> Self {
        Self {
            display_bound: true,
            tracking_available: true,
            volume,
            hud: None,
            alerts: Vec::new(),
            anchor: None,
            next_anchor: 1,
            targets: Vec::new(),
            sounds: Vec::new(),
        }
    }

    /// Step target physics; returns targets whose lifespan ran out (already removed)
    pub fn advance(&mut self, dt: f64) -> Vec<TargetId> {
        let mut expired = Vec::new();
        self.targets.retain_mut(|target| {
            target.integrate(dt as f32);
            target.age += dt;
            if target.age >= target.lifespan {
                expired.push(target.id);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn hud_text(&self) -> Option<&str> {
        self.hud.as_deref()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn anchor(&self) -> Option<AnchorHandle> {
        self.anchor
    }

    pub fn targets(&self) -> &[HeadlessTarget] {
        &self.targets
    }

    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }
}

impl HudSink for HeadlessBackend {
    fn set_hud_text(&mut self, text: &str) -> bool {
        if !self.display_bound {
            return false;
        }
        if self.hud.as_deref() != Some(text) {
            log::debug!("HUD: {text}");
            self.hud = Some(text.to_string());
        }
        true
    }

    fn show_alert(&mut self, alert: &Alert) {
        log::warn!("[{}] {}", alert.title, alert.message);
        self.alerts.push(alert.clone());
    }
}

impl AnchorService for HeadlessBackend {
    type Anchor = AnchorHandle;

    fn place_anchor(&mut self, forward: f32) -> Option<AnchorHandle> {
        if !self.tracking_available {
            return None;
        }
        let handle = AnchorHandle(self.next_anchor);
        self.next_anchor += 1;
        self.anchor = Some(handle);
        log::debug!("Anchor {handle:?} placed {forward} in front of the camera");
        Some(handle)
    }

    fn remove_anchor(&mut self, anchor: AnchorHandle) {
        if self.anchor == Some(anchor) {
            self.anchor = None;
            log::debug!("Anchor {anchor:?} removed");
        }
    }
}

impl TargetService for HeadlessBackend {
    fn spawn_target(&mut self, spawn: &TargetSpawn) -> bool {
        // Targets launch from the anchor node
        if !self.display_bound || self.anchor.is_none() {
            return false;
        }
        log::debug!("Spawn {} {:?} impulse {}", spawn.glyph, spawn.id, spawn.impulse);
        self.targets.push(HeadlessTarget::from_spawn(spawn));
        true
    }

    fn remove_target(&mut self, id: TargetId) {
        self.targets.retain(|t| t.id != id);
    }

    fn hit_test(&self, point: Vec2) -> Option<TargetId> {
        self.targets
            .iter()
            .map(|t| (t.id, t.pos.distance(point)))
            .filter(|(_, dist)| *dist <= HIT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

impl AudioService for HeadlessBackend {
    fn play_sound(&mut self, sound: Sound) {
        if self.volume > 0.0 {
            log::trace!("Sound {sound:?} at volume {:.2}", self.volume);
        }
        self.sounds.push(sound);
    }
}

/// Seeded player that taps some of the live targets
#[derive(Debug)]
pub struct AutoPlayer {
    rng: Pcg32,
    /// Chance a tap lands on a target instead of empty space
    pub accuracy: f64,
    /// Seconds between taps
    pub reaction: f64,
    cooldown: f64,
}

impl AutoPlayer {
    pub fn new(seed: u64, accuracy: f64, reaction: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
            reaction,
            cooldown: reaction,
        }
    }

    /// Where to tap this frame, if anywhere
    pub fn next_tap(&mut self, backend: &HeadlessBackend, dt: f64) -> Option<Vec2> {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return None;
        }
        self.cooldown = self.reaction;

        let targets = backend.targets();
        if !targets.is_empty() && self.rng.random_bool(self.accuracy) {
            let target = &targets[self.rng.random_range(0..targets.len())];
            Some(target.pos)
        } else {
            // Far outside any target
            Some(Vec2::new(0.0, -1000.0))
        }
    }
}
