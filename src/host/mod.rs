//! Host shell
//!
//! Bridges platform callbacks (frames, taps, target expiry, AR session
//! notifications) into the [`GameController`] and executes the returned
//! intents against collaborator services. Any collaborator that is
//! unavailable makes the host skip that one operation; the next frame or
//! event tries again naturally.

pub mod tracking;

use glam::Vec2;

use crate::sim::{GameController, GameState, Intent, Sound, TargetId, TargetSpawn};
pub use tracking::{Alert, LimitedReason, TrackingState, tracking_alert};

/// Display surface for HUD text and alerts
pub trait HudSink {
    /// Returns false if no surface is bound
    fn set_hud_text(&mut self, text: &str) -> bool;
    fn show_alert(&mut self, alert: &Alert);
}

/// World anchor placement
pub trait AnchorService {
    type Anchor;
    /// `None` when there is no live tracking frame
    fn place_anchor(&mut self, forward: f32) -> Option<Self::Anchor>;
    fn remove_anchor(&mut self, anchor: Self::Anchor);
}

/// Target rendering and physics
pub trait TargetService {
    /// Returns false if the target could not be created (no view or anchor)
    fn spawn_target(&mut self, spawn: &TargetSpawn) -> bool;
    /// Removing an unknown target is a no-op
    fn remove_target(&mut self, id: TargetId);
    fn hit_test(&self, point: Vec2) -> Option<TargetId>;
}

/// Fire-and-forget sound playback
pub trait AudioService {
    fn play_sound(&mut self, sound: Sound);
}

/// Everything the host needs from a platform
pub trait Backend: HudSink + AnchorService + TargetService + AudioService {}

impl<T> Backend for T where T: HudSink + AnchorService + TargetService + AudioService {}

/// Owns the controller and the backend; holds at most one anchor
pub struct HostShell<B: Backend> {
    controller: GameController,
    backend: B,
    anchor: Option<B::Anchor>,
}

impl<B: Backend> HostShell<B> {
    pub fn new(controller: GameController, backend: B) -> Self {
        Self {
            controller,
            backend,
            anchor: None,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn state(&self) -> GameState {
        self.controller.state()
    }

    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn scene_activated(&mut self) {
        let intents = self.controller.scene_activated();
        self.execute(intents);
    }

    /// Called once per rendered frame
    pub fn frame(&mut self, now: f64) {
        // A placement that found no tracking frame is retried every frame
        if self.anchor.is_none() && self.controller.state() == GameState::Playing {
            self.place_anchor(self.controller.tuning().anchor_distance);
        }
        let intents = self.controller.update(now);
        self.execute(intents);
    }

    /// Called for each touch; hit-tests against live targets first
    pub fn tap(&mut self, point: Vec2) {
        let target = self.backend.hit_test(point);
        let intents = self.controller.tap(target);
        self.execute(intents);
    }

    /// Called by the physics backend when a target's lifespan runs out
    pub fn target_expired(&mut self, id: TargetId) {
        let intents = self.controller.target_expired(id);
        self.execute(intents);
    }

    pub fn session_failed(&mut self, message: &str) {
        log::error!("AR session failed: {message}");
        self.backend.show_alert(&Alert::session_failure(message));
    }

    pub fn session_interrupted(&mut self) {
        log::warn!("AR session interrupted");
        self.backend.show_alert(&Alert::session_interrupted());
    }

    /// Tracking is back but the anchor can't be trusted; start over
    pub fn interruption_ended(&mut self) {
        log::info!("AR session interruption ended");
        let intents = self.controller.interruption_ended();
        self.execute(intents);
    }

    pub fn tracking_changed(&mut self, state: TrackingState) {
        log::debug!("Tracking state: {state:?}");
        if let Some(alert) = tracking_alert(state) {
            self.backend.show_alert(&alert);
        }
    }

    fn execute(&mut self, intents: Vec<Intent>) {
        for intent in intents {
            match intent {
                Intent::SetHud(text) => {
                    if !self.backend.set_hud_text(&text) {
                        log::debug!("No display surface, HUD update skipped");
                    }
                }
                Intent::PlaceAnchor { distance } => self.place_anchor(distance),
                Intent::RemoveAnchor => {
                    if let Some(anchor) = self.anchor.take() {
                        self.backend.remove_anchor(anchor);
                    }
                }
                Intent::SpawnTarget(spawn) => {
                    if self.backend.spawn_target(&spawn) {
                        self.backend.play_sound(Sound::Spawn);
                    } else {
                        log::debug!("View unavailable, spawn of {:?} skipped", spawn.id);
                        let intents = self.controller.spawn_skipped(spawn.id);
                        self.execute(intents);
                    }
                }
                Intent::RemoveTarget(id) => self.backend.remove_target(id),
                Intent::PlaySound(sound) => self.backend.play_sound(sound),
            }
        }
    }

    fn place_anchor(&mut self, distance: f32) {
        if let Some(stale) = self.anchor.take() {
            self.backend.remove_anchor(stale);
        }
        self.anchor = self.backend.place_anchor(distance);
        if self.anchor.is_none() {
            log::debug!("No tracking frame, anchor placement skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    /// Backend that records every call
    #[derive(Default)]
    struct Recorder {
        hud_bound: bool,
        tracking: bool,
        hud: Vec<String>,
        alerts: Vec<Alert>,
        next_anchor: u32,
        anchors: Vec<u32>,
        removed_anchors: Vec<u32>,
        targets: Vec<TargetId>,
        sounds: Vec<Sound>,
    }

    impl Recorder {
        fn available() -> Self {
            Self {
                hud_bound: true,
                tracking: true,
                ..Default::default()
            }
        }
    }

    impl HudSink for Recorder {
        fn set_hud_text(&mut self, text: &str) -> bool {
            if self.hud_bound {
                self.hud.push(text.to_string());
            }
            self.hud_bound
        }

        fn show_alert(&mut self, alert: &Alert) {
            self.alerts.push(alert.clone());
        }
    }

    impl AnchorService for Recorder {
        type Anchor = u32;

        fn place_anchor(&mut self, _forward: f32) -> Option<u32> {
            if !self.tracking {
                return None;
            }
            self.next_anchor += 1;
            self.anchors.push(self.next_anchor);
            Some(self.next_anchor)
        }

        fn remove_anchor(&mut self, anchor: u32) {
            self.anchors.retain(|a| *a != anchor);
            self.removed_anchors.push(anchor);
        }
    }

    impl TargetService for Recorder {
        // Targets launch from the anchor, like a real scene
        fn spawn_target(&mut self, spawn: &TargetSpawn) -> bool {
            if self.anchors.is_empty() {
                return false;
            }
            self.targets.push(spawn.id);
            true
        }

        fn remove_target(&mut self, id: TargetId) {
            self.targets.retain(|t| *t != id);
        }

        // Everything left of the origin hits the oldest target
        fn hit_test(&self, point: Vec2) -> Option<TargetId> {
            if point.x < 0.0 {
                self.targets.first().copied()
            } else {
                None
            }
        }
    }

    impl AudioService for Recorder {
        fn play_sound(&mut self, sound: Sound) {
            self.sounds.push(sound);
        }
    }

    fn shell(backend: Recorder) -> HostShell<Recorder> {
        HostShell::new(GameController::new(7, Tuning::default()), backend)
    }

    fn play(shell: &mut HostShell<Recorder>) {
        shell.scene_activated();
        shell.tap(Vec2::new(1.0, 0.0));
        shell.frame(0.0);
        shell.frame(3.0);
    }

    #[test]
    fn test_tap_collects_hit_target() {
        let mut shell = shell(Recorder::available());
        play(&mut shell);
        assert_eq!(shell.backend().targets.len(), 1);
        assert_eq!(shell.backend().sounds, vec![Sound::Spawn]);

        shell.tap(Vec2::new(-1.0, 0.0));
        assert_eq!(shell.controller().score(), 1);
        assert!(shell.backend().targets.is_empty());
        assert_eq!(shell.backend().sounds.last(), Some(&Sound::Collect));

        // Miss
        shell.tap(Vec2::new(-1.0, 0.0));
        assert_eq!(shell.controller().score(), 1);
    }

    #[test]
    fn test_single_anchor_across_restarts() {
        let mut shell = shell(Recorder::available());
        for _ in 0..3 {
            play(&mut shell);
            assert_eq!(shell.backend().anchors.len(), 1);
            shell.interruption_ended();
            assert!(shell.backend().anchors.is_empty());
            assert!(!shell.has_anchor());
        }
        assert_eq!(shell.backend().removed_anchors, vec![1, 2, 3]);
    }

    #[test]
    fn test_unavailable_collaborators_are_skipped() {
        let mut shell = shell(Recorder::default());
        play(&mut shell);
        assert_eq!(shell.state(), GameState::Playing);
        assert!(shell.backend().hud.is_empty());
        assert!(!shell.has_anchor());

        // Tracking comes back: next restart places an anchor
        shell.backend_mut().tracking = true;
        shell.backend_mut().hud_bound = true;
        shell.interruption_ended();
        shell.tap(Vec2::ZERO);
        assert!(shell.has_anchor());
        assert_eq!(shell.backend().hud, vec!["- TAP TO START -".to_string()]);
    }

    #[test]
    fn test_game_over_clears_targets() {
        let mut shell = shell(Recorder::available());
        play(&mut shell);
        let mut now = 3.0;
        while shell.backend().targets.len() < 12 {
            now += 0.5;
            shell.frame(now);
        }
        let ids: Vec<_> = shell.backend().targets.clone();
        for id in &ids[..10] {
            // The backend drops its node before reporting the expiry
            shell.backend_mut().targets.retain(|t| t != id);
            shell.target_expired(*id);
        }
        assert_eq!(shell.state(), GameState::GameOver);
        assert!(shell.backend().targets.is_empty());
        assert_eq!(
            shell.backend().hud.last().map(String::as_str),
            Some("GAME OVER! SCORE: 0")
        );

        shell.target_expired(ids[10]);
        assert_eq!(shell.state(), GameState::GameOver);

        shell.tap(Vec2::ZERO);
        assert_eq!(shell.state(), GameState::TapToStart);
        assert!(shell.backend().anchors.is_empty());
    }

    #[test]
    fn test_anchor_retried_after_tracking_outage() {
        let mut backend = Recorder::available();
        backend.tracking = false;
        let mut shell = shell(backend);
        shell.scene_activated();
        shell.tap(Vec2::ZERO);
        assert_eq!(shell.state(), GameState::Playing);
        assert!(!shell.has_anchor());

        // Tracking is back one frame later
        shell.backend_mut().tracking = true;
        shell.frame(0.0);
        assert!(shell.has_anchor());
        assert_eq!(shell.backend().anchors.len(), 1);

        shell.frame(3.0);
        assert_eq!(shell.backend().targets.len(), 1);
        assert_eq!(shell.controller().session().live_target_count(), 1);
        assert_eq!(shell.backend().sounds, vec![Sound::Spawn]);

        // Retrying never stacks a second anchor
        shell.frame(3.1);
        assert_eq!(shell.backend().anchors.len(), 1);
    }

    #[test]
    fn test_refused_spawns_are_not_tracked() {
        let mut backend = Recorder::available();
        backend.tracking = false;
        let mut shell = shell(backend);
        shell.scene_activated();
        shell.tap(Vec2::ZERO);

        let mut now = 0.0;
        while now < 10.0 {
            shell.frame(now);
            now += 0.5;
        }
        assert!(shell.backend().targets.is_empty());
        assert!(shell.backend().sounds.is_empty());
        assert_eq!(shell.controller().session().live_target_count(), 0);
        assert_eq!(shell.controller().lives(), 10);
    }

    #[test]
    fn test_session_alerts() {
        let mut shell = shell(Recorder::available());
        shell.session_failed("camera unavailable");
        shell.session_interrupted();
        shell.tracking_changed(TrackingState::Limited(LimitedReason::Initializing));
        shell.tracking_changed(TrackingState::NotAvailable);
        assert_eq!(
            shell.backend().alerts,
            vec![
                Alert::new("Session Failure", "camera unavailable"),
                Alert::new("AR Session", "Session was interrupted 😔"),
                Alert::new("Tracking Limited", "AR not available"),
            ]
        );
    }
}
