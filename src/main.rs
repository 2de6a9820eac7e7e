//! Emoji Pop entry point
//!
//! Runs a headless session with a seeded autoplayer until the game ends.
//!
//! Usage: `emoji-pop [SEED] [CONFIG.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use emoji_pop::Settings;
use emoji_pop::headless::{AutoPlayer, HeadlessBackend};
use emoji_pop::host::HostShell;
use emoji_pop::sim::{GameController, GameState};

/// Frame duration (60 Hz display)
const FRAME_DT: f64 = 1.0 / 60.0;
/// Give up after this many simulated seconds
const MAX_SECONDS: f64 = 600.0;
/// Autoplayer aim and tap rate
const AUTOPLAY_ACCURACY: f64 = 0.6;
const AUTOPLAY_REACTION: f64 = 0.35;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed_arg = args.next().and_then(|s| match s.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("Ignoring invalid seed {s:?}");
            None
        }
    });
    let config = args.next().map(PathBuf::from);

    let settings = Settings::load(config.as_deref());
    let seed = seed_arg.or(settings.seed).unwrap_or_else(clock_seed);
    log::info!("Emoji Pop (headless) starting with seed: {seed}");

    let controller = GameController::new(seed, settings.tuning.clone());
    let backend = HeadlessBackend::new(settings.effective_volume());
    let mut shell = HostShell::new(controller, backend);
    let mut player = AutoPlayer::new(
        seed ^ 0x9E37_79B9_7F4A_7C15,
        AUTOPLAY_ACCURACY,
        AUTOPLAY_REACTION,
    );

    shell.scene_activated();
    shell.tap(glam::Vec2::ZERO);

    let mut now = 0.0;
    while shell.state() == GameState::Playing && now < MAX_SECONDS {
        now += FRAME_DT;
        for id in shell.backend_mut().advance(FRAME_DT) {
            shell.target_expired(id);
        }
        shell.frame(now);
        if shell.state() != GameState::Playing {
            break;
        }
        if let Some(point) = player.next_tap(shell.backend(), FRAME_DT) {
            shell.tap(point);
        }
    }

    let backend = shell.backend();
    let hud = backend.hud_text().unwrap_or_default();
    let seed = shell.controller().session().seed;
    match shell.state() {
        GameState::GameOver => log::info!("Game with seed {seed} ended after {now:.1}s"),
        state => log::warn!("Game with seed {seed} stopped after {now:.1}s in {state:?}"),
    }
    log::info!(
        "{} sounds played, {} alerts shown",
        backend.sounds().len(),
        backend.alerts().len()
    );
    println!("{hud}");
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
