//! HUD message formatting

/// Shown on entering TapToStart
pub const TAP_TO_START: &str = "- TAP TO START -";

/// HUD while playing
pub fn playing(score: u64, lives: u32) -> String {
    format!("SCORE: {score} • LIVES: {lives}")
}

/// HUD after the last life is lost
pub fn game_over(score: u64) -> String {
    format!("GAME OVER! SCORE: {score}")
}
