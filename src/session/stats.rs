use crate::game::Difficulty;
use serde::Serialize;

/// Aggregate view of one session, as served by the stats endpoint.
/// `win_rate` is the player's share of decided-or-drawn games in 0..=1.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_games: u32,
    pub player_score: u32,
    pub ai_score: u32,
    pub draws: u32,
    pub win_rate: f64,
    pub difficulty: Difficulty,
    pub ai_pattern_count: u32,
}
