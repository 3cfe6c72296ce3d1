use crate::game::Difficulty;
use crate::session::Session;
use serde::Serialize;

/// Summary served by the session lookup endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub player_score: u32,
    pub ai_score: u32,
    pub total_games: u32,
    pub difficulty: Difficulty,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            player_score: session.player_score(),
            ai_score: session.ai_score(),
            total_games: session.total_games(),
            difficulty: session.difficulty(),
        }
    }
}
