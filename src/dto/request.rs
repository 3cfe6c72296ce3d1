//! Bodies arrive with free-form strings for the move and difficulty;
//! the handlers validate them into closed enums before any session
//! lock is taken.

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub session_id: String,
    pub player_choice: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reset {
    pub session_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDifficulty {
    pub session_id: String,
    pub difficulty: String,
}
