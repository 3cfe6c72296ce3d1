use super::Move;
use super::Outcome;
use serde::Serialize;

/// Everything the client needs to render one resolved round.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    #[serde(rename = "result")]
    pub outcome: Outcome,
    pub player_choice: Move,
    pub ai_choice: Move,
    pub player_score: u32,
    pub ai_score: u32,
    pub total_games: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        let round = RoundResult {
            outcome: Outcome::PlayerWin,
            player_choice: Move::Rock,
            ai_choice: Move::Scissors,
            player_score: 1,
            ai_score: 0,
            total_games: 1,
        };
        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["result"], "win");
        assert_eq!(json["playerChoice"], "Batu");
        assert_eq!(json["aiChoice"], "Gunting");
        assert_eq!(json["totalGames"], 1);
    }
}
