use super::PatternModel;
use crate::game::Difficulty;
use crate::game::Move;
use rand::Rng;

/// Move-selection policy for the house side of the table.
/// Consults the pattern model as often as the difficulty allows and
/// falls back to a uniform throw whenever it lacks signal, so the
/// game is playable from the very first round.
pub struct Opponent;

impl Opponent {
    /// Picks the AI's throw for one round. `last` is the player's most
    /// recent recorded move, i.e. the antecedent the model predicts from;
    /// the move being answered this round is deliberately not visible here.
    pub fn decide<R: Rng>(
        difficulty: Difficulty,
        model: &PatternModel,
        last: Option<Move>,
        rng: &mut R,
    ) -> Move {
        last.filter(|_| rng.random::<f64>() < difficulty.exploit_chance())
            .and_then(|last| model.predict(last, difficulty))
            .inspect(|p| log::debug!("countering {} at {:.2} confidence", p.choice, p.confidence))
            .map(|p| p.choice.counter())
            .unwrap_or_else(|| Move::random(rng))
    }
}
