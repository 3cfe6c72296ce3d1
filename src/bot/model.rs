use crate::Confidence;
use crate::game::Difficulty;
use crate::game::Move;

/// Online order-1 Markov model over one player's move history.
/// Rows are the antecedent move, cells count the move that followed.
/// The AI-win tally per thrown move breaks prediction ties toward the
/// counter the player has punished least, so the AI never becomes
/// exploitably deterministic on tied evidence.
#[derive(Debug, Default, Clone)]
pub struct PatternModel {
    transitions: [[u32; 3]; 3],
    wins: [u32; 3],
}

/// A predicted next player move and how concentrated the evidence is.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub choice: Move,
    pub confidence: Confidence,
}

impl PatternModel {
    /// Records that `next` followed `prev` in the player's history. O(1).
    pub fn observe(&mut self, prev: Move, next: Move) {
        self.transitions[prev as usize][next as usize] += 1;
    }

    /// Records a round the AI won by throwing `choice`.
    pub fn record_win(&mut self, choice: Move) {
        self.wins[choice as usize] += 1;
    }

    /// Most frequent successor of `last`, once the difficulty's sample
    /// threshold is met for that antecedent. Ties prefer the candidate
    /// whose counter has won least for the AI, then the first wire label.
    pub fn predict(&self, last: Move, difficulty: Difficulty) -> Option<Prediction> {
        let min = difficulty.min_samples()?;
        let row = self.transitions[last as usize];
        let total = row.iter().sum::<u32>();
        if total < min {
            return None;
        }
        let peak = *row.iter().max().expect("row has three cells");
        let choice = Move::ALL
            .into_iter()
            .filter(|m| row[*m as usize] == peak)
            .min_by_key(|m| (self.wins[m.counter() as usize], m.to_string()))?;
        Some(Prediction {
            choice,
            confidence: Confidence::from(row[choice as usize]) / Confidence::from(total),
        })
    }

    /// Number of antecedent moves observed often enough to exploit.
    pub fn pattern_count(&self, difficulty: Difficulty) -> u32 {
        match difficulty.min_samples() {
            None => 0,
            Some(min) => self
                .transitions
                .iter()
                .filter(|row| row.iter().sum::<u32>() >= min)
                .count() as u32,
        }
    }

    /// Forgets everything, counts and win tallies alike.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_after_threshold() {
        let mut model = PatternModel::default();
        model.observe(Move::Rock, Move::Rock);
        assert!(model.predict(Move::Rock, Difficulty::Hard).is_none());
        model.observe(Move::Rock, Move::Rock);
        let p = model.predict(Move::Rock, Difficulty::Hard).unwrap();
        assert_eq!(p.choice, Move::Rock);
        assert_eq!(p.confidence, 1.0);
    }

    #[test]
    fn easy_never_predicts() {
        let mut model = PatternModel::default();
        for _ in 0..20 {
            model.observe(Move::Rock, Move::Rock);
        }
        assert!(model.predict(Move::Rock, Difficulty::Easy).is_none());
        assert_eq!(model.pattern_count(Difficulty::Easy), 0);
    }

    #[test]
    fn normal_demands_more_evidence_than_hard() {
        let mut model = PatternModel::default();
        for _ in 0..3 {
            model.observe(Move::Paper, Move::Scissors);
        }
        assert!(model.predict(Move::Paper, Difficulty::Hard).is_some());
        assert!(model.predict(Move::Paper, Difficulty::Normal).is_none());
        model.observe(Move::Paper, Move::Scissors);
        assert!(model.predict(Move::Paper, Difficulty::Normal).is_some());
    }

    #[test]
    fn antecedents_are_independent() {
        let mut model = PatternModel::default();
        model.observe(Move::Rock, Move::Paper);
        model.observe(Move::Rock, Move::Paper);
        assert!(model.predict(Move::Rock, Difficulty::Hard).is_some());
        assert!(model.predict(Move::Paper, Difficulty::Hard).is_none());
        assert!(model.predict(Move::Scissors, Difficulty::Hard).is_none());
    }

    #[test]
    fn confidence_is_the_successor_share() {
        let mut model = PatternModel::default();
        model.observe(Move::Rock, Move::Paper);
        model.observe(Move::Rock, Move::Paper);
        model.observe(Move::Rock, Move::Paper);
        model.observe(Move::Rock, Move::Rock);
        let p = model.predict(Move::Rock, Difficulty::Normal).unwrap();
        assert_eq!(p.choice, Move::Paper);
        assert_eq!(p.confidence, 0.75);
    }

    #[test]
    fn ties_prefer_the_least_punished_counter() {
        let mut model = PatternModel::default();
        model.observe(Move::Rock, Move::Paper);
        model.observe(Move::Rock, Move::Scissors);
        // Rock is the counter of Scissors, so a Rock win steers the
        // tie toward predicting Paper instead.
        model.record_win(Move::Rock);
        let p = model.predict(Move::Rock, Difficulty::Hard).unwrap();
        assert_eq!(p.choice, Move::Paper);
    }

    #[test]
    fn ties_fall_back_to_label_order() {
        let mut model = PatternModel::default();
        model.observe(Move::Rock, Move::Rock);
        model.observe(Move::Rock, Move::Paper);
        // Batu < Kertas, so the Rock candidate wins the tie.
        let p = model.predict(Move::Rock, Difficulty::Hard).unwrap();
        assert_eq!(p.choice, Move::Rock);
        assert_eq!(p.confidence, 0.5);
    }

    #[test]
    fn pattern_count_tracks_learned_antecedents() {
        let mut model = PatternModel::default();
        assert_eq!(model.pattern_count(Difficulty::Hard), 0);
        model.observe(Move::Rock, Move::Rock);
        model.observe(Move::Rock, Move::Rock);
        assert_eq!(model.pattern_count(Difficulty::Hard), 1);
        assert_eq!(model.pattern_count(Difficulty::Normal), 0);
        model.observe(Move::Scissors, Move::Paper);
        model.observe(Move::Scissors, Move::Paper);
        assert_eq!(model.pattern_count(Difficulty::Hard), 2);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut model = PatternModel::default();
        model.observe(Move::Rock, Move::Rock);
        model.observe(Move::Rock, Move::Rock);
        model.record_win(Move::Paper);
        model.clear();
        assert!(model.predict(Move::Rock, Difficulty::Hard).is_none());
        assert_eq!(model.pattern_count(Difficulty::Hard), 0);
    }
}
