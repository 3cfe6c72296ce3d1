use crate::error::GameError;
use serde::Serialize;

/// How aggressively the AI exploits detected patterns.
/// Each level fixes two policy knobs: how often the pattern model is
/// consulted, and how much evidence it demands before predicting.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Observations of an antecedent required before the model may
    /// predict from it. Easy never predicts.
    pub fn min_samples(&self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Normal => Some(4),
            Difficulty::Hard => Some(2),
        }
    }

    /// Probability of consulting the pattern model on a given round.
    pub fn exploit_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Normal => 0.5,
            Difficulty::Hard => 1.0,
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = GameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Difficulty::Easy => "easy",
                Difficulty::Normal => "normal",
                Difficulty::Hard => "hard",
            }
        )
    }
}
