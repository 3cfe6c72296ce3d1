use crate::error::GameError;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// One throw of the game. Dominance is cyclic:
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
///
/// Wire labels are the Indonesian names the client speaks.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum Move {
    #[serde(rename = "Batu")]
    Rock = 0,
    #[serde(rename = "Kertas")]
    Paper = 1,
    #[serde(rename = "Gunting")]
    Scissors = 2,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one beats.
    pub fn prey(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that beats this one.
    pub fn counter(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn beats(&self, other: &Move) -> bool {
        self.prey() == *other
    }

    /// Uniform throw.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Move {
        *Self::ALL
            .choose(rng)
            .expect("three moves to choose from")
    }
}

/// str conversion, rejecting anything outside the closed wire alphabet
impl TryFrom<&str> for Move {
    type Error = GameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Batu" => Ok(Move::Rock),
            "Kertas" => Ok(Move::Paper),
            "Gunting" => Ok(Move::Scissors),
            _ => Err(GameError::InvalidMove(s.to_string())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "Batu",
                Move::Paper => "Kertas",
                Move::Scissors => "Gunting",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for choice in Move::ALL {
            assert!(choice == Move::try_from(choice.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(Move::try_from("Lava").is_err());
        assert!(Move::try_from("batu").is_err());
        assert!(Move::try_from("").is_err());
    }

    #[test]
    fn dominance_is_cyclic() {
        for choice in Move::ALL {
            assert!(choice.counter().beats(&choice));
            assert!(choice.beats(&choice.prey()));
            assert!(choice.counter() != choice.prey());
        }
    }
}
