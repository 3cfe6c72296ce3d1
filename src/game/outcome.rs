use super::Move;
use serde::Serialize;

/// Result of one resolved round, from the player's perspective.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Outcome {
    #[serde(rename = "win")]
    PlayerWin,
    #[serde(rename = "lose")]
    AiWin,
    #[serde(rename = "draw")]
    Draw,
}

impl Outcome {
    /// Pure resolution of a pair of moves under the cyclic dominance rule.
    pub fn of(player: Move, ai: Move) -> Outcome {
        if player == ai {
            Outcome::Draw
        } else if player.beats(&ai) {
            Outcome::PlayerWin
        } else {
            Outcome::AiWin
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::PlayerWin => "win",
                Outcome::AiWin => "lose",
                Outcome::Draw => "draw",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                let forward = Outcome::of(a, b);
                let reverse = Outcome::of(b, a);
                match forward {
                    Outcome::PlayerWin => assert!(reverse == Outcome::AiWin),
                    Outcome::AiWin => assert!(reverse == Outcome::PlayerWin),
                    Outcome::Draw => assert!(reverse == Outcome::Draw),
                }
            }
        }
    }

    #[test]
    fn mirror_match_draws() {
        for a in Move::ALL {
            assert!(Outcome::of(a, a) == Outcome::Draw);
        }
    }

    #[test]
    fn rock_crushes_scissors() {
        assert!(Outcome::of(Move::Rock, Move::Scissors) == Outcome::PlayerWin);
        assert!(Outcome::of(Move::Scissors, Move::Paper) == Outcome::PlayerWin);
        assert!(Outcome::of(Move::Paper, Move::Rock) == Outcome::PlayerWin);
    }
}
