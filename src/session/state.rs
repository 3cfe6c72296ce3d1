use super::Stats;
use crate::bot::Opponent;
use crate::bot::PatternModel;
use crate::game::Difficulty;
use crate::game::Move;
use crate::game::Outcome;
use crate::game::RoundResult;
use std::time::Duration;
use std::time::Instant;

/// Single source of truth for one player's game.
/// Owned by the Lobby behind a per-session lock; every engine
/// operation takes `&mut self`, so a round is atomic under that lock.
///
/// Scores are stored per bucket and `total_games` is derived, which
/// makes `total == wins + losses + draws` hold by construction.
#[derive(Debug)]
pub struct Session {
    id: String,
    difficulty: Difficulty,
    player_score: u32,
    ai_score: u32,
    draws: u32,
    history: Vec<Move>,
    model: PatternModel,
    created_at: Instant,
    last_activity: Instant,
    expired: bool,
}

impl Session {
    pub fn new(id: String) -> Self {
        let now = Instant::now();
        Self {
            id,
            difficulty: Difficulty::default(),
            player_score: 0,
            ai_score: 0,
            draws: 0,
            history: Vec::new(),
            model: PatternModel::default(),
            created_at: now,
            last_activity: now,
            expired: false,
        }
    }

    /// Resolves one round against the AI.
    ///
    /// The AI decides from the model as it stood before this round's
    /// move arrived: its prediction is keyed on the previous last move,
    /// never on the move it is answering. Only then does the model
    /// learn the newly completed antecedent pair.
    pub fn play_round(&mut self, player: Move) -> RoundResult {
        let ref mut rng = rand::rng();
        let last = self.history.last().copied();
        let ai = Opponent::decide(self.difficulty, &self.model, last, rng);
        if let Some(prev) = last {
            self.model.observe(prev, player);
        }
        self.history.push(player);
        let outcome = Outcome::of(player, ai);
        match outcome {
            Outcome::PlayerWin => self.player_score += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::AiWin => {
                self.ai_score += 1;
                self.model.record_win(ai);
            }
        }
        self.touch();
        log::debug!("session {}: {} vs {} -> {}", self.id, player, ai, outcome);
        RoundResult {
            outcome,
            player_choice: player,
            ai_choice: ai,
            player_score: self.player_score,
            ai_score: self.ai_score,
            total_games: self.total_games(),
        }
    }

    /// Clears scores, history, and learned patterns.
    /// Identity, difficulty, and creation time survive.
    pub fn reset(&mut self) {
        self.player_score = 0;
        self.ai_score = 0;
        self.draws = 0;
        self.history.clear();
        self.model.clear();
        self.touch();
    }

    /// Changes difficulty without discarding learned patterns.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.touch();
    }

    pub fn stats(&self) -> Stats {
        let total = self.total_games();
        Stats {
            total_games: total,
            player_score: self.player_score,
            ai_score: self.ai_score,
            draws: self.draws,
            win_rate: match total {
                0 => 0.0,
                n => f64::from(self.player_score) / f64::from(n),
            },
            difficulty: self.difficulty,
            ai_pattern_count: self.model.pattern_count(self.difficulty),
        }
    }

    pub fn total_games(&self) -> u32 {
        self.player_score + self.ai_score + self.draws
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn idle(&self) -> Duration {
        self.last_activity.elapsed()
    }

    /// Terminal. Set only by the Lobby, under this session's lock.
    pub fn expire(&mut self) {
        self.expired = true;
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn player_score(&self) -> u32 {
        self.player_score
    }
    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
