use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::depth_chart::DepthChart;
use crate::error::SessionError;
use crate::hint::{Hint, HintLevel, compute_hint};
use crate::player::Player;
use crate::position::{PositionCategory, filter_by_position};

/// Guesses allowed per round; the last one ends the round if wrong.
pub const MAX_ATTEMPTS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    #[default]
    Idle,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { player: Player },
    GameOver { player: Player },
    Incorrect { attempts_left: u32 },
}

impl GuessOutcome {
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Correct { player } => format!(
                "Correct! The player's name is {}. Position: {}",
                player.name, player.position
            ),
            GuessOutcome::GameOver { player } => format!(
                "Game over! The player's name is {}. Position: {}",
                player.name, player.position
            ),
            GuessOutcome::Incorrect { .. } => "Incorrect. Try again!".to_string(),
        }
    }

    pub fn ends_round(&self) -> bool {
        !matches!(self, GuessOutcome::Incorrect { .. })
    }
}

/// Single-player guessing session. A round that ends (won or lost) is
/// immediately followed by a fresh one drawn from the same pool.
#[derive(Debug)]
pub struct GameSession<R: Rng = ThreadRng> {
    all_players: Vec<Player>,
    filtered_players: Vec<Player>,
    category: PositionCategory,
    current_index: usize,
    attempts: u32,
    hint_level: HintLevel,
    phase: RoundPhase,
    rng: R,
}

impl GameSession<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for GameSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            all_players: Vec::new(),
            filtered_players: Vec::new(),
            category: PositionCategory::All,
            current_index: 0,
            attempts: 0,
            hint_level: HintLevel::Side,
            phase: RoundPhase::Idle,
            rng,
        }
    }

    /// Replaces the player pool, re-applies the current category and starts a round.
    pub fn load_players(&mut self, players: Vec<Player>) {
        let filtered = filter_by_position(&players, self.category);
        self.start_with(players, filtered);
    }

    pub fn start_with(&mut self, players: Vec<Player>, filtered: Vec<Player>) {
        self.all_players = players;
        self.filtered_players = filtered;
        self.start();
    }

    /// Starts a round on the current pool. An empty filtered pool falls back to
    /// the full player list, shuffled.
    pub fn start(&mut self) {
        self.attempts = 0;
        self.hint_level = HintLevel::Side;

        if self.filtered_players.is_empty() {
            self.all_players.shuffle(&mut self.rng);
            self.filtered_players = self.all_players.clone();
            if !self.filtered_players.is_empty() {
                log::info!(
                    "no {} players available, using all {} players",
                    self.category,
                    self.filtered_players.len()
                );
            }
        }

        if self.filtered_players.is_empty() {
            self.current_index = 0;
            self.phase = RoundPhase::Idle;
            log::warn!("cannot start round: player pool is empty");
            return;
        }

        self.current_index = self.rng.gen_range(0..self.filtered_players.len());
        self.phase = RoundPhase::Active;
        log::debug!(
            "round started: {} candidates ({})",
            self.filtered_players.len(),
            self.category
        );
    }

    pub fn change_category(&mut self, category: PositionCategory) {
        self.category = category;
        self.filtered_players = filter_by_position(&self.all_players, category);
        self.start();
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, SessionError> {
        self.attempts += 1;
        let player = self.target()?.clone();

        if player.is_named(text) {
            log::info!("correct guess after {} attempt(s)", self.attempts);
            self.start();
            return Ok(GuessOutcome::Correct { player });
        }

        if self.attempts >= MAX_ATTEMPTS {
            log::info!("round lost after {} attempts", self.attempts);
            self.start();
            return Ok(GuessOutcome::GameOver { player });
        }

        Ok(GuessOutcome::Incorrect {
            attempts_left: MAX_ATTEMPTS - self.attempts,
        })
    }

    /// Reveals the next hint tier for the current target.
    pub fn request_hint(&mut self, chart: &DepthChart) -> Result<Hint, SessionError> {
        let player = self.target()?;
        let hint = compute_hint(player, self.hint_level, chart);
        self.hint_level = self.hint_level.next();
        Ok(hint)
    }

    fn target(&self) -> Result<&Player, SessionError> {
        self.filtered_players
            .get(self.current_index)
            .ok_or(SessionError::InvalidIndex {
                index: self.current_index,
                len: self.filtered_players.len(),
            })
    }

    /// Swaps the candidate pool without starting a round; the current index is
    /// not re-picked and may no longer be valid.
    pub fn replace_filtered_players(&mut self, filtered: Vec<Player>) {
        self.filtered_players = filtered;
    }

    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            RoundPhase::Active => self.filtered_players.get(self.current_index),
            RoundPhase::Idle => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempts_left(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    pub fn hint_level(&self) -> HintLevel {
        self.hint_level
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn category(&self) -> PositionCategory {
        self.category
    }

    pub fn all_players(&self) -> &[Player] {
        &self.all_players
    }

    pub fn filtered_players(&self) -> &[Player] {
        &self.filtered_players
    }
}
