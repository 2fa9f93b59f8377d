use std::collections::VecDeque;
use std::sync::mpsc::Sender;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::config::DEFAULT_LOG_CAPACITY;
use crate::depth_chart::DepthChart;
use crate::error::SessionError;
use crate::hint::Hint;
use crate::position::PositionCategory;
use crate::session::{GameSession, GuessOutcome, RoundPhase};

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    FetchDepthChart,
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetDepthChart(DepthChart),
    FetchFailed(String),
    Log(String),
}

/// Everything the controlling thread owns. Provider threads only talk to it
/// through [`Delta`] values passed to [`apply_delta`].
#[derive(Debug)]
pub struct AppState<R: Rng = ThreadRng> {
    pub session: GameSession<R>,
    pub chart: DepthChart,
    pub loading: bool,
    pub last_error: Option<String>,
    pub logs: VecDeque<String>,
    log_capacity: usize,
}

impl AppState<ThreadRng> {
    pub fn new() -> Self {
        Self::with_session(GameSession::new())
    }
}

impl Default for AppState<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AppState<R> {
    pub fn with_session(session: GameSession<R>) -> Self {
        Self {
            session,
            chart: DepthChart::default(),
            loading: false,
            last_error: None,
            logs: VecDeque::new(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }

    pub fn set_log_capacity(&mut self, capacity: usize) {
        self.log_capacity = capacity.max(1);
        self.trim_logs();
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        if msg.starts_with("[WARN]") {
            log::warn!("{msg}");
        } else {
            log::info!("{msg}");
        }
        self.logs.push_back(msg);
        self.trim_logs();
    }

    fn trim_logs(&mut self) {
        while self.logs.len() > self.log_capacity {
            self.logs.pop_front();
        }
    }

    /// Requests a fresh depth chart; the first round starts once it arrives.
    pub fn start_game(&mut self, cmd_tx: &Sender<ProviderCommand>) {
        if self.loading {
            self.push_log("[INFO] Depth chart fetch already in flight");
            return;
        }
        if cmd_tx.send(ProviderCommand::FetchDepthChart).is_err() {
            self.push_log("[WARN] Depth chart request failed: provider stopped");
            return;
        }
        self.loading = true;
        self.push_log("[INFO] Depth chart request sent");
    }

    /// Stores a depth chart and starts a round in the current category.
    pub fn load_depth_chart(&mut self, chart: DepthChart) {
        let players = chart.players();
        self.push_log(format!(
            "[INFO] Loaded {} players from {} teams",
            players.len(),
            chart.teams.len()
        ));
        self.chart = chart;
        self.session.load_players(players);
        if self.session.phase() == RoundPhase::Idle {
            self.push_log("[WARN] Depth chart contained no usable players");
        }
    }

    pub fn select_category(&mut self, category: PositionCategory) {
        self.session.change_category(category);
        self.push_log(format!(
            "[INFO] Category {category}: {} candidates",
            self.session.filtered_players().len()
        ));
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, SessionError> {
        let result = self.session.submit_guess(text);
        if let Err(err) = &result {
            self.push_log(format!("[WARN] Guess ignored: {err}"));
        }
        result
    }

    pub fn request_hint(&mut self) -> Result<Hint, SessionError> {
        let result = self.session.request_hint(&self.chart);
        if let Err(err) = &result {
            self.push_log(format!("[WARN] Hint unavailable: {err}"));
        }
        result
    }
}

pub fn apply_delta<R: Rng>(state: &mut AppState<R>, delta: Delta) {
    match delta {
        Delta::SetDepthChart(chart) => {
            state.loading = false;
            state.last_error = None;
            state.load_depth_chart(chart);
        }
        Delta::FetchFailed(err) => {
            state.loading = false;
            state.push_log(format!("[WARN] Depth chart fetch error: {err}"));
            state.last_error = Some(err);
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
