pub mod config;
pub mod depth_chart;
pub mod error;
pub mod feed;
pub mod hint;
pub mod http_client;
pub mod player;
pub mod position;
pub mod session;
pub mod state;

pub use depth_chart::{DepthChart, DepthEntry, TeamDepthChart};
pub use error::{FetchError, SessionError};
pub use hint::{Hint, HintLevel, get_hint};
pub use player::Player;
pub use position::{PositionCategory, filter_by_position};
pub use session::{GameSession, GuessOutcome, MAX_ATTEMPTS, RoundPhase};
