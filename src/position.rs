use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionCategory {
    Quarterback,
    WideReceiver,
    RunningBack,
    #[default]
    All,
}

impl PositionCategory {
    pub fn matches(self, position: &str) -> bool {
        let pos = position.to_lowercase();
        match self {
            PositionCategory::Quarterback => pos == "qb",
            PositionCategory::WideReceiver => pos.contains("wr"),
            PositionCategory::RunningBack => pos == "rb",
            PositionCategory::All => true,
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PositionCategory::Quarterback => "Quarterback",
            PositionCategory::WideReceiver => "Wide Receiver",
            PositionCategory::RunningBack => "Running Back",
            PositionCategory::All => "All",
        };
        f.write_str(label)
    }
}

/// Unrecognised input maps to `All`.
impl FromStr for PositionCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();
        Ok(match key.as_str() {
            "qb" | "quarterback" | "quarterbacks" => PositionCategory::Quarterback,
            "wr" | "widereceiver" | "widereceivers" => PositionCategory::WideReceiver,
            "rb" | "runningback" | "runningbacks" => PositionCategory::RunningBack,
            _ => PositionCategory::All,
        })
    }
}

pub fn filter_by_position(players: &[Player], category: PositionCategory) -> Vec<Player> {
    players
        .iter()
        .filter(|p| category.matches(&p.position))
        .cloned()
        .collect()
}
