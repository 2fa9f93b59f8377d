use std::fmt;

use crate::depth_chart::DepthChart;
use crate::player::Player;

/// Hint tiers, revealed in order. Requests past `DepthOrder` stay there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HintLevel {
    #[default]
    Side,
    Position,
    DepthOrder,
}

impl HintLevel {
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => HintLevel::Side,
            1 => HintLevel::Position,
            _ => HintLevel::DepthOrder,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Offense,
    Defense,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Side(Side),
    Position(String),
    DepthOrder(Option<usize>),
}

impl Hint {
    pub fn message(&self) -> String {
        match self {
            Hint::Side(Side::Offense) => "The player is an offensive player.".to_string(),
            Hint::Side(Side::Defense) => "The player is a defensive player.".to_string(),
            Hint::Position(pos) => format!("The player's position is {pos}."),
            Hint::DepthOrder(Some(order)) => format!("The player's depth order is {order}."),
            Hint::DepthOrder(None) => {
                "Depth order information is not available for this player.".to_string()
            }
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Side(Side::Offense) => f.write_str("Offensive player"),
            Hint::Side(Side::Defense) => f.write_str("Defensive player"),
            Hint::Position(pos) => f.write_str(pos),
            Hint::DepthOrder(Some(order)) => write!(f, "{order}"),
            Hint::DepthOrder(None) => f.write_str("not available"),
        }
    }
}

pub fn compute_hint(player: &Player, level: HintLevel, chart: &DepthChart) -> Hint {
    match level {
        // Feed positions are abbreviations ("QB", "LB"), so this almost always
        // lands on Defense. Kept as observed behaviour.
        HintLevel::Side => {
            if player.position.to_lowercase().contains("offense") {
                Hint::Side(Side::Offense)
            } else {
                Hint::Side(Side::Defense)
            }
        }
        HintLevel::Position => Hint::Position(player.position.clone()),
        HintLevel::DepthOrder => Hint::DepthOrder(chart.depth_order(&player.name)),
    }
}

pub fn get_hint(player: &Player, level: HintLevel, chart: &DepthChart) -> String {
    compute_hint(player, level, chart).to_string()
}
