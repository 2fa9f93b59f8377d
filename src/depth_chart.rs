use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::error::FetchError;
use crate::http_client::http_client;
use crate::player::{Player, names_match};

/// One slot of a team's offense or defense list. Slots lacking either field are
/// kept so that list indices stay aligned with the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthEntry {
    pub position: Option<String>,
    pub name: Option<String>,
}

impl DepthEntry {
    pub fn new(position: &str, name: &str) -> Self {
        Self {
            position: Some(position.to_string()),
            name: Some(name.to_string()),
        }
    }

    pub fn player(&self) -> Option<Player> {
        let position = self.position.as_deref().filter(|s| !s.is_empty())?;
        let name = self.name.as_deref().filter(|s| !s.is_empty())?;
        Some(Player::new(position, name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDepthChart {
    pub team_id: Option<u32>,
    pub offense: Vec<DepthEntry>,
    pub defense: Vec<DepthEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthChart {
    pub teams: Vec<TeamDepthChart>,
}

impl DepthChart {
    /// Flattens every complete entry: per team, offense then defense, source order.
    pub fn players(&self) -> Vec<Player> {
        self.teams
            .iter()
            .flat_map(|team| team.offense.iter().chain(team.defense.iter()))
            .filter_map(DepthEntry::player)
            .collect()
    }

    /// 1-based slot of the first entry whose name matches, scanning each team's
    /// offense before its defense.
    pub fn depth_order(&self, name: &str) -> Option<usize> {
        for team in &self.teams {
            for list in [&team.offense, &team.defense] {
                let hit = list.iter().position(|entry| {
                    entry
                        .name
                        .as_deref()
                        .is_some_and(|candidate| names_match(candidate, name))
                });
                if let Some(idx) = hit {
                    return Some(idx + 1);
                }
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

pub fn fetch_players(config: &Config) -> Result<(Vec<Player>, DepthChart), FetchError> {
    let chart = fetch_depth_chart(config)?;
    Ok((chart.players(), chart))
}

pub fn fetch_depth_chart(config: &Config) -> Result<DepthChart, FetchError> {
    let client = http_client()?;
    let url = config.depth_chart_url();
    log::debug!("GET {}", config.endpoint);

    let resp = client
        .get(&url)
        .send()
        .map_err(|err| FetchError::Network(format!("request failed: {}", err.without_url())))?;
    let status = resp.status();
    let body = resp.text().map_err(|err| {
        FetchError::Network(format!("failed reading body: {}", err.without_url()))
    })?;
    if !status.is_success() {
        return Err(FetchError::Network(http_status_message(status)));
    }
    parse_depth_chart_json(&body)
}

fn http_status_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("http {}: {reason}", status.as_u16()),
        None => format!("http {}", status.as_u16()),
    }
}

pub fn parse_depth_chart_json(raw: &str) -> Result<DepthChart, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FetchError::Network("missing response body".to_string()));
    }
    let raw_teams: Vec<Value> = serde_json::from_str(trimmed)
        .map_err(|err| FetchError::Parse(format!("invalid depth chart json: {err}")))?;

    let mut teams = Vec::with_capacity(raw_teams.len());
    for (idx, team) in raw_teams.iter().enumerate() {
        if !team.is_object() {
            return Err(FetchError::Parse(format!("depth chart entry {idx} is not a team object")));
        }
        teams.push(parse_team(team));
    }
    Ok(DepthChart { teams })
}

fn parse_team(team: &Value) -> TeamDepthChart {
    // TeamID is informational only; anything but a small integer is dropped.
    let team_id = team
        .get("TeamID")
        .and_then(|x| x.as_u64())
        .and_then(|id| u32::try_from(id).ok());
    TeamDepthChart {
        team_id,
        offense: parse_entries(team.get("Offense").unwrap_or(&Value::Null)),
        defense: parse_entries(team.get("Defense").unwrap_or(&Value::Null)),
    }
}

fn parse_entries(list: &Value) -> Vec<DepthEntry> {
    let Some(items) = list.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| DepthEntry {
            position: string_field(item, "Position"),
            name: string_field(item, "Name"),
        })
        .collect()
}

fn string_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(|x| x.as_str()).map(|s| s.to_string())
}
