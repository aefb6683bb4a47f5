use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A flattened row ready for the frontend: canonical field name to JSON-safe
/// scalar. Never contains NaN/Infinity, duplicate keys, or raw datetimes.
pub type NormalizedRecord = Map<String, Value>;

/// Single taxonomy for everything that can go wrong upstream. Handlers catch
/// this at the boundary and substitute the endpoint's sample payload, so the
/// frontend always gets a renderable 200.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("stats provider integration is unavailable")]
    ProviderUnavailable,
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned http {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected payload shape from {context}: {detail}")]
    Schema { context: String, detail: String },
}

impl UpstreamError {
    pub fn schema(context: impl Into<String>, detail: impl Into<String>) -> Self {
        UpstreamError::Schema {
            context: context.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Team {
    pub id: i64,
    pub full_name: String,
    pub abbreviation: String,
    pub nickname: String,
    pub city: String,
}

impl Team {
    pub fn logo_url(&self) -> String {
        team_logo_url(self.id)
    }
}

pub fn team_logo_url(team_id: i64) -> String {
    format!("https://cdn.nba.com/logos/nba/{team_id}/global/L/logo.svg")
}

pub fn player_headshot_url(person_id: i64) -> String {
    format!("https://cdn.nba.com/headshots/nba/latest/1040x760/{person_id}.png")
}

/// One game in the unified `/api/games/scoreboard` shape.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: String,
    pub game_status: String,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_abbr: String,
    pub away_abbr: String,
    pub home_logo: String,
    pub away_logo: String,
    pub home_score: i64,
    pub away_score: i64,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
    pub arena: String,
}

/// One entry of `/api/team/{id}/schedule`. Field names are the frontend's,
/// hence the SCREAMING_SNAKE renames.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScheduleGame {
    #[serde(rename = "GAME_ID")]
    pub game_id: String,
    #[serde(rename = "GAME_DATETIME")]
    pub game_datetime: Option<String>,
    #[serde(rename = "MATCHUP")]
    pub matchup: String,
    #[serde(rename = "WL")]
    pub win_loss: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TeamSchedule {
    pub upcoming: Vec<ScheduleGame>,
    pub recent: Vec<ScheduleGame>,
}
