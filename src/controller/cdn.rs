use crate::model::UpstreamError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_BASE: &str = "https://cdn.nba.com/static/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the league's public CDN JSON feeds: today's live scoreboard,
/// the full league schedule, and per-game box scores. Plain HTTPS GET with a
/// short timeout, no auth.
#[derive(Clone)]
pub struct CdnClient {
    client: Client,
    base_url: String,
}

impl Default for CdnClient {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("gametrack/0.1")
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: DEFAULT_BASE.to_string(),
        }
    }
}

impl CdnClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the client at a different base URL; used by tests.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub async fn live_scoreboard(&self) -> Result<Value, UpstreamError> {
        self.get_json("liveData/scoreboard/todaysScoreboard_00.json")
            .await
    }

    pub async fn league_schedule(&self) -> Result<Value, UpstreamError> {
        self.get_json("staticData/scheduleLeagueV2.json").await
    }

    pub async fn box_score(&self, game_id: &str) -> Result<Value, UpstreamError> {
        self.get_json(&format!("liveData/boxscore/boxscore_{game_id}.json"))
            .await
    }

    async fn get_json(&self, path: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/{path}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| UpstreamError::Network {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { url, status });
        }

        resp.json::<Value>()
            .await
            .map_err(|source| UpstreamError::Parse { url, source })
    }
}
