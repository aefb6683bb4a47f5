use crate::controller::provider::teams;
use crate::model::{NormalizedRecord, Team, UpstreamError};
use crate::normalize::{ResultTable, STANDINGS_COLUMNS, rename_columns};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde_json::Value;
use std::time::Duration;

const DEFAULT_BASE: &str = "https://stats.nba.com/stats";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the third-party stats provider's tabular endpoints. The
/// integration is optional: constructed disabled (`--offline`), every call
/// returns `Err(ProviderUnavailable)` and handlers degrade to sample data.
#[derive(Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
    season: String,
    enabled: bool,
}

impl StatsClient {
    pub fn new(season: &str, enabled: bool) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("gametrack/0.1"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        // the provider rejects requests without its origin markers
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        Self {
            client: Client::builder()
                .default_headers(headers)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: DEFAULT_BASE.to_string(),
            season: season.to_string(),
            enabled,
        }
    }

    /// Points the client at a different base URL; used by tests.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The provider's static team directory.
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` when the integration is disabled.
    pub fn teams(&self) -> Result<Vec<Team>, UpstreamError> {
        if !self.enabled {
            return Err(UpstreamError::ProviderUnavailable);
        }
        Ok(teams::all_teams())
    }

    /// League standings, mapped through the declared standings column table.
    pub async fn standings(&self) -> Result<Vec<NormalizedRecord>, UpstreamError> {
        let payload = self
            .fetch("leaguestandingsv3", &[
                ("LeagueID", "00".to_string()),
                ("Season", self.season.clone()),
                ("SeasonType", "Regular Season".to_string()),
            ])
            .await?;
        let table = ResultTable::from_result_sets(&payload, "leaguestandingsv3", Some("Standings"))?;
        Ok(table
            .records()
            .iter()
            .map(|r| rename_columns(r, STANDINGS_COLUMNS))
            .collect())
    }

    /// Per-game player stats for the whole league; the source table for both
    /// leaders endpoints.
    pub async fn league_player_stats(&self) -> Result<Vec<NormalizedRecord>, UpstreamError> {
        let payload = self
            .fetch("leaguedashplayerstats", &[
                ("LeagueID", "00".to_string()),
                ("Season", self.season.clone()),
                ("SeasonType", "Regular Season".to_string()),
                ("PerMode", "PerGame".to_string()),
                ("MeasureType", "Base".to_string()),
            ])
            .await?;
        let table =
            ResultTable::from_result_sets(&payload, "leaguedashplayerstats", Some("LeagueDashPlayerStats"))?;
        Ok(table.records())
    }

    pub async fn team_roster(&self, team_id: i64) -> Result<Vec<NormalizedRecord>, UpstreamError> {
        let payload = self
            .fetch("commonteamroster", &[
                ("TeamID", team_id.to_string()),
                ("Season", self.season.clone()),
            ])
            .await?;
        let table =
            ResultTable::from_result_sets(&payload, "commonteamroster", Some("CommonTeamRoster"))?;
        Ok(table.records())
    }

    /// Player bio/profile; the first result set of the player-info endpoint.
    pub async fn player_info(&self, player_id: i64) -> Result<Vec<NormalizedRecord>, UpstreamError> {
        let payload = self
            .fetch("commonplayerinfo", &[("PlayerID", player_id.to_string())])
            .await?;
        let table = ResultTable::from_result_sets(&payload, "commonplayerinfo", None)?;
        Ok(table.records())
    }

    pub async fn player_game_log(
        &self,
        player_id: i64,
    ) -> Result<Vec<NormalizedRecord>, UpstreamError> {
        let payload = self
            .fetch("playergamelog", &[
                ("PlayerID", player_id.to_string()),
                ("Season", self.season.clone()),
                ("SeasonType", "Regular Season".to_string()),
            ])
            .await?;
        let table = ResultTable::from_result_sets(&payload, "playergamelog", Some("PlayerGameLog"))?;
        Ok(table.records())
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, UpstreamError> {
        if !self.enabled {
            return Err(UpstreamError::ProviderUnavailable);
        }
        let url = format!("{}/{endpoint}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(params)
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
