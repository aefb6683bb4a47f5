use crate::cache::{SCHEDULE_TTL_SECS, TtlCache};
use crate::controller::cdn::CdnClient;
use crate::controller::provider::{StatsClient, abbreviation_for, team_by_id};
use crate::model::{GameSummary, NormalizedRecord, UpstreamError, player_headshot_url, team_logo_url};
use crate::schedule::{GameSlot, classify_games};
use chrono::Utc;
use serde_json::{Map, Value, json};
use std::cmp::Ordering;

/// Stat categories `/api/leaders/{stat}` will serve; anything else is a 400.
pub const LEADER_STATS: &[&str] = &[
    "PTS", "AST", "REB", "BLK", "STL", "FGM", "FGA", "FG3M", "FG3A", "FTM", "FTA", "FG_PCT",
    "FG3_PCT", "FT_PCT",
];

const HOMEPAGE_STATS: &[&str] = &["PTS", "REB", "AST"];

const PLAYER_STAT_KEYS: &[&str] = &[
    "points",
    "reboundsTotal",
    "assists",
    "steals",
    "blocks",
    "fieldGoalsMade",
    "fieldGoalsAttempted",
    "threePointersMade",
    "threePointersAttempted",
    "freeThrowsMade",
    "freeThrowsAttempted",
    "turnovers",
    "plusMinusPoints",
];

const TEAM_STAT_KEYS: &[&str] = &[
    "points",
    "reboundsTotal",
    "assists",
    "steals",
    "blocks",
    "fieldGoalsMade",
    "fieldGoalsAttempted",
    "threePointersMade",
    "threePointersAttempted",
    "freeThrowsMade",
    "freeThrowsAttempted",
    "turnovers",
];

/// `/api/teams` — the provider's team directory with CDN logo urls.
///
/// # Errors
///
/// Returns `Err` when the provider integration is disabled.
pub fn teams_payload(provider: &StatsClient) -> Result<Value, UpstreamError> {
    let teams = provider.teams()?;
    Ok(Value::Array(
        teams
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "full_name": t.full_name,
                    "abbreviation": t.abbreviation,
                    "logoUrl": t.logo_url(),
                })
            })
            .collect(),
    ))
}

/// `/api/standings` — standings records split by conference.
pub async fn standings_payload(provider: &StatsClient) -> Result<Value, UpstreamError> {
    let records = provider.standings().await?;
    let mut east: Vec<Value> = Vec::new();
    let mut west: Vec<Value> = Vec::new();
    for record in records {
        let conference = record
            .get("Conference")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if conference.eq_ignore_ascii_case("east") {
            east.push(Value::Object(record));
        } else if conference.eq_ignore_ascii_case("west") {
            west.push(Value::Object(record));
        }
    }
    Ok(json!({ "east": east, "west": west }))
}

/// `/api/games/scoreboard` — today's games from the live CDN feed, reshaped
/// into the unified frontend schema.
pub async fn scoreboard_payload(cdn: &CdnClient) -> Result<Value, UpstreamError> {
    let feed = cdn.live_scoreboard().await?;
    let games = feed
        .get("scoreboard")
        .and_then(|s| s.get("games"))
        .and_then(Value::as_array)
        .ok_or_else(|| UpstreamError::schema("live scoreboard", "missing scoreboard.games"))?;

    let unified: Vec<GameSummary> = games.iter().map(unify_scoreboard_game).collect();
    Ok(json!({ "games": unified }))
}

fn unify_scoreboard_game(game: &Value) -> GameSummary {
    let (home_id, home_name, home_abbr, home_score) = scoreboard_side(game, "homeTeam");
    let (away_id, away_name, away_abbr, away_score) = scoreboard_side(game, "awayTeam");
    GameSummary {
        game_id: game
            .get("gameId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        game_status: game
            .get("gameStatusText")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string(),
        home_team_id: home_id,
        away_team_id: away_id,
        home_team: home_name,
        away_team: away_name,
        home_abbr,
        away_abbr,
        home_logo: logo_or_placeholder(home_id),
        away_logo: logo_or_placeholder(away_id),
        home_score,
        away_score,
        start_time_utc: game
            .get("gameTimeUTC")
            .and_then(Value::as_str)
            .map(str::to_string),
        arena: game
            .get("arenaName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn scoreboard_side(game: &Value, key: &str) -> (i64, String, String, i64) {
    let side = game.get(key).cloned().unwrap_or(Value::Null);
    let id = side.get("teamId").and_then(Value::as_i64).unwrap_or(0);
    // prefer the directory's name; the feed only carries city + nickname
    let name = team_by_id(id).map_or_else(
        || {
            let city = side.get("teamCity").and_then(Value::as_str).unwrap_or("");
            let nickname = side.get("teamName").and_then(Value::as_str).unwrap_or("");
            format!("{city} {nickname}").trim().to_string()
        },
        |t| t.full_name,
    );
    let abbr = side
        .get("teamTricode")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    // games with no score yet surface as 0, never null
    let score = side.get("score").and_then(Value::as_i64).unwrap_or(0);
    (id, name, abbr, score)
}

fn logo_or_placeholder(team_id: i64) -> String {
    if team_id > 0 {
        team_logo_url(team_id)
    } else {
        "/static/logo.png".to_string()
    }
}

/// `/api/leaders/homepage` — top 5 per homepage stat, trimmed to the three
/// fields the homepage cards render.
pub async fn leaders_homepage_payload(provider: &StatsClient) -> Result<Value, UpstreamError> {
    let stats = provider.league_player_stats().await?;
    let mut out = Map::new();
    for stat in HOMEPAGE_STATS {
        let entries: Vec<Value> = top_by_stat(&stats, stat, 5)
            .into_iter()
            .map(|record| {
                let mut entry = Map::new();
                entry.insert("PLAYER".to_string(), player_name(&record));
                entry.insert("TEAM".to_string(), team_abbreviation(&record));
                entry.insert(
                    (*stat).to_string(),
                    stat_field(&record, stat).cloned().unwrap_or(Value::Null),
                );
                Value::Object(entry)
            })
            .collect();
        out.insert((*stat).to_string(), Value::Array(entries));
    }
    Ok(Value::Object(out))
}

/// `/api/leaders/{stat}` — full records for the top 25, with `PLAYER` and
/// `TEAM` filled in for the frontend. The stat must already be allow-listed.
pub async fn leaders_payload(provider: &StatsClient, stat: &str) -> Result<Value, UpstreamError> {
    let stats = provider.league_player_stats().await?;
    let rows: Vec<Value> = top_by_stat(&stats, stat, 25)
        .into_iter()
        .map(|mut record| {
            let name = player_name(&record);
            let abbr = team_abbreviation(&record);
            if !record.contains_key("PLAYER") {
                record.insert("PLAYER".to_string(), name);
            }
            if !record.contains_key("TEAM") {
                record.insert("TEAM".to_string(), abbr);
            }
            Value::Object(record)
        })
        .collect();
    Ok(Value::Array(rows))
}

fn top_by_stat(records: &[NormalizedRecord], stat: &str, n: usize) -> Vec<NormalizedRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        stat_number(b, stat)
            .partial_cmp(&stat_number(a, stat))
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

fn stat_field<'a>(record: &'a NormalizedRecord, stat: &str) -> Option<&'a Value> {
    record.get(stat).or_else(|| {
        // tolerate upstream case drift in the stat header
        record
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(stat))
            .map(|(_, v)| v)
    })
}

fn stat_number(record: &NormalizedRecord, stat: &str) -> f64 {
    stat_field(record, stat)
        .and_then(Value::as_f64)
        .unwrap_or(f64::MIN)
}

fn player_name(record: &NormalizedRecord) -> Value {
    record
        .get("PLAYER_NAME")
        .or_else(|| record.get("PLAYER"))
        .cloned()
        .unwrap_or_else(|| Value::from(""))
}

fn team_abbreviation(record: &NormalizedRecord) -> Value {
    if let Some(abbr) = record.get("TEAM_ABBREVIATION") {
        return abbr.clone();
    }
    record
        .get("TEAM_ID")
        .and_then(Value::as_i64)
        .and_then(abbreviation_for)
        .map_or_else(|| Value::from(""), Value::from)
}

/// `/api/team/{id}/roster`.
pub async fn roster_payload(provider: &StatsClient, team_id: i64) -> Result<Value, UpstreamError> {
    let records = provider.team_roster(team_id).await?;
    Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
}

/// `/api/team/{id}/schedule` — the league schedule feed (cached league-wide,
/// one key, not per team) filtered to the team and classified into upcoming
/// and recent games.
pub async fn team_schedule_payload(
    cdn: &CdnClient,
    cache: &TtlCache,
    team_id: i64,
) -> Result<Value, UpstreamError> {
    let feed = match cache.get("schedule").await {
        Some(cached) => cached,
        None => {
            let fresh = cdn.league_schedule().await?;
            cache.set("schedule", fresh.clone(), SCHEDULE_TTL_SECS).await;
            fresh
        }
    };

    let slots = team_slots_from_feed(&feed, team_id)?;
    let split = classify_games(slots, Utc::now());
    serde_json::to_value(split).map_err(|e| UpstreamError::schema("team schedule", e.to_string()))
}

fn team_slots_from_feed(feed: &Value, team_id: i64) -> Result<Vec<GameSlot>, UpstreamError> {
    let game_dates = feed
        .get("leagueSchedule")
        .and_then(|s| s.get("gameDates"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            UpstreamError::schema("league schedule", "missing leagueSchedule.gameDates")
        })?;

    let mut slots = Vec::new();
    for date in game_dates {
        let Some(games) = date.get("games").and_then(Value::as_array) else {
            continue;
        };
        for game in games {
            let home_id = team_id_of(game, "homeTeam");
            let away_id = team_id_of(game, "awayTeam");
            let is_home = home_id == Some(team_id);
            if !is_home && away_id != Some(team_id) {
                continue;
            }

            let (us, them) = if is_home {
                ("homeTeam", "awayTeam")
            } else {
                ("awayTeam", "homeTeam")
            };
            let our_abbr = tricode_of(game, us);
            let their_abbr = tricode_of(game, them);
            let matchup = if is_home {
                format!("{our_abbr} vs {their_abbr}")
            } else {
                format!("{our_abbr} @ {their_abbr}")
            };

            slots.push(GameSlot {
                game_id: game
                    .get("gameId")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                start_time: game
                    .get("gameDateTimeUTC")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                status_text: game
                    .get("gameStatusText")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
                matchup,
                team_score: score_of(game, us),
                opponent_score: score_of(game, them),
            });
        }
    }
    Ok(slots)
}

fn team_id_of(game: &Value, side: &str) -> Option<i64> {
    game.get(side).and_then(|t| t.get("teamId")).and_then(Value::as_i64)
}

fn tricode_of(game: &Value, side: &str) -> String {
    game.get(side)
        .and_then(|t| t.get("teamTricode"))
        .and_then(Value::as_str)
        .unwrap_or("???")
        .to_string()
}

fn score_of(game: &Value, side: &str) -> Option<i64> {
    game.get(side).and_then(|t| t.get("score")).and_then(Value::as_i64)
}

/// `/api/player/{id}/profile` — the first result set of the provider's
/// player-info endpoint, wrapped the way the frontend expects.
pub async fn player_profile_payload(
    provider: &StatsClient,
    player_id: i64,
) -> Result<Value, UpstreamError> {
    let records = provider.player_info(player_id).await?;
    if records.is_empty() {
        return Err(UpstreamError::schema(
            "commonplayerinfo",
            format!("no rows for player {player_id}"),
        ));
    }
    Ok(json!({
        "info": records.into_iter().map(Value::Object).collect::<Vec<_>>(),
    }))
}

/// `/api/player/{id}/gamelog`.
pub async fn player_gamelog_payload(
    provider: &StatsClient,
    player_id: i64,
) -> Result<Value, UpstreamError> {
    let records = provider.player_game_log(player_id).await?;
    Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
}

/// `/api/game/{id}/boxscore` — player and team lines flattened out of the
/// CDN box-score feed.
pub async fn boxscore_payload(cdn: &CdnClient, game_id: &str) -> Result<Value, UpstreamError> {
    let feed = cdn.box_score(game_id).await?;
    let game = feed
        .get("game")
        .ok_or_else(|| UpstreamError::schema("box score", "missing game object"))?;

    let mut player_stats: Vec<Value> = Vec::new();
    let mut team_stats: Vec<Value> = Vec::new();

    for side in ["homeTeam", "awayTeam"] {
        let team = game
            .get(side)
            .ok_or_else(|| UpstreamError::schema("box score", format!("missing {side}")))?;
        let tricode = team
            .get("teamTricode")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let team_name = team
            .get("teamId")
            .and_then(Value::as_i64)
            .and_then(team_by_id)
            .map_or_else(
                || {
                    let city = team.get("teamCity").and_then(Value::as_str).unwrap_or("");
                    let nickname = team.get("teamName").and_then(Value::as_str).unwrap_or("");
                    format!("{city} {nickname}").trim().to_string()
                },
                |t| t.full_name,
            );

        for player in team
            .get("players")
            .and_then(Value::as_array)
            .unwrap_or(&Vec::new())
        {
            player_stats.push(player_line(player, tricode));
        }

        let mut line = Map::new();
        line.insert("teamTricode".to_string(), Value::from(tricode));
        line.insert("teamName".to_string(), Value::from(team_name));
        let statistics = team.get("statistics").cloned().unwrap_or(Value::Null);
        copy_stat_keys(&mut line, &statistics, TEAM_STAT_KEYS);
        team_stats.push(Value::Object(line));
    }

    Ok(json!({ "playerStats": player_stats, "teamStats": team_stats }))
}

fn player_line(player: &Value, tricode: &str) -> Value {
    let person_id = player.get("personId").and_then(Value::as_i64).unwrap_or(0);
    let statistics = player.get("statistics").cloned().unwrap_or(Value::Null);

    let mut line = Map::new();
    line.insert("personId".to_string(), Value::from(person_id));
    line.insert(
        "playerName".to_string(),
        player
            .get("name")
            .cloned()
            .unwrap_or_else(|| Value::from("")),
    );
    line.insert("teamTricode".to_string(), Value::from(tricode));
    line.insert(
        "minutes".to_string(),
        Value::from(clock_minutes(
            statistics
                .get("minutes")
                .and_then(Value::as_str)
                .unwrap_or(""),
        )),
    );
    copy_stat_keys(&mut line, &statistics, PLAYER_STAT_KEYS);
    line.insert(
        "playerImageUrl".to_string(),
        Value::from(player_headshot_url(person_id)),
    );
    Value::Object(line)
}

fn copy_stat_keys(line: &mut Map<String, Value>, statistics: &Value, keys: &[&str]) {
    for key in keys {
        let value = statistics.get(*key).cloned().unwrap_or(Value::Null);
        let value = if value.is_null() { Value::from(0) } else { value };
        line.insert((*key).to_string(), value);
    }
}

/// Turns the live feed's ISO-8601 durations ("PT36M12.00S") into the
/// "36:12" clock format the frontend renders. Anything else passes through.
fn clock_minutes(raw: &str) -> String {
    let Some(rest) = raw.strip_prefix("PT") else {
        return raw.to_string();
    };
    let Some((minutes, seconds)) = rest.split_once('M') else {
        return raw.to_string();
    };
    let seconds = seconds
        .trim_end_matches('S')
        .split('.')
        .next()
        .unwrap_or("0");
    format!("{minutes}:{seconds:0>2}")
}
