use crate::model::{ScheduleGame, TeamSchedule};
use chrono::{DateTime, NaiveDateTime, Utc};

/// A team's game as pulled off the league schedule feed, before it has been
/// classified as upcoming or recent.
#[derive(Clone, Debug)]
pub struct GameSlot {
    pub game_id: String,
    /// ISO timestamp from the feed; absent or unparseable means not started.
    pub start_time: Option<String>,
    pub status_text: String,
    pub matchup: String,
    pub team_score: Option<i64>,
    pub opponent_score: Option<i64>,
}

/// Splits a team's games into up to 5 upcoming and 5 recent entries.
///
/// A game whose status text is the literal "Final" is always recent, whatever
/// its timestamp says. Anything else is upcoming when its timestamp is in the
/// future or does not parse (not-yet-started), and recent otherwise. Recent
/// games are the last 5 chronologically, newest first; upcoming games are the
/// next 5, soonest first. Win/loss is derived from the scores at fetch time,
/// never read from a persisted result field.
pub fn classify_games(games: Vec<GameSlot>, now: DateTime<Utc>) -> TeamSchedule {
    let mut upcoming: Vec<(Option<DateTime<Utc>>, GameSlot)> = Vec::new();
    let mut recent: Vec<(Option<DateTime<Utc>>, GameSlot)> = Vec::new();

    for game in games {
        let when = game.start_time.as_deref().and_then(parse_game_time);
        let is_final = game.status_text == "Final";
        let not_started = match when {
            Some(t) => t > now,
            None => true,
        };
        if is_final || !not_started {
            recent.push((when, game));
        } else {
            upcoming.push((when, game));
        }
    }

    // unparseable times sort to the end of the upcoming list
    upcoming.sort_by_key(|&(when, _)| when.unwrap_or(DateTime::<Utc>::MAX_UTC));
    upcoming.truncate(5);

    recent.sort_by_key(|&(when, _)| when.unwrap_or(DateTime::<Utc>::MIN_UTC));
    let keep_from = recent.len().saturating_sub(5);
    let mut recent: Vec<_> = recent.split_off(keep_from);
    recent.reverse();

    TeamSchedule {
        upcoming: upcoming
            .into_iter()
            .map(|(when, game)| to_schedule_game(when, game, false))
            .collect(),
        recent: recent
            .into_iter()
            .map(|(when, game)| to_schedule_game(when, game, true))
            .collect(),
    }
}

fn to_schedule_game(when: Option<DateTime<Utc>>, game: GameSlot, played: bool) -> ScheduleGame {
    let win_loss = if played {
        derive_win_loss(game.team_score, game.opponent_score)
    } else {
        None
    };
    ScheduleGame {
        game_id: game.game_id,
        game_datetime: when.map(|t| t.to_rfc3339()),
        matchup: game.matchup,
        win_loss,
    }
}

fn derive_win_loss(team: Option<i64>, opponent: Option<i64>) -> Option<String> {
    match (team, opponent) {
        (Some(us), Some(them)) if us > them => Some("W".to_string()),
        (Some(us), Some(them)) if us < them => Some("L".to_string()),
        _ => None,
    }
}

fn parse_game_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
