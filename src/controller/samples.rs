use chrono::Utc;
use serde_json::{Value, json};

// Literal fallback payloads, one per endpoint, structurally identical to a
// live response. Served whenever the live path fails so the frontend always
// has something renderable.

pub fn teams() -> Value {
    json!([
        {"id": 1610612747, "full_name": "Los Angeles Lakers", "abbreviation": "LAL", "logoUrl": "/static/logo.png"},
        {"id": 1610612744, "full_name": "Golden State Warriors", "abbreviation": "GSW", "logoUrl": "/static/logo.png"}
    ])
}

pub fn standings() -> Value {
    json!({
        "east": [
            {"TeamName": "Boston Celtics", "WINS": 50, "LOSSES": 22, "GamesBack": 0},
            {"TeamName": "Milwaukee Bucks", "WINS": 45, "LOSSES": 27, "GamesBack": 5}
        ],
        "west": [
            {"TeamName": "Phoenix Suns", "WINS": 48, "LOSSES": 24, "GamesBack": 0},
            {"TeamName": "Denver Nuggets", "WINS": 44, "LOSSES": 28, "GamesBack": 4}
        ]
    })
}

pub fn scoreboard() -> Value {
    json!({
        "games": [
            {
                "gameId": "sample-1",
                "gameStatus": "Final",
                "homeTeamId": 1610612747,
                "awayTeamId": 1610612744,
                "homeTeam": "Los Angeles Lakers",
                "awayTeam": "Golden State Warriors",
                "homeAbbr": "LAL",
                "awayAbbr": "GSW",
                "homeLogo": "https://cdn.nba.com/logos/nba/1610612747/global/L/logo.svg",
                "awayLogo": "https://cdn.nba.com/logos/nba/1610612744/global/L/logo.svg",
                "homeScore": 112,
                "awayScore": 108,
                "startTimeUTC": Utc::now().to_rfc3339(),
                "arena": "Staples Center"
            }
        ]
    })
}

pub fn leaders_homepage() -> Value {
    json!({
        "PTS": [
            {"PLAYER": "L. James", "TEAM": "LAL", "PTS": 30.1},
            {"PLAYER": "S. Curry", "TEAM": "GSW", "PTS": 29.4}
        ],
        "REB": [
            {"PLAYER": "N. Jokic", "TEAM": "DEN", "REB": 11.2},
            {"PLAYER": "G. Antetokounmpo", "TEAM": "MIL", "REB": 10.8}
        ],
        "AST": [
            {"PLAYER": "L. Doncic", "TEAM": "DAL", "AST": 9.8},
            {"PLAYER": "C. Paul", "TEAM": "PHX", "AST": 8.9}
        ]
    })
}

pub fn leaders() -> Value {
    json!([
        {"PLAYER": "L. James", "TEAM": "LAL", "PTS": 30.1, "PERSON_ID": 2544},
        {"PLAYER": "S. Curry", "TEAM": "GSW", "PTS": 29.4, "PERSON_ID": 201939}
    ])
}

pub fn roster() -> Value {
    json!([
        {"PLAYER_ID": 201939, "PLAYER": "Stephen Curry", "NUM": "30", "POSITION": "G", "AGE": 36, "HEIGHT": "6-2", "WEIGHT": "185", "SCHOOL": "Davidson"},
        {"PLAYER_ID": 2544, "PLAYER": "LeBron James", "NUM": "23", "POSITION": "F", "AGE": 39, "HEIGHT": "6-9", "WEIGHT": "250", "SCHOOL": "St. Vincent-St. Mary"}
    ])
}

pub fn schedule() -> Value {
    json!({
        "upcoming": [
            {"GAME_ID": "1001", "GAME_DATETIME": "2025-04-10T19:30:00", "MATCHUP": "LAL vs GSW", "WL": null}
        ],
        "recent": [
            {"GAME_ID": "999", "GAME_DATETIME": "2025-04-08T19:30:00", "MATCHUP": "LAL @ BOS", "WL": "L"}
        ]
    })
}

pub fn player_profile(player_id: i64) -> Value {
    json!({
        "info": [
            {
                "PERSON_ID": player_id,
                "DISPLAY_FIRST_LAST": "Sample Player",
                "TEAM_NAME": "Sample Team",
                "JERSEY": "0",
                "POSITION": "G",
                "HEIGHT": "6-5",
                "WEIGHT": "200",
                "AGE": 25,
                "PTS": 20.1,
                "REB": 5.2,
                "AST": 6.3
            }
        ]
    })
}

pub fn player_gamelog() -> Value {
    json!([
        {"GAME_DATE": "2025-11-01", "MATCHUP": "LAL vs GSW", "PTS": 28, "REB": 6, "AST": 7, "MIN": "35:00"},
        {"GAME_DATE": "2025-10-29", "MATCHUP": "LAL @ BOS", "PTS": 14, "REB": 4, "AST": 3, "MIN": "28:12"}
    ])
}

pub fn boxscore() -> Value {
    json!({
        "playerStats": [
            {
                "personId": 201939,
                "playerName": "Stephen Curry",
                "teamTricode": "GSW",
                "minutes": "36:12",
                "points": 34,
                "reboundsTotal": 5,
                "assists": 8,
                "steals": 2,
                "blocks": 0,
                "fieldGoalsMade": 12,
                "fieldGoalsAttempted": 23,
                "threePointersMade": 7,
                "threePointersAttempted": 13,
                "freeThrowsMade": 3,
                "freeThrowsAttempted": 3,
                "turnovers": 2,
                "plusMinusPoints": 10,
                "offensiveRating": 120.5,
                "defensiveRating": 95.3,
                "netRating": 25.2,
                "trueShootingPercentage": 0.66,
                "usagePercentage": 0.32,
                "assistPercentage": 0.28,
                "turnoverRatio": 10.4,
                "playerImageUrl": "https://cdn.nba.com/headshots/nba/latest/1040x760/201939.png"
            }
        ],
        "teamStats": [
            {
                "teamTricode": "GSW",
                "teamName": "Golden State Warriors",
                "points": 108,
                "reboundsTotal": 44,
                "assists": 25,
                "steals": 6,
                "blocks": 4,
                "fieldGoalsMade": 39,
                "fieldGoalsAttempted": 92,
                "threePointersMade": 14,
                "threePointersAttempted": 39,
                "freeThrowsMade": 16,
                "freeThrowsAttempted": 21,
                "turnovers": 12
            },
            {
                "teamTricode": "LAL",
                "teamName": "Los Angeles Lakers",
                "points": 112,
                "reboundsTotal": 48,
                "assists": 22,
                "steals": 5,
                "blocks": 6,
                "fieldGoalsMade": 41,
                "fieldGoalsAttempted": 90,
                "threePointersMade": 10,
                "threePointersAttempted": 30,
                "freeThrowsMade": 20,
                "freeThrowsAttempted": 26,
                "turnovers": 14
            }
        ]
    })
}
