use actix_web::web::Data;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use gametrack::cache::TtlCache;
use gametrack::controller::api::http_handlers;
use gametrack::controller::cdn::CdnClient;
use gametrack::controller::provider::StatsClient;

fn offline_provider() -> StatsClient {
    StatsClient::new("2025-26", false)
}

#[tokio::test]
async fn teams_fall_back_to_sample_when_provider_is_absent() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(TtlCache::new()))
            .app_data(Data::new(offline_provider()))
            .route("/api/teams", web::get().to(http_handlers::teams)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let teams = body.as_array().expect("teams response should be an array");
    assert_eq!(teams.len(), 2);
    for team in teams {
        assert_eq!(team["logoUrl"], "/static/logo.png");
    }
    assert_eq!(teams[0]["abbreviation"], "LAL");
    assert_eq!(teams[1]["abbreviation"], "GSW");
}

#[tokio::test]
async fn teams_come_from_the_directory_when_provider_is_enabled() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(TtlCache::new()))
            .app_data(Data::new(StatsClient::new("2025-26", true)))
            .route("/api/teams", web::get().to(http_handlers::teams)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let teams = body.as_array().expect("teams response should be an array");
    assert_eq!(teams.len(), 30);
    let lakers = teams
        .iter()
        .find(|t| t["id"] == 1_610_612_747_i64)
        .expect("lakers present");
    assert_eq!(lakers["full_name"], "Los Angeles Lakers");
    assert_eq!(
        lakers["logoUrl"],
        "https://cdn.nba.com/logos/nba/1610612747/global/L/logo.svg"
    );
}

#[tokio::test]
async fn leaders_reject_stats_outside_the_allow_list() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(TtlCache::new()))
            .app_data(Data::new(offline_provider()))
            .route("/api/leaders/homepage", web::get().to(http_handlers::leaders_homepage))
            .route("/api/leaders/{stat}", web::get().to(http_handlers::leaders)),
    )
    .await;

    for stat in [
        "PTS", "AST", "REB", "BLK", "STL", "FGM", "FGA", "FG3M", "FG3A", "FTM", "FTA", "FG_PCT",
        "FG3_PCT", "FT_PCT",
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/leaders/{stat}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "{stat} should be accepted");
        let body: Value = test::read_body_json(resp).await;
        assert!(body.is_array(), "{stat} should yield an array");
    }

    // matching is case-insensitive on the request path
    let req = test::TestRequest::get().uri("/api/leaders/pts").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/api/leaders/WOMBATS").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "invalid stat"}));
}

#[tokio::test]
async fn boxscore_falls_back_to_sample_when_cdn_returns_404() {
    let mut server = mockito::Server::new_async().await;
    let missing = server
        .mock("GET", "/liveData/boxscore/boxscore_bad-id.json")
        .with_status(404)
        .create_async()
        .await;

    let cdn = CdnClient::new().with_base_url(&server.url());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(cdn))
            .route("/api/game/{game_id}/boxscore", web::get().to(http_handlers::game_boxscore)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/game/bad-id/boxscore")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    missing.assert_async().await;
    let tricodes: Vec<&str> = body["teamStats"]
        .as_array()
        .expect("teamStats array")
        .iter()
        .filter_map(|t| t["teamTricode"].as_str())
        .collect();
    assert_eq!(tricodes, vec!["GSW", "LAL"]);
    assert!(body["playerStats"].is_array());
}

#[tokio::test]
async fn boxscore_flattens_the_live_feed() {
    let mut server = mockito::Server::new_async().await;
    let feed = json!({
        "game": {
            "gameId": "0022500001",
            "homeTeam": {
                "teamId": 1610612747,
                "teamTricode": "LAL",
                "score": 112,
                "statistics": {"points": 112, "reboundsTotal": 48, "assists": 22},
                "players": [
                    {
                        "personId": 2544,
                        "name": "LeBron James",
                        "statistics": {"minutes": "PT35M04.00S", "points": 28, "assists": 9}
                    }
                ]
            },
            "awayTeam": {
                "teamId": 1610612744,
                "teamTricode": "GSW",
                "score": 108,
                "statistics": {"points": 108, "reboundsTotal": 44, "assists": 25},
                "players": []
            }
        }
    });
    server
        .mock("GET", "/liveData/boxscore/boxscore_0022500001.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(feed.to_string())
        .create_async()
        .await;

    let cdn = CdnClient::new().with_base_url(&server.url());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(cdn))
            .route("/api/game/{game_id}/boxscore", web::get().to(http_handlers::game_boxscore)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/game/0022500001/boxscore")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let players = body["playerStats"].as_array().expect("playerStats array");
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["playerName"], "LeBron James");
    assert_eq!(players[0]["teamTricode"], "LAL");
    assert_eq!(players[0]["minutes"], "35:04");
    assert_eq!(players[0]["points"], 28);
    // stat absent from the feed surfaces as 0, never null
    assert_eq!(players[0]["turnovers"], 0);
    assert_eq!(
        players[0]["playerImageUrl"],
        "https://cdn.nba.com/headshots/nba/latest/1040x760/2544.png"
    );

    let teams = body["teamStats"].as_array().expect("teamStats array");
    assert_eq!(teams[0]["teamName"], "Los Angeles Lakers");
    assert_eq!(teams[1]["points"], 108);
}

#[tokio::test]
async fn scoreboard_unifies_the_live_feed_and_caches_it() {
    let mut server = mockito::Server::new_async().await;
    let feed = json!({
        "scoreboard": {
            "gameDate": "2026-01-15",
            "games": [
                {
                    "gameId": "0022500500",
                    "gameStatusText": "Q2 4:11",
                    "gameTimeUTC": "2026-01-16T02:30:00Z",
                    "arenaName": "Chase Center",
                    "homeTeam": {"teamId": 1610612744, "teamTricode": "GSW", "teamCity": "Golden State", "teamName": "Warriors", "score": 58},
                    "awayTeam": {"teamId": 1610612743, "teamTricode": "DEN", "teamCity": "Denver", "teamName": "Nuggets", "score": 61}
                }
            ]
        }
    });
    let live = server
        .mock("GET", "/liveData/scoreboard/todaysScoreboard_00.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(feed.to_string())
        .expect(1)
        .create_async()
        .await;

    let cdn = CdnClient::new().with_base_url(&server.url());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(TtlCache::new()))
            .app_data(Data::new(cdn))
            .route("/api/games/scoreboard", web::get().to(http_handlers::scoreboard)),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/api/games/scoreboard")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let game = &body["games"][0];
        assert_eq!(game["gameId"], "0022500500");
        assert_eq!(game["gameStatus"], "Q2 4:11");
        assert_eq!(game["homeTeam"], "Golden State Warriors");
        assert_eq!(game["awayAbbr"], "DEN");
        assert_eq!(game["homeScore"], 58);
        assert_eq!(game["awayScore"], 61);
        assert_eq!(game["arena"], "Chase Center");
        assert_eq!(
            game["homeLogo"],
            "https://cdn.nba.com/logos/nba/1610612744/global/L/logo.svg"
        );
    }

    // the second request must come out of the cache
    live.assert_async().await;
}

#[tokio::test]
async fn standings_split_by_conference() {
    let mut server = mockito::Server::new_async().await;
    let payload = json!({
        "resultSets": [
            {
                "name": "Standings",
                "headers": ["TeamID", "TeamCity", "TeamName", "Conference", "PlayoffRank", "WINS", "LOSSES", "ConferenceGamesBack", "LongWinStreak"],
                "rowSet": [
                    [1610612738, "Boston", "Celtics", "East", 1, 50, 22, 0.0, 9],
                    [1610612756, "Phoenix", "Suns", "West", 1, 48, 24, 0.0, 7]
                ]
            }
        ]
    });
    server
        .mock("GET", "/leaguestandingsv3")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .create_async()
        .await;

    let provider = StatsClient::new("2025-26", true).with_base_url(&server.url());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(TtlCache::new()))
            .app_data(Data::new(provider))
            .route("/api/standings", web::get().to(http_handlers::standings)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/standings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["east"][0]["TeamName"], "Celtics");
    assert_eq!(body["east"][0]["ConferenceRank"], 1);
    assert_eq!(body["east"][0]["GamesBack"], 0.0);
    // unmapped provider columns ride along under their original names
    assert_eq!(body["east"][0]["LongWinStreak"], 9);
    assert_eq!(body["west"][0]["TeamName"], "Suns");
    assert!(body["west"].as_array().is_some_and(|w| w.len() == 1));
}

#[tokio::test]
async fn team_schedule_classifies_games_from_the_league_feed() {
    let mut server = mockito::Server::new_async().await;
    let feed = json!({
        "leagueSchedule": {
            "seasonYear": "2025-26",
            "gameDates": [
                {
                    "gameDate": "01/10/2026 00:00:00",
                    "games": [
                        {
                            "gameId": "0022500400",
                            "gameDateTimeUTC": "2026-01-10T00:30:00Z",
                            "gameStatusText": "Final",
                            "homeTeam": {"teamId": 1610612747, "teamTricode": "LAL", "score": 120},
                            "awayTeam": {"teamId": 1610612738, "teamTricode": "BOS", "score": 115}
                        }
                    ]
                },
                {
                    "gameDate": "06/01/2099 00:00:00",
                    "games": [
                        {
                            "gameId": "0022500900",
                            "gameDateTimeUTC": "2099-06-01T02:00:00Z",
                            "gameStatusText": "7:00 pm ET",
                            "homeTeam": {"teamId": 1610612744, "teamTricode": "GSW", "score": 0},
                            "awayTeam": {"teamId": 1610612747, "teamTricode": "LAL", "score": 0}
                        }
                    ]
                }
            ]
        }
    });
    server
        .mock("GET", "/staticData/scheduleLeagueV2.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(feed.to_string())
        .create_async()
        .await;

    let cdn = CdnClient::new().with_base_url(&server.url());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(TtlCache::new()))
            .app_data(Data::new(cdn))
            .route("/api/team/{team_id}/schedule", web::get().to(http_handlers::team_schedule)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/team/1610612747/schedule")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["recent"][0]["GAME_ID"], "0022500400");
    assert_eq!(body["recent"][0]["MATCHUP"], "LAL vs BOS");
    assert_eq!(body["recent"][0]["WL"], "W");
    assert_eq!(body["upcoming"][0]["GAME_ID"], "0022500900");
    assert_eq!(body["upcoming"][0]["MATCHUP"], "LAL @ GSW");
    assert_eq!(body["upcoming"][0]["WL"], Value::Null);
}

#[tokio::test]
async fn roster_and_profile_fall_back_offline() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(offline_provider()))
            .route("/api/team/{team_id}/roster", web::get().to(http_handlers::team_roster))
            .route("/api/player/{player_id}/profile", web::get().to(http_handlers::player_profile)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/team/1610612744/roster")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["PLAYER"], "Stephen Curry");

    let req = test::TestRequest::get()
        .uri("/api/player/2544/profile")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    // the profile sample echoes the requested player id
    assert_eq!(body["info"][0]["PERSON_ID"], 2544);

    // non-integer ids are rejected by the route itself
    let req = test::TestRequest::get()
        .uri("/api/team/not-a-team/roster")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn accolades_default_to_an_empty_list() {
    let args = gametrack::args::Args {
        port: 5000,
        bind: "127.0.0.1".to_string(),
        offline: true,
        static_dir: std::path::PathBuf::from("./does-not-exist"),
        season: "2025-26".to_string(),
    };

    let app = test::init_service(
        App::new()
            .app_data(Data::new(offline_provider()))
            .app_data(Data::new(args))
            .route(
                "/api/player/{player_id}/accolades",
                web::get().to(http_handlers::player_accolades),
            ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/player/2544/accolades")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"accolades": []}));
}
