use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use log::warn;
use serde_json::{Value, json};

use super::data_service::{self, LEADER_STATS};
use crate::args::Args;
use crate::cache::{
    LEADERS_TTL_SECS, SCOREBOARD_TTL_SECS, STANDINGS_TTL_SECS, TEAMS_TTL_SECS, TtlCache,
};
use crate::controller::cdn::CdnClient;
use crate::controller::provider::StatsClient;
use crate::controller::{accolades, samples};
use crate::model::UpstreamError;

/// The fallback policy, applied once per endpoint at the handler boundary:
/// one live attempt, and any upstream error is logged and swapped for the
/// endpoint's literal sample. No retries, no backoff.
fn or_sample(
    endpoint: &str,
    live: Result<Value, UpstreamError>,
    sample: impl FnOnce() -> Value,
) -> Value {
    match live {
        Ok(payload) => payload,
        Err(e) => {
            warn!("{endpoint} failed, serving sample fallback: {e}");
            sample()
        }
    }
}

pub async fn teams(cache: Data<TtlCache>, provider: Data<StatsClient>) -> impl Responder {
    if let Some(cached) = cache.get("teams").await {
        return HttpResponse::Ok().json(cached);
    }
    let payload = or_sample("api_teams", data_service::teams_payload(&provider), samples::teams);
    cache.set("teams", payload.clone(), TEAMS_TTL_SECS).await;
    HttpResponse::Ok().json(payload)
}

pub async fn standings(cache: Data<TtlCache>, provider: Data<StatsClient>) -> impl Responder {
    if let Some(cached) = cache.get("standings").await {
        return HttpResponse::Ok().json(cached);
    }
    let payload = or_sample(
        "api_standings",
        data_service::standings_payload(&provider).await,
        samples::standings,
    );
    cache.set("standings", payload.clone(), STANDINGS_TTL_SECS).await;
    HttpResponse::Ok().json(payload)
}

pub async fn scoreboard(cache: Data<TtlCache>, cdn: Data<CdnClient>) -> impl Responder {
    if let Some(cached) = cache.get("scoreboard").await {
        return HttpResponse::Ok().json(cached);
    }
    let payload = or_sample(
        "api_scoreboard",
        data_service::scoreboard_payload(&cdn).await,
        samples::scoreboard,
    );
    cache.set("scoreboard", payload.clone(), SCOREBOARD_TTL_SECS).await;
    HttpResponse::Ok().json(payload)
}

pub async fn leaders_homepage(cache: Data<TtlCache>, provider: Data<StatsClient>) -> impl Responder {
    if let Some(cached) = cache.get("leaders_home").await {
        return HttpResponse::Ok().json(cached);
    }
    let payload = or_sample(
        "api_leaders_home",
        data_service::leaders_homepage_payload(&provider).await,
        samples::leaders_homepage,
    );
    cache.set("leaders_home", payload.clone(), LEADERS_TTL_SECS).await;
    HttpResponse::Ok().json(payload)
}

pub async fn leaders(path: web::Path<String>, provider: Data<StatsClient>) -> impl Responder {
    let stat = path.into_inner().to_uppercase();
    if !LEADER_STATS.contains(&stat.as_str()) {
        return HttpResponse::BadRequest().json(json!({"error": "invalid stat"}));
    }
    let payload = or_sample(
        "api_leaders_full",
        data_service::leaders_payload(&provider, &stat).await,
        samples::leaders,
    );
    HttpResponse::Ok().json(payload)
}

pub async fn team_roster(path: web::Path<i64>, provider: Data<StatsClient>) -> impl Responder {
    let team_id = path.into_inner();
    let payload = or_sample(
        "api_team_roster",
        data_service::roster_payload(&provider, team_id).await,
        samples::roster,
    );
    HttpResponse::Ok().json(payload)
}

pub async fn team_schedule(
    path: web::Path<i64>,
    cache: Data<TtlCache>,
    cdn: Data<CdnClient>,
) -> impl Responder {
    let team_id = path.into_inner();
    let payload = or_sample(
        "api_team_schedule",
        data_service::team_schedule_payload(&cdn, &cache, team_id).await,
        samples::schedule,
    );
    HttpResponse::Ok().json(payload)
}

pub async fn player_profile(path: web::Path<i64>, provider: Data<StatsClient>) -> impl Responder {
    let player_id = path.into_inner();
    let payload = or_sample(
        "api_player_profile",
        data_service::player_profile_payload(&provider, player_id).await,
        || samples::player_profile(player_id),
    );
    HttpResponse::Ok().json(payload)
}

pub async fn player_gamelog(path: web::Path<i64>, provider: Data<StatsClient>) -> impl Responder {
    let player_id = path.into_inner();
    let payload = or_sample(
        "api_player_gamelog",
        data_service::player_gamelog_payload(&provider, player_id).await,
        samples::player_gamelog,
    );
    HttpResponse::Ok().json(payload)
}

pub async fn game_boxscore(path: web::Path<String>, cdn: Data<CdnClient>) -> impl Responder {
    let game_id = path.into_inner();
    let payload = or_sample(
        "api_game_boxscore",
        data_service::boxscore_payload(&cdn, &game_id).await,
        samples::boxscore,
    );
    HttpResponse::Ok().json(payload)
}

pub async fn player_accolades(
    path: web::Path<i64>,
    provider: Data<StatsClient>,
    args: Data<Args>,
) -> impl Responder {
    let player_id = path.into_inner();
    let list = accolades::accolades_for_player(&args.accolades_file(), player_id, &provider).await;
    HttpResponse::Ok().json(json!({ "accolades": list }))
}
