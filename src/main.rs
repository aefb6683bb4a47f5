use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use gametrack::args;
use gametrack::cache::TtlCache;
use gametrack::controller::api::http_handlers;
use gametrack::controller::cdn::CdnClient;
use gametrack::controller::provider::StatsClient;
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = args::args_checks();
    let args_for_web = args.clone();

    if args.offline {
        info!("offline mode: the stats provider is disabled, serving sample data");
    }

    let cache = TtlCache::new();
    let provider = StatsClient::new(&args.season, !args.offline);
    let cdn = CdnClient::new();
    let static_dir = args.static_dir.clone();

    info!("listening on {}:{}", args.bind, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(cache.clone()))
            .app_data(Data::new(provider.clone()))
            .app_data(Data::new(cdn.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .route("/api/teams", web::get().to(http_handlers::teams))
            .route("/api/standings", web::get().to(http_handlers::standings))
            .route("/api/games/scoreboard", web::get().to(http_handlers::scoreboard))
            // homepage must register before the {stat} route
            .route("/api/leaders/homepage", web::get().to(http_handlers::leaders_homepage))
            .route("/api/leaders/{stat}", web::get().to(http_handlers::leaders))
            .route("/api/team/{team_id}/roster", web::get().to(http_handlers::team_roster))
            .route("/api/team/{team_id}/schedule", web::get().to(http_handlers::team_schedule))
            .route("/api/player/{player_id}/profile", web::get().to(http_handlers::player_profile))
            .route("/api/player/{player_id}/gamelog", web::get().to(http_handlers::player_gamelog))
            .route("/api/player/{player_id}/accolades", web::get().to(http_handlers::player_accolades))
            .route("/api/game/{game_id}/boxscore", web::get().to(http_handlers::game_boxscore))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone())) // serve the static files
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
