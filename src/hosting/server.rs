use crate::dto;
use crate::error::GameError;
use crate::game::Difficulty;
use crate::game::Move;
use crate::store::Lobby;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        let state = web::Data::new(Lobby::default());
        crate::store::spawn_sweeper(state.clone().into_inner());
        log::info!("starting game server");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(4)
        .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()))?
        .run()
        .await
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/session/create", web::post().to(create))
        .route("/api/session/{session_id}", web::get().to(lookup))
        .route("/api/session/{session_id}", web::delete().to(delete))
        .route("/api/game/play", web::post().to(play))
        .route("/api/game/reset", web::post().to(reset))
        .route("/api/game/difficulty", web::post().to(difficulty))
        .route("/api/game/stats/{session_id}", web::get().to(stats));
}

/// Maps an error kind to its transport status, envelope included.
fn failure(e: GameError) -> HttpResponse {
    let body = serde_json::json!({ "success": false, "message": e.to_string() });
    match e {
        GameError::SessionNotFound => HttpResponse::NotFound().json(body),
        GameError::InvalidMove(_) | GameError::InvalidDifficulty(_) => {
            HttpResponse::BadRequest().json(body)
        }
    }
}

async fn create(lobby: web::Data<Lobby>) -> impl Responder {
    let id = lobby.open().await;
    HttpResponse::Ok().json(serde_json::json!({ "success": true, "sessionId": id }))
}

async fn lookup(lobby: web::Data<Lobby>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match lobby.with(&id, |s| dto::SessionView::from(&*s)).await {
        Ok(view) => {
            HttpResponse::Ok().json(serde_json::json!({ "success": true, "session": view }))
        }
        Err(e) => failure(e),
    }
}

async fn delete(lobby: web::Data<Lobby>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match lobby.close(&id).await {
        Ok(()) => HttpResponse::Ok()
            .json(serde_json::json!({ "success": true, "message": "session closed" })),
        Err(e) => failure(e),
    }
}

async fn play(lobby: web::Data<Lobby>, body: web::Json<dto::Play>) -> impl Responder {
    let request = body.into_inner();
    let choice = match Move::try_from(request.player_choice.as_str()) {
        Ok(choice) => choice,
        Err(e) => return failure(e),
    };
    match lobby.with(&request.session_id, |s| s.play_round(choice)).await {
        Ok(round) => {
            HttpResponse::Ok().json(serde_json::json!({ "success": true, "result": round }))
        }
        Err(e) => failure(e),
    }
}

async fn reset(lobby: web::Data<Lobby>, body: web::Json<dto::Reset>) -> impl Responder {
    match lobby.with(&body.session_id, |s| s.reset()).await {
        Ok(()) => {
            HttpResponse::Ok().json(serde_json::json!({ "success": true, "message": "game reset" }))
        }
        Err(e) => failure(e),
    }
}

async fn difficulty(lobby: web::Data<Lobby>, body: web::Json<dto::SetDifficulty>) -> impl Responder {
    let request = body.into_inner();
    let difficulty = match Difficulty::try_from(request.difficulty.as_str()) {
        Ok(difficulty) => difficulty,
        Err(e) => return failure(e),
    };
    match lobby
        .with(&request.session_id, |s| s.set_difficulty(difficulty))
        .await
    {
        Ok(()) => HttpResponse::Ok()
            .json(serde_json::json!({ "success": true, "message": "difficulty updated" })),
        Err(e) => failure(e),
    }
}

async fn stats(lobby: web::Data<Lobby>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match lobby.with(&id, |s| s.stats()).await {
        Ok(stats) => {
            HttpResponse::Ok().json(serde_json::json!({ "success": true, "stats": stats }))
        }
        Err(e) => failure(e),
    }
}
