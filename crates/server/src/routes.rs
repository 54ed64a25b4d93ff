use std::sync::Arc;

use axum::{routing::get, Json, Router};
use common::types::Health;
use sea_orm::DatabaseConnection;
use service::player::{repo::seaorm::SeaOrmPlayerRepository, PlayerService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

pub mod players;

/// Shared handler state: the service holds the repository, which holds the pool.
#[derive(Clone)]
pub struct ServerState {
    pub players: Arc<PlayerService<SeaOrmPlayerRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmPlayerRepository::new(db));
        Self { players: Arc::new(PlayerService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, player REST endpoints and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let players = Router::new()
        .route("/rest/players", get(players::list).post(players::create))
        .route("/rest/players/count", get(players::count))
        .route(
            "/rest/players/:id",
            get(players::get).post(players::update).delete(players::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(players)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
