use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use skybound_core::{
    ResultView, SearchSession, SearchState, TravelQueryService, present,
};

use crate::models::{POPULAR_CITIES, SearchRequest};

type ApiError = (StatusCode, Json<Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn bad_request_error(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn busy_error() -> ApiError {
    (
        StatusCode::CONFLICT,
        Json(json!({ "error": "A search is already in progress" })),
    )
}

// Single user-visible message for every query failure kind; the distinct
// kinds are logged at the boundary instead.
fn sync_failed_error() -> ApiError {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": "Travel data sync failed. Please try again." })),
    )
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SearchSession>,
    pub query: Arc<TravelQueryService>,
    pub link_encrypted: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(query: Arc<TravelQueryService>) -> Self {
        Self {
            session: Arc::new(SearchSession::new()),
            query,
            link_encrypted: Arc::new(AtomicBool::new(false)),
        }
    }

    fn link_label(&self) -> &'static str {
        if self.link_encrypted.load(Ordering::Relaxed) {
            "ENCRYPTED"
        } else {
            "CONNECTED"
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/cities", get(cities))
        .route("/search", post(search))
        .route("/search/state", get(search_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "SkyBound AI Travel Search",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "AI-assisted travel search simulating real-time OTA aggregation",
        "endpoints": {
            "GET /health": "Health check",
            "GET /cities": "Popular city suggestions",
            "POST /search": "Run a travel search",
            "GET /search/state": "Current search lifecycle state"
        }
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "link": state.link_label(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn cities() -> Json<Value> {
    Json(json!({ "cities": POPULAR_CITIES }))
}

async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<ResultView> {
    let params = request.into_params().map_err(|msg| {
        info!(reason = %msg, "rejecting search request");
        bad_request_error(&msg)
    })?;

    // Submission guard: while a query is in flight, repeat submissions are
    // dropped rather than queued.
    let Some(ticket) = state.session.try_begin() else {
        info!("dropping search submission, query already in flight");
        return Err(busy_error());
    };

    info!(
        origin = %params.origin,
        destination = %params.destination,
        "search started"
    );

    match state.query.query(&params).await {
        Ok(result) => {
            let view = present(&result);
            state.session.resolve(ticket, Ok(result));
            Ok(Json(view))
        }
        Err(err) => {
            error!(kind = err.kind(), error = %err, "search failed");
            state.session.resolve(ticket, Err(err));
            Err(sync_failed_error())
        }
    }
}

async fn search_state(State(state): State<AppState>) -> Json<SearchState> {
    Json(state.session.snapshot())
}
