use axum::{
    extract::{rejection::JsonRejection, FromRequest, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chess_brain::position::STARTING_FEN;
use chess_brain::{
    AgentStatus, BrainError, ChatReply, Difficulty, GameData, LearnOutcome, LearningAgent,
    MoveSuggestion, Personality, StatsReport,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Shared handle to the one learning agent.
///
/// Every handler holds the lock for its whole operation, so learning
/// updates and the settings written by move requests never interleave.
#[derive(Clone)]
pub struct AppState {
    agent: Arc<Mutex<LearningAgent>>,
}

impl AppState {
    pub fn new(agent: LearningAgent) -> Self {
        Self {
            agent: Arc::new(Mutex::new(agent)),
        }
    }

    /// Persist the current state, for service teardown
    pub fn flush(&self) -> Result<(), BrainError> {
        self.agent.lock().flush()
    }
}

#[derive(Deserialize, Default)]
pub struct MoveRequest {
    #[serde(default)]
    pub fen: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct LearnRequest {
    #[serde(rename = "gameData", default)]
    pub game_data: GameData,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub games_learned: u64,
    pub difficulty: Difficulty,
    pub personality: Personality,
}

impl From<AgentStatus> for HealthResponse {
    fn from(status: AgentStatus) -> Self {
        Self {
            status: "healthy",
            games_learned: status.games_played,
            difficulty: status.difficulty,
            personality: status.personality,
        }
    }
}

/// JSON body extractor whose rejections are rendered by [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Request failure rendered as `{"error": "..."}`
pub enum ApiError {
    /// Agent rejected or failed the operation
    Brain(BrainError),
    /// Body missing, not JSON, or the wrong shape
    Body(JsonRejection),
}

impl From<BrainError> for ApiError {
    fn from(err: BrainError) -> Self {
        Self::Brain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Brain(err) if err.is_client_error() => {
                warn!("[API] Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Brain(err) => {
                error!("[API] Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Body(rejection) => {
                warn!("[API] Rejected request body: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/game/move", post(game_move))
        .route("/api/chat", post(chat))
        .route("/api/learn", post(learn))
        .route("/api/stats", get(stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.agent.lock().status().into())
}

async fn game_move(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<MoveRequest>,
) -> Result<Json<MoveSuggestion>, ApiError> {
    let personality = match payload.personality.as_deref() {
        Some(name) => name.parse()?,
        None => Personality::default(),
    };
    let difficulty = match payload.difficulty.as_deref() {
        Some(name) => name.parse()?,
        None => Difficulty::default(),
    };
    let fen = payload.fen.as_deref().unwrap_or(STARTING_FEN);

    let suggestion = state
        .agent
        .lock()
        .request_move(fen, personality, difficulty, &mut rand::rng())?;
    Ok(Json(suggestion))
}

async fn chat(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let message = payload.message.unwrap_or_default();
    Ok(Json(state.agent.lock().chat(&message, &mut rand::rng())))
}

async fn learn(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LearnRequest>,
) -> Result<Json<LearnOutcome>, ApiError> {
    let outcome = state.agent.lock().submit_learning(payload.game_data)?;
    Ok(Json(outcome))
}

async fn stats(State(state): State<AppState>) -> Json<StatsReport> {
    Json(state.agent.lock().stats())
}
