//! HTTP + WebSocket surface over the app.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::app::{App, View};
use crate::dashboard;
use crate::error::AppError;
use crate::resources::{self, CategoryFilter};
use crate::stepper::{
    ConversationStage, ConversationStepper, GREETING, Message as ChatMessage, SessionEvent,
    SessionState, SubmitOutcome,
};

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<App>,
}

/// Build the router with every REST and WebSocket route.
pub fn app_routes(app: Arc<App>) -> Router {
    let state = AppState { app };

    Router::new()
        .route("/health", get(health))
        .route("/api/view", get(get_view).post(set_view))
        .route("/api/back", post(back))
        .route("/api/chat/session", get(get_session))
        .route("/api/chat/messages", post(post_message))
        .route("/ws/chat", get(ws_chat_handler))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/quests/{id}", get(get_quest))
        .route("/api/resources", get(list_resources))
        .route("/api/resources/categories", get(list_categories))
        .route("/api/resources/bookmarks", get(list_bookmarks))
        .route("/api/learning-paths", get(list_learning_paths))
        .with_state(state)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoActiveSession => StatusCode::CONFLICT,
            AppError::UnknownView(_)
            | AppError::UnknownCommand(_)
            | AppError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            AppError::QuestNotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}

/// Chat session as exposed to clients.
#[derive(Debug, Serialize)]
struct SessionStatus {
    session_id: Uuid,
    stage: ConversationStage,
    stage_number: u8,
    completion: u8,
    busy: bool,
    greeting: &'static str,
    messages: Vec<ChatMessage>,
}

impl From<SessionState> for SessionStatus {
    fn from(state: SessionState) -> Self {
        Self {
            session_id: state.id,
            stage: state.stage,
            stage_number: state.stage.number(),
            completion: state.completion,
            busy: state.busy,
            greeting: GREETING,
            messages: state.messages,
        }
    }
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "learnquest"
    }))
}

// ── Navigation ──────────────────────────────────────────────────────────

async fn get_view(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({"view": state.app.view().await}))
}

#[derive(Deserialize)]
struct ViewRequest {
    view: String,
}

async fn set_view(
    State(state): State<AppState>,
    Json(body): Json<ViewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view: View = body.view.parse()?;
    state.app.open(view).await;
    Ok(Json(serde_json::json!({"view": view})))
}

async fn back(State(state): State<AppState>) -> impl IntoResponse {
    state.app.back().await;
    Json(serde_json::json!({"view": View::Landing}))
}

// ── Chat ────────────────────────────────────────────────────────────────

async fn active_session(app: &App) -> Result<Arc<ConversationStepper>, AppError> {
    app.session().await.ok_or(AppError::NoActiveSession)
}

async fn get_session(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session = active_session(&state.app).await?;
    Ok(Json(SessionStatus::from(session.snapshot().await)))
}

#[derive(Deserialize)]
struct SubmitRequest {
    text: String,
}

async fn post_message(
    State(state): State<AppState>,
    Json(body): Json<SubmitRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state.app.submit(&body.text).await?;
    let label = outcome.label();
    let reply = match outcome {
        SubmitOutcome::Accepted(message) => (
            StatusCode::ACCEPTED,
            Json(serde_json::json!({"outcome": label, "message": message})),
        ),
        _ => (StatusCode::OK, Json(serde_json::json!({"outcome": label}))),
    };
    Ok(reply)
}

// ── Chat WebSocket ──────────────────────────────────────────────────────

/// Frame sent by a chat client.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientFrame {
    Message { content: String },
}

async fn ws_chat_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    info!("Chat client connecting");
    ws.on_upgrade(|socket| handle_chat_socket(socket, state.app))
}

async fn send_json<T: Serialize>(socket: &mut WebSocket, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => socket.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            warn!(error = %e, "Failed to serialize chat frame");
            true
        }
    }
}

async fn handle_chat_socket(mut socket: WebSocket, app: Arc<App>) {
    let Some(session) = app.session().await else {
        let frame = serde_json::json!({
            "type": "error",
            "message": AppError::NoActiveSession.to_string(),
        });
        let _ = send_json(&mut socket, &frame).await;
        let _ = socket.send(Message::Close(None)).await;
        return;
    };

    // subscribe before the snapshot so no event falls between the two
    let mut rx = session.subscribe();
    let sync = serde_json::json!({
        "type": "session_sync",
        "session": SessionStatus::from(session.snapshot().await),
    });
    if !send_json(&mut socket, &sync).await {
        warn!("Failed to send initial sync, client disconnected");
        return;
    }
    info!("Chat client connected");

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        let closed = matches!(event, SessionEvent::Closed { .. });
                        if !send_json(&mut socket, &event).await {
                            debug!("Chat client disconnected during send");
                            break;
                        }
                        if closed {
                            let _ = socket.send(Message::Close(None)).await;
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(missed = n, "Chat client lagged behind broadcast");
                        let sync = serde_json::json!({
                            "type": "session_sync",
                            "session": SessionStatus::from(session.snapshot().await),
                        });
                        if !send_json(&mut socket, &sync).await {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("Chat broadcast channel closed");
                        break;
                    }
                }
            }

            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ClientFrame>(&text) {
                            Ok(ClientFrame::Message { content }) => {
                                let outcome = session.submit(&content).await;
                                if !outcome.is_accepted() {
                                    let frame = serde_json::json!({
                                        "type": "submit_refused",
                                        "outcome": outcome.label(),
                                    });
                                    if !send_json(&mut socket, &frame).await {
                                        break;
                                    }
                                }
                            }
                            Err(e) => {
                                debug!(error = %e, text = %text, "Invalid JSON from chat client");
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Chat client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "Chat WebSocket error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    info!("Chat connection closed");
}

// ── Dashboard ───────────────────────────────────────────────────────────

async fn get_dashboard() -> impl IntoResponse {
    Json(serde_json::json!({
        "quests": dashboard::quests(),
        "summary": dashboard::summary(),
    }))
}

async fn get_quest(Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(dashboard::quest(&id)?))
}

// ── Resources ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ResourceQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    category: String,
}

async fn list_resources(Query(query): Query<ResourceQuery>) -> Result<impl IntoResponse, AppError> {
    let category: CategoryFilter = query.category.parse()?;
    let found = resources::filter(&query.q, category);
    Ok(Json(serde_json::json!({
        "count": found.len(),
        "resources": found,
    })))
}

async fn list_categories() -> impl IntoResponse {
    Json(resources::categories())
}

async fn list_bookmarks() -> impl IntoResponse {
    Json(resources::bookmarked())
}

async fn list_learning_paths() -> impl IntoResponse {
    let paths: Vec<serde_json::Value> = resources::learning_paths()
        .iter()
        .map(|p| {
            serde_json::json!({
                "path": p,
                "resource_percent": p.resource_percent(),
            })
        })
        .collect();
    Json(paths)
}
