use axum::{
    extract::{DefaultBodyLimit, Json, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::task::spawn_blocking;
use tracing::{error, info, warn};

use crate::{
    app_state::{AppState, Stage, Status},
    config::LlmProvider,
    error::{AnalysisError, ChatError},
    ingest,
    llm::ChatMessage,
    models::{AgentProfile, QuestionnaireResponse},
    profile::{ChatExportBuilder, ProfileBuilder, QuestionnaireBuilder},
};

type ApiError = (StatusCode, Json<serde_json::Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        api_error(StatusCode::BAD_REQUEST, err.to_string())
    }
}

// --- Payloads y Respuestas de la API ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    messages: Vec<ChatMessage>,
    #[serde(default)]
    system_prompt: String,
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    provider: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    content: String,
}

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    // Las exportaciones reales superan con facilidad el límite por defecto de axum (2 MB).
    let export_limit = DefaultBodyLimit::max(app_state.config.max_export_bytes);

    Router::new()
        .route("/api/analyze", post(analyze_handler).layer(export_limit))
        .route("/api/questionnaire", post(questionnaire_handler))
        .route("/api/profile", get(profile_handler).delete(clear_profile_handler))
        .route("/api/profile/download", get(download_profile_handler))
        .route("/api/profile/system-prompt", get(system_prompt_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/status", get(status_handler))
        .route("/api/shutdown", post(shutdown_handler))
        .with_state(app_state)
}

// --- Handlers de Generación de Perfiles ---

/// Recibe el `conversations.json` tal cual (array u objeto con `conversations`).
#[axum::debug_handler]
async fn analyze_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<AgentProfile>, ApiError> {
    state.set_stage(Stage::Parsing, 0.2, "Parsing conversations...");

    // El análisis es CPU puro; no bloquea el runtime con exportaciones grandes.
    let task_state = state.clone();
    let result = spawn_blocking(move || -> Result<AgentProfile, AnalysisError> {
        let conversations = ingest::parse_export(&body)?;
        task_state.set_stage(Stage::Analyzing, 0.5, "Analyzing conversations...");
        let builder = ChatExportBuilder::new(&conversations);
        let profile = builder.build()?;
        info!("Perfil construido ({:?}).", builder.source());
        Ok(profile)
    })
    .await
    .map_err(|e| {
        error!("La tarea de análisis falló: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Analysis task failed")
    })?;

    match result {
        Ok(profile) => {
            state.set_stage(Stage::Complete, 1.0, "Profile generated.");
            store_profile(&state, &profile);
            Ok(Json(profile))
        }
        Err(err) => {
            warn!("Exportación rechazada: {}", err);
            state.set_stage(Stage::Failed, 0.0, err.to_string());
            Err(err.into())
        }
    }
}

#[axum::debug_handler]
async fn questionnaire_handler(
    State(state): State<AppState>,
    Json(payload): Json<QuestionnaireResponse>,
) -> Result<Json<AgentProfile>, ApiError> {
    state.set_stage(Stage::Generating, 0.5, "Generating profile from questionnaire...");

    let builder = QuestionnaireBuilder::new(&payload);
    match builder.build() {
        Ok(profile) => {
            info!("Perfil construido ({:?}).", builder.source());
            state.set_stage(Stage::Complete, 1.0, "Profile generated.");
            store_profile(&state, &profile);
            Ok(Json(profile))
        }
        Err(err) => {
            state.set_stage(Stage::Failed, 0.0, err.to_string());
            Err(err.into())
        }
    }
}

fn store_profile(state: &AppState, profile: &AgentProfile) {
    let mut current = state
        .current_profile
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *current = Some(profile.clone());
    info!("Perfil {} guardado en la sesión.", profile.id);
}

fn current_profile(state: &AppState) -> Result<AgentProfile, ApiError> {
    state
        .current_profile
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "No agent profile has been generated yet."))
}

// --- Handlers del Perfil Actual ---

#[axum::debug_handler]
async fn profile_handler(State(state): State<AppState>) -> Result<Json<AgentProfile>, ApiError> {
    current_profile(&state).map(Json)
}

#[axum::debug_handler]
async fn clear_profile_handler(State(state): State<AppState>) -> StatusCode {
    state
        .current_profile
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .take();
    state.set_stage(Stage::Idle, 0.0, "Servidor listo.");
    StatusCode::NO_CONTENT
}

#[axum::debug_handler]
async fn download_profile_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = current_profile(&state)?;
    let body = profile.to_pretty_json().map_err(|e| {
        error!("No se pudo serializar el perfil: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Could not serialize profile")
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"agent-profile.json\"",
            ),
        ],
        body,
    ))
}

#[axum::debug_handler]
async fn system_prompt_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = current_profile(&state)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        profile.system_prompt,
    ))
}

// --- Relay de Chat ---

#[axum::debug_handler]
async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatPayload>,
) -> Result<Json<ChatResponse>, ApiError> {
    if payload.api_key.trim().is_empty() {
        return Err(chat_error(ChatError::MissingApiKey));
    }
    let provider = LlmProvider::from_str(&payload.provider).map_err(chat_error)?;

    let system_prompt = if payload.system_prompt.trim().is_empty() {
        current_profile(&state)?.system_prompt
    } else {
        payload.system_prompt
    };

    let content = state
        .llm_manager
        .chat(provider, &payload.api_key, &system_prompt, &payload.messages)
        .await
        .map_err(chat_error)?;

    Ok(Json(ChatResponse { content }))
}

fn chat_error(err: ChatError) -> ApiError {
    let status = match err {
        ChatError::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    api_error(status, err.to_string())
}

// --- Estado y Apagado ---

#[axum::debug_handler]
async fn status_handler(State(state): State<AppState>) -> Json<Status> {
    Json(
        state
            .status
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone(),
    )
}

#[axum::debug_handler]
async fn shutdown_handler(
    State(state): State<AppState>,
) -> impl IntoResponse {
    info!("Petición de apagado recibida.");
    let sender = state
        .shutdown_sender
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .take();
    if let Some(sender) = sender {
        let _ = sender.send(());
    }
    StatusCode::OK
}
