use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use crate::{config::AppConfig, llm::LlmManager, models::AgentProfile};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub llm_manager: LlmManager,
    pub status: Arc<Mutex<Status>>,
    /// Perfil de la sesión actual; se reemplaza entero en cada generación.
    pub current_profile: Arc<Mutex<Option<AgentProfile>>>,
    pub shutdown_sender: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl AppState {
    pub fn new(config: AppConfig, shutdown_sender: Option<oneshot::Sender<()>>) -> Self {
        let llm_manager = LlmManager::from_config(&config);
        Self {
            config,
            llm_manager,
            status: Arc::new(Mutex::new(Status::ready())),
            current_profile: Arc::new(Mutex::new(None)),
            shutdown_sender: Arc::new(Mutex::new(shutdown_sender)),
        }
    }

    /// Actualiza el estado de progreso (sólo informativo).
    pub fn set_stage(&self, stage: Stage, progress: f32, message: impl Into<String>) {
        let mut status = self
            .status
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        status.is_busy = !matches!(stage, Stage::Idle | Stage::Complete | Stage::Failed);
        status.stage = stage;
        status.progress = progress;
        status.message = message.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Idle,
    Parsing,
    Analyzing,
    Generating,
    Complete,
    Failed,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Status {
    pub is_busy: bool,
    pub stage: Stage,
    pub message: String,
    pub progress: f32, // Valor entre 0.0 y 1.0
}

impl Status {
    fn ready() -> Self {
        Self {
            message: "Servidor listo.".to_string(),
            ..Default::default()
        }
    }
}
