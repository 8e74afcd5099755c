//! Tipos de error del análisis y del relay de chat.

/// Errores al construir un perfil.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Único error fatal del análisis: no hay nada que analizar.
    #[error("No user messages found in the export")]
    NoUserMessages,

    #[error("Invalid JSON file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("This does not look like a ChatGPT export: expected an array of conversations or a `conversations` field")]
    UnrecognizedExport,

    #[error("Questionnaire answer missing: {0}")]
    IncompleteQuestionnaire(String),
}

/// Errores del relay de chat hacia el proveedor.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("API key is required")]
    MissingApiKey,

    #[error("Invalid provider: {0}")]
    UnsupportedProvider(String),

    #[error("The conversation must end with a user message")]
    EmptyConversation,

    #[error("{provider} API error: {reason}")]
    Provider { provider: String, reason: String },
}
