//! Carga y gestión de configuración de la aplicación (servidor + relay de chat).

use std::env;
use anyhow::{anyhow, Context, Result};

use crate::error::ChatError;

/// Proveedores a los que se reenvía el chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAI,
    Anthropic,
}

impl LlmProvider {
    pub fn from_str(s: &str) -> Result<Self, ChatError> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(ChatError::UnsupportedProvider(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
        }
    }
}

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    pub static_dir: String,
    pub open_browser: bool,
    /// Tamaño máximo aceptado para `conversations.json` (bytes).
    pub max_export_bytes: usize,

    pub openai_chat_model: String,
    pub anthropic_chat_model: String,
    pub chat_max_tokens: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3322".to_string(),
            static_dir: "frontend".to_string(),
            open_browser: true,
            max_export_bytes: 100 * 1024 * 1024,
            openai_chat_model: "gpt-4o-mini".to_string(),
            anthropic_chat_model: "claude-3-5-sonnet-20241022".to_string(),
            chat_max_tokens: 1000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let server_addr = lookup("SERVER_ADDR").unwrap_or(defaults.server_addr);
        let static_dir = lookup("STATIC_DIR").unwrap_or(defaults.static_dir);

        let open_browser = match lookup("OPEN_BROWSER") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| anyhow!("OPEN_BROWSER debe ser true/false, no '{value}'"))?,
            None => defaults.open_browser,
        };

        let max_export_bytes = match lookup("MAX_EXPORT_BYTES") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("MAX_EXPORT_BYTES no es un número válido: '{value}'"))?,
            None => defaults.max_export_bytes,
        };

        let openai_chat_model =
            lookup("OPENAI_CHAT_MODEL").unwrap_or(defaults.openai_chat_model);
        let anthropic_chat_model =
            lookup("ANTHROPIC_CHAT_MODEL").unwrap_or(defaults.anthropic_chat_model);

        let chat_max_tokens = match lookup("CHAT_MAX_TOKENS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CHAT_MAX_TOKENS no es un número válido: '{value}'"))?,
            None => defaults.chat_max_tokens,
        };

        Ok(Self {
            server_addr,
            static_dir,
            open_browser,
            max_export_bytes,
            openai_chat_model,
            anthropic_chat_model,
            chat_max_tokens,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
