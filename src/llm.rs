//! Relay de chat con el agente generado: reenvía la conversación al proveedor
//! elegido (OpenAI o Anthropic) usando el system prompt del perfil.
//! La clave de API la aporta el usuario en cada petición.

use rig::completion::{Chat, Message as RigMessage};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    config::{AppConfig, LlmProvider},
    error::ChatError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Separa la conversación en (último mensaje del usuario, historial previo).
/// Los mensajes `system` del historial se reenvían como turnos del usuario;
/// el preamble sigue siendo el prompt del perfil.
fn split_conversation(messages: &[ChatMessage]) -> Result<(String, Vec<RigMessage>), ChatError> {
    let (last, previous) = messages.split_last().ok_or(ChatError::EmptyConversation)?;
    if last.role != ChatRole::User || last.content.trim().is_empty() {
        return Err(ChatError::EmptyConversation);
    }

    let history = previous
        .iter()
        .map(|m| match m.role {
            ChatRole::Assistant => RigMessage::assistant(m.content.clone()),
            ChatRole::User | ChatRole::System => RigMessage::user(m.content.clone()),
        })
        .collect();

    Ok((last.content.clone(), history))
}

/// Gestor del relay de chat.
#[derive(Debug, Clone)]
pub struct LlmManager {
    pub openai_chat_model: String,
    pub anthropic_chat_model: String,
    pub max_tokens: u64,
}

impl LlmManager {
    /// Construye el manager a partir de la configuración.
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            openai_chat_model: cfg.openai_chat_model.clone(),
            anthropic_chat_model: cfg.anthropic_chat_model.clone(),
            max_tokens: cfg.chat_max_tokens,
        }
    }

    fn model_for(&self, provider: LlmProvider) -> &str {
        match provider {
            LlmProvider::OpenAI => &self.openai_chat_model,
            LlmProvider::Anthropic => &self.anthropic_chat_model,
        }
    }

    /// Envía la conversación al proveedor y devuelve el texto de la respuesta.
    pub async fn chat(
        &self,
        provider: LlmProvider,
        api_key: &str,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        if api_key.trim().is_empty() {
            return Err(ChatError::MissingApiKey);
        }
        let (prompt, history) = split_conversation(messages)?;
        let model = self.model_for(provider);
        info!(
            "Reenviando chat a {} (modelo {}, {} mensajes previos).",
            provider.name(),
            model,
            history.len()
        );

        let result = match provider {
            LlmProvider::OpenAI => {
                self.chat_with_openai(api_key, model, system_prompt, prompt, history)
                    .await
            }
            LlmProvider::Anthropic => {
                self.chat_with_anthropic(api_key, model, system_prompt, prompt, history)
                    .await
            }
        };

        result.map_err(|reason| {
            warn!("Error del proveedor {}: {}", provider.name(), reason);
            ChatError::Provider {
                provider: provider.name().to_string(),
                reason,
            }
        })
    }

    async fn chat_with_openai(
        &self,
        api_key: &str,
        model: &str,
        system_prompt: &str,
        prompt: String,
        history: Vec<RigMessage>,
    ) -> Result<String, String> {
        use rig::providers::openai;
        // Trait para client.agent(...)
        use rig::client::CompletionClient as _;

        let client = openai::Client::new(api_key);
        let agent = client
            .agent(model)
            .preamble(system_prompt)
            .max_tokens(self.max_tokens)
            .build();

        agent.chat(prompt, history).await.map_err(|e| e.to_string())
    }

    async fn chat_with_anthropic(
        &self,
        api_key: &str,
        model: &str,
        system_prompt: &str,
        prompt: String,
        history: Vec<RigMessage>,
    ) -> Result<String, String> {
        use rig::providers::anthropic;
        use rig::client::CompletionClient as _;

        let client = anthropic::Client::new(api_key);
        let agent = client
            .agent(model)
            .preamble(system_prompt)
            .max_tokens(self.max_tokens)
            .build();

        agent.chat(prompt, history).await.map_err(|e| e.to_string())
    }
}
