//! Modelos de dominio: la exportación de ChatGPT (entrada), el cuestionario
//! y el perfil de agente (salida).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// --- Exportación de ChatGPT ---

/// Una conversación de `conversations.json`.
/// El `mapping` forma un árbol de nodos vía `parent`/`children`; se conserva
/// el orden del documento.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub create_time: Option<f64>,
    #[serde(default)]
    pub update_time: Option<f64>,
    #[serde(default)]
    pub mapping: Option<IndexMap<String, MessageNode>>,
}

/// Nodo del árbol. Algunos nodos son estructurales y no llevan mensaje.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub author: Author,
    pub content: Content,
    #[serde(default)]
    pub create_time: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    /// Roles que no nos interesan (`tool`, etc.).
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub content_type: String,
    /// Las partes pueden ser texto u objetos (p. ej. imágenes); sólo se usa el texto.
    #[serde(default)]
    pub parts: Option<Vec<serde_json::Value>>,
}

impl Message {
    /// Texto del mensaje si es del usuario: partes unidas por espacio y recortadas.
    pub fn user_text(&self) -> Option<String> {
        if self.author.role != Role::User {
            return None;
        }
        let parts = self.content.parts.as_ref()?;
        if parts.is_empty() {
            return None;
        }
        let text: Vec<&str> = parts.iter().filter_map(|p| p.as_str()).collect();
        let joined = text.join(" ").trim().to_string();
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

// --- Cuestionario ---

/// Las 12 respuestas del cuestionario guiado.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    pub work_role: String,
    pub primary_tasks: Vec<String>,
    pub communication_preference: String,
    pub problem_solving_style: String,
    pub tools_used: Vec<String>,
    pub learning_preference: String,
    pub team_collaboration: String,
    pub decision_making: String,
    pub stress_handling: String,
    pub creativity: String,
    pub detail_orientation: String,
    pub goals: String,
}

// --- Perfil de agente ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Formal,
    Casual,
    Technical,
    Friendly,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Concise,
    Moderate,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Warm,
    Neutral,
    Enthusiastic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionMaking {
    Analytical,
    Intuitive,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemSolvingApproach {
    Systematic,
    Creative,
    Collaborative,
    Independent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    HandsOn,
    Theoretical,
    Visual,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLength {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl ProblemSolvingApproach {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Systematic => "systematic",
            Self::Creative => "creative",
            Self::Collaborative => "collaborative",
            Self::Independent => "independent",
        }
    }
}

impl DecisionMaking {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analytical => "analytical",
            Self::Intuitive => "intuitive",
            Self::Balanced => "balanced",
        }
    }
}

impl From<Verbosity> for MessageLength {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Concise => Self::Short,
            Verbosity::Moderate => Self::Medium,
            Verbosity::Detailed => Self::Long,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub communication_style: CommunicationStyle,
    pub verbosity: Verbosity,
    pub tone: Tone,
    pub decision_making: DecisionMaking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkStyle {
    pub preferred_tools: Vec<String>,
    pub common_topics: Vec<String>,
    pub expertise: Vec<String>,
    pub problem_solving_approach: ProblemSolvingApproach,
    pub learning_style: LearningStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationPatterns {
    pub average_message_length: MessageLength,
    pub uses_emojis: bool,
    pub uses_code_examples: bool,
    pub asks_clarifying_questions: bool,
    pub provides_context: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interests {
    pub primary_topics: Vec<String>,
    pub frequent_questions: Vec<String>,
    pub goals_and_motivations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    pub total_conversations: usize,
    pub total_messages: usize,
    pub top_keywords: Vec<String>,
    pub sentiment_overall: Sentiment,
    pub question_patterns: Vec<String>,
}

/// Perfil de agente completo. Se genera una vez y no se modifica:
/// para cambiarlo se regenera entero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub personality: Personality,
    pub work_style: WorkStyle,
    pub communication: CommunicationPatterns,
    pub interests: Interests,
    pub analysis: AnalysisData,
    pub system_prompt: String,
}

impl AgentProfile {
    /// Documento JSON indentado que se ofrece como `agent-profile.json`.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
