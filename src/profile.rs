//! Dos caminos de generación que producen el mismo `AgentProfile`.

use serde::Serialize;

use crate::{
    analyzer,
    error::AnalysisError,
    models::{AgentProfile, Conversation, QuestionnaireResponse},
    questionnaire,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    ChatExport,
    Questionnaire,
}

/// Estrategia de generación de un perfil.
pub trait ProfileBuilder {
    fn source(&self) -> ProfileSource;
    fn build(&self) -> Result<AgentProfile, AnalysisError>;
}

/// A partir de una exportación de conversaciones ya validada.
pub struct ChatExportBuilder<'a> {
    conversations: &'a [Conversation],
}

impl<'a> ChatExportBuilder<'a> {
    pub fn new(conversations: &'a [Conversation]) -> Self {
        Self { conversations }
    }
}

impl ProfileBuilder for ChatExportBuilder<'_> {
    fn source(&self) -> ProfileSource {
        ProfileSource::ChatExport
    }

    fn build(&self) -> Result<AgentProfile, AnalysisError> {
        analyzer::analyze_chat_history(self.conversations)
    }
}

/// A partir de las respuestas del cuestionario.
pub struct QuestionnaireBuilder<'a> {
    responses: &'a QuestionnaireResponse,
}

impl<'a> QuestionnaireBuilder<'a> {
    pub fn new(responses: &'a QuestionnaireResponse) -> Self {
        Self { responses }
    }
}

impl ProfileBuilder for QuestionnaireBuilder<'_> {
    fn source(&self) -> ProfileSource {
        ProfileSource::Questionnaire
    }

    fn build(&self) -> Result<AgentProfile, AnalysisError> {
        self.responses.validate()?;
        Ok(questionnaire::generate_profile_from_questionnaire(self.responses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ingest, questionnaire::tests::sample_response};
    use serde_json::json;

    #[test]
    fn both_builders_share_the_profile_shape() {
        let conversations = ingest::conversations_from_value(json!({
            "conversations": [{
                "title": "t",
                "mapping": {
                    "a": {
                        "id": "a",
                        "message": {
                            "id": "a",
                            "author": { "role": "user" },
                            "content": { "content_type": "text", "parts": ["Write a blog article"] }
                        }
                    }
                }
            }]
        }))
        .unwrap();
        let responses = sample_response();

        let builders: Vec<Box<dyn ProfileBuilder + '_>> = vec![
            Box::new(ChatExportBuilder::new(&conversations)),
            Box::new(QuestionnaireBuilder::new(&responses)),
        ];

        let sources: Vec<ProfileSource> = builders.iter().map(|b| b.source()).collect();
        assert_eq!(sources, vec![ProfileSource::ChatExport, ProfileSource::Questionnaire]);

        for builder in &builders {
            let profile = builder.build().unwrap();
            assert_eq!(profile.name, "My AI Agent");
            assert!(!profile.system_prompt.is_empty());
        }
    }

    #[test]
    fn questionnaire_builder_validates_answers() {
        let mut responses = sample_response();
        responses.goals.clear();
        let result = QuestionnaireBuilder::new(&responses).build();
        assert!(matches!(result, Err(AnalysisError::IncompleteQuestionnaire(_))));
    }
}
