//! Análisis de una exportación de conversaciones y ensamblado del perfil.
//!
//! Flujo:
//!   1. Extracción de los mensajes del usuario (falla si no hay ninguno).
//!   2. Estadísticas agregadas y keywords.
//!   3. Temas, patrones de pregunta y rasgos heurísticos.
//!   4. Ensamblado del perfil y renderizado del system prompt.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::AnalysisError,
    ingest,
    keywords,
    models::{
        AgentProfile, AnalysisData, CommunicationPatterns, Conversation, Interests, Personality,
        Sentiment, WorkStyle,
    },
    prompt, stats, traits,
};

pub const DEFAULT_PROFILE_NAME: &str = "My AI Agent";
const TOP_KEYWORDS_IN_PROFILE: usize = 20;
const EXPERTISE_TOPICS: usize = 3;

/// `how` → `How-type questions`.
fn question_label(pattern: &str) -> String {
    let mut chars = pattern.chars();
    match chars.next() {
        Some(first) => format!("{}{}-type questions", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Genera un perfil a partir de las conversaciones. El único error posible
/// es que no haya mensajes del usuario.
pub fn analyze_chat_history(conversations: &[Conversation]) -> Result<AgentProfile, AnalysisError> {
    // 1) Mensajes del usuario
    let extracted = ingest::extract_user_messages(conversations)?;
    let messages = &extracted.messages;

    // 2) Estadísticas y keywords
    let stats = stats::collect_stats(messages);
    let keywords = keywords::extract_keywords(messages);
    debug!(
        "Estadísticas: media {:.1} caracteres, {} preguntas, {} keywords.",
        stats.average_length,
        stats.question_count,
        keywords.len()
    );

    // 3) Temas y patrones
    let topics = keywords::identify_topics(&keywords);
    let question_patterns = keywords::extract_question_patterns(messages);

    // 4) Ensamblado
    let personality = Personality {
        communication_style: traits::communication_style(&stats, &keywords),
        verbosity: traits::verbosity(stats.average_length),
        tone: traits::tone(&stats),
        decision_making: traits::decision_making(&stats),
    };

    let work_style = WorkStyle {
        preferred_tools: traits::preferred_tools(&keywords),
        common_topics: topics.clone(),
        expertise: topics.iter().take(EXPERTISE_TOPICS).cloned().collect(),
        problem_solving_approach: traits::problem_solving_approach(messages),
        learning_style: traits::learning_style(&stats),
    };

    let communication = CommunicationPatterns {
        average_message_length: traits::message_length(stats.average_length),
        uses_emojis: stats.uses_emojis,
        uses_code_examples: stats.uses_code_blocks,
        asks_clarifying_questions: traits::asks_clarifying_questions(&question_patterns),
        provides_context: traits::provides_context(&stats),
    };

    let interests = Interests {
        primary_topics: topics.clone(),
        frequent_questions: question_patterns.iter().map(|p| question_label(p)).collect(),
        goals_and_motivations: topics.iter().map(|t| format!("Excellence in {t}")).collect(),
    };

    let analysis = AnalysisData {
        total_conversations: extracted.summary.conversations,
        total_messages: stats.total_messages,
        top_keywords: keywords.iter().take(TOP_KEYWORDS_IN_PROFILE).cloned().collect(),
        sentiment_overall: Sentiment::Neutral,
        question_patterns,
    };

    let system_prompt =
        prompt::render_chat_prompt(&personality, &work_style, &communication, &interests);

    info!(
        "Perfil generado a partir de {} mensajes ({} temas).",
        stats.total_messages,
        topics.len()
    );

    Ok(AgentProfile {
        id: Uuid::new_v4().to_string(),
        name: DEFAULT_PROFILE_NAME.to_string(),
        created_at: Utc::now(),
        personality,
        work_style,
        communication,
        interests,
        analysis,
        system_prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CommunicationStyle, DecisionMaking, LearningStyle, MessageLength, ProblemSolvingApproach,
        Tone, Verbosity,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn export(messages: &[(&str, &str)]) -> Vec<Conversation> {
        let mapping: serde_json::Map<String, serde_json::Value> = messages
            .iter()
            .enumerate()
            .map(|(i, (role, text))| {
                let id = format!("n{i}");
                let node = json!({
                    "id": id,
                    "message": {
                        "id": id,
                        "author": { "role": role },
                        "content": { "content_type": "text", "parts": [text] }
                    }
                });
                (id, node)
            })
            .collect();
        ingest::conversations_from_value(json!([{ "title": "t", "mapping": mapping }])).unwrap()
    }

    #[test]
    fn single_debug_question_profile() {
        let conversations = export(&[("user", "How do I debug this error in my function?")]);
        let profile = analyze_chat_history(&conversations).unwrap();

        assert_eq!(profile.name, DEFAULT_PROFILE_NAME);
        assert_eq!(profile.personality.communication_style, CommunicationStyle::Friendly);
        assert_eq!(profile.personality.verbosity, Verbosity::Concise);
        assert_eq!(profile.personality.tone, Tone::Professional);
        assert_eq!(profile.personality.decision_making, DecisionMaking::Analytical);
        assert_eq!(profile.work_style.learning_style, LearningStyle::HandsOn);
        assert_eq!(
            profile.work_style.problem_solving_approach,
            ProblemSolvingApproach::Independent
        );
        assert_eq!(profile.communication.average_message_length, MessageLength::Short);
        assert_eq!(profile.analysis.total_messages, 1);
        assert_eq!(profile.analysis.total_conversations, 1);
        assert_eq!(profile.analysis.top_keywords, vec!["debug", "error", "function"]);
        assert_eq!(profile.analysis.question_patterns, vec!["how"]);
        assert_eq!(profile.interests.frequent_questions, vec!["How-type questions"]);
        assert_eq!(profile.interests.primary_topics, vec!["Programming & Development"]);
        assert_eq!(
            profile.interests.goals_and_motivations,
            vec!["Excellence in Programming & Development"]
        );
        assert!(!profile.communication.asks_clarifying_questions);
        assert!(profile.system_prompt.contains("- Programming & Development"));
    }

    #[test]
    fn export_without_user_messages_fails() {
        let conversations = export(&[("assistant", "Hello!"), ("system", "You are ChatGPT")]);
        assert!(matches!(
            analyze_chat_history(&conversations),
            Err(AnalysisError::NoUserMessages)
        ));
    }

    #[test]
    fn analysis_is_deterministic_apart_from_id_and_timestamp() {
        let conversations = export(&[
            ("user", "Can you review my python code? 🎉"),
            ("user", "Could we discuss the react component together?"),
            ("assistant", "Sure"),
            ("user", "What is the next step in the process?"),
        ]);

        let mut first = analyze_chat_history(&conversations).unwrap();
        let second = analyze_chat_history(&conversations).unwrap();
        assert_ne!(first.id, second.id);

        first.id = second.id.clone();
        first.created_at = second.created_at;
        assert_eq!(first, second);
    }

    #[test]
    fn same_upload_parsed_twice_yields_the_same_profile() {
        let raw = r#"[{"title": "preguntas", "mapping": {
            "q-f": {"id": "q-f", "message": {"author": {"role": "user"}, "content": {"parts": ["Why does the build fail?"]}}},
            "q-a": {"id": "q-a", "message": {"author": {"role": "user"}, "content": {"parts": ["What is a lifetime?"]}}},
            "q-d": {"id": "q-d", "message": {"author": {"role": "user"}, "content": {"parts": ["How do I test this?"]}}},
            "q-b": {"id": "q-b", "message": {"author": {"role": "user"}, "content": {"parts": ["Should I use async here?"]}}},
            "q-e": {"id": "q-e", "message": {"author": {"role": "user"}, "content": {"parts": ["Is this thread safe?"]}}},
            "q-c": {"id": "q-c", "message": {"author": {"role": "user"}, "content": {"parts": ["Could you review my code?"]}}}
        }}]"#;

        let mut first = analyze_chat_history(&ingest::parse_export(raw).unwrap()).unwrap();
        let second = analyze_chat_history(&ingest::parse_export(raw).unwrap()).unwrap();

        assert_eq!(
            first.analysis.question_patterns,
            vec!["why", "what", "how", "should", "is"]
        );
        assert!(!first.communication.asks_clarifying_questions);

        first.id = second.id.clone();
        first.created_at = second.created_at;
        assert_eq!(first, second);
    }

    #[test]
    fn profile_round_trips_through_json() {
        let conversations = export(&[("user", "Can you explain machine learning models? 😀")]);
        let profile = analyze_chat_history(&conversations).unwrap();

        let json = profile.to_pretty_json().unwrap();
        assert!(json.contains("\"systemPrompt\""));
        assert!(json.contains("\"createdAt\""));

        let parsed: AgentProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn question_labels_capitalize_first_letter() {
        assert_eq!(question_label("could"), "Could-type questions");
        assert_eq!(question_label(""), "");
    }
}
