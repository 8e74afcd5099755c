//! Perfil a partir del cuestionario guiado: tablas de correspondencia
//! estáticas, sin análisis de texto.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    analyzer::DEFAULT_PROFILE_NAME,
    error::AnalysisError,
    lexicon::TECHNICAL_QUESTIONNAIRE_TOOLS,
    models::{
        AgentProfile, AnalysisData, CommunicationPatterns, CommunicationStyle, DecisionMaking,
        Interests, LearningStyle, MessageLength, Personality, ProblemSolvingApproach,
        QuestionnaireResponse, Sentiment, Tone, Verbosity, WorkStyle,
    },
    prompt,
};

const CASUAL_AND_FRIENDLY: &str = "Casual and friendly";
const CONCISE: &str = "Concise and to-the-point";
const DETAILED: &str = "Detailed and thorough";
const FORMAL: &str = "Formal and professional";
const RESEARCH_FIRST: &str = "Research and gather information first";

fn communication_style(answer: &str) -> CommunicationStyle {
    match answer {
        CONCISE | DETAILED | FORMAL => CommunicationStyle::Formal,
        CASUAL_AND_FRIENDLY => CommunicationStyle::Casual,
        "Technical and precise" => CommunicationStyle::Technical,
        _ => CommunicationStyle::Mixed,
    }
}

fn problem_solving(answer: &str) -> ProblemSolvingApproach {
    match answer {
        "Break it down into systematic steps" | RESEARCH_FIRST => ProblemSolvingApproach::Systematic,
        "Brainstorm creative alternatives" => ProblemSolvingApproach::Creative,
        "Discuss with others for input" => ProblemSolvingApproach::Collaborative,
        "Trust my intuition and dive in" => ProblemSolvingApproach::Independent,
        _ => ProblemSolvingApproach::Systematic,
    }
}

fn learning_style(answer: &str) -> LearningStyle {
    match answer {
        "Hands-on experimentation" | "Learning from peers" => LearningStyle::HandsOn,
        "Reading documentation" | "Structured courses" => LearningStyle::Theoretical,
        "Watching tutorials" => LearningStyle::Visual,
        _ => LearningStyle::Mixed,
    }
}

fn decision_making(answer: &str) -> DecisionMaking {
    match answer {
        "Data-driven analysis" | "Weigh pros and cons carefully" => DecisionMaking::Analytical,
        "Gut feeling and experience" | "Quick decisions, adjust as needed" => {
            DecisionMaking::Intuitive
        }
        "Seek advice from experts" => DecisionMaking::Balanced,
        _ => DecisionMaking::Balanced,
    }
}

fn verbosity(preference: &str) -> Verbosity {
    match preference {
        CONCISE => Verbosity::Concise,
        DETAILED => Verbosity::Detailed,
        _ => Verbosity::Moderate,
    }
}

fn tone(preference: &str) -> Tone {
    match preference {
        CASUAL_AND_FRIENDLY => Tone::Warm,
        FORMAL => Tone::Professional,
        _ => Tone::Neutral,
    }
}

impl QuestionnaireResponse {
    /// Comprueba que todas las preguntas tienen respuesta. Devuelve el
    /// nombre (camelCase) de la primera que falte.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let texts = [
            ("workRole", &self.work_role),
            ("communicationPreference", &self.communication_preference),
            ("problemSolvingStyle", &self.problem_solving_style),
            ("learningPreference", &self.learning_preference),
            ("teamCollaboration", &self.team_collaboration),
            ("decisionMaking", &self.decision_making),
            ("stressHandling", &self.stress_handling),
            ("creativity", &self.creativity),
            ("detailOrientation", &self.detail_orientation),
            ("goals", &self.goals),
        ];
        if let Some((field, _)) = texts.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AnalysisError::IncompleteQuestionnaire(field.to_string()));
        }

        let lists = [
            ("primaryTasks", &self.primary_tasks),
            ("toolsUsed", &self.tools_used),
        ];
        if let Some((field, _)) = lists.iter().find(|(_, values)| values.is_empty()) {
            return Err(AnalysisError::IncompleteQuestionnaire(field.to_string()));
        }

        Ok(())
    }
}

/// Construye el perfil. Siempre tiene éxito: la validación se hace antes.
pub fn generate_profile_from_questionnaire(responses: &QuestionnaireResponse) -> AgentProfile {
    let preference = responses.communication_preference.as_str();
    let verbosity = verbosity(preference);

    let topics: Vec<String> = std::iter::once(&responses.work_role)
        .chain(responses.primary_tasks.iter())
        .filter(|t| !t.is_empty())
        .cloned()
        .collect();

    let personality = Personality {
        communication_style: communication_style(preference),
        verbosity,
        tone: tone(preference),
        decision_making: decision_making(&responses.decision_making),
    };

    let work_style = WorkStyle {
        preferred_tools: responses.tools_used.clone(),
        common_topics: topics.clone(),
        expertise: vec![responses.work_role.clone()],
        problem_solving_approach: problem_solving(&responses.problem_solving_style),
        learning_style: learning_style(&responses.learning_preference),
    };

    let communication = CommunicationPatterns {
        average_message_length: MessageLength::from(verbosity),
        uses_emojis: preference == CASUAL_AND_FRIENDLY,
        uses_code_examples: responses
            .tools_used
            .iter()
            .any(|t| TECHNICAL_QUESTIONNAIRE_TOOLS.contains(&t.as_str())),
        asks_clarifying_questions: responses.problem_solving_style == RESEARCH_FIRST,
        provides_context: verbosity == Verbosity::Detailed,
    };

    let interests = Interests {
        primary_topics: topics,
        frequent_questions: Vec::new(),
        goals_and_motivations: if responses.goals.is_empty() {
            Vec::new()
        } else {
            vec![responses.goals.clone()]
        },
    };

    let analysis = AnalysisData {
        total_conversations: 0,
        total_messages: 0,
        top_keywords: responses
            .tools_used
            .iter()
            .chain(std::iter::once(&responses.work_role))
            .filter(|k| !k.is_empty())
            .cloned()
            .collect(),
        sentiment_overall: Sentiment::Neutral,
        question_patterns: Vec::new(),
    };

    let system_prompt =
        prompt::render_questionnaire_prompt(&personality, &work_style, &communication, responses);

    info!("Perfil generado a partir del cuestionario ({}).", responses.work_role);

    AgentProfile {
        id: Uuid::new_v4().to_string(),
        name: DEFAULT_PROFILE_NAME.to_string(),
        created_at: Utc::now(),
        personality,
        work_style,
        communication,
        interests,
        analysis,
        system_prompt,
    }
}
