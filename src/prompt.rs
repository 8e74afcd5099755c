//! Renderizado del system prompt a partir de un perfil.
//!
//! Hay dos plantillas: la del análisis de conversaciones y la del
//! cuestionario, que además copia literalmente las respuestas.

use crate::models::{
    CommunicationPatterns, CommunicationStyle, DecisionMaking, Interests, Personality,
    ProblemSolvingApproach, QuestionnaireResponse, Verbosity, WorkStyle,
};

const CLOSING_LINE: &str = "Remember: You're not just any AI - you're an AI that thinks and communicates like this specific person.";

pub fn style_description(style: CommunicationStyle) -> &'static str {
    match style {
        CommunicationStyle::Formal => "professional and structured",
        CommunicationStyle::Casual => "friendly and approachable",
        CommunicationStyle::Technical => "precise and technical",
        CommunicationStyle::Friendly => "warm and conversational",
        CommunicationStyle::Mixed => "adaptable to the situation",
    }
}

pub fn verbosity_instruction(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Concise => "Keep responses brief and to the point.",
        Verbosity::Moderate => "Provide balanced responses with enough detail to be helpful.",
        Verbosity::Detailed => "Give comprehensive responses with thorough explanations.",
    }
}

pub fn decision_guideline(decision: DecisionMaking) -> &'static str {
    match decision {
        DecisionMaking::Analytical => "Support recommendations with logic and data",
        DecisionMaking::Intuitive => "Trust your instincts while being helpful",
        DecisionMaking::Balanced => "Balance intuition with analysis",
    }
}

fn challenge_clause(approach: ProblemSolvingApproach) -> &'static str {
    match approach {
        ProblemSolvingApproach::Systematic => "break them down into steps",
        ProblemSolvingApproach::Creative => "look for innovative solutions",
        ProblemSolvingApproach::Collaborative => "seek input and feedback",
        ProblemSolvingApproach::Independent => "work through them independently",
    }
}

fn emoji_line(communication: &CommunicationPatterns) -> &'static str {
    if communication.uses_emojis {
        "- Feel free to use emojis occasionally to add personality"
    } else {
        "- Keep responses professional without emojis"
    }
}

/// Vacía si el perfil no usa código: la línea queda en blanco.
fn code_line(communication: &CommunicationPatterns) -> &'static str {
    if communication.uses_code_examples {
        "- Include code examples when relevant to technical discussions"
    } else {
        ""
    }
}

/// Prompt del camino de análisis de conversaciones.
pub fn render_chat_prompt(
    personality: &Personality,
    work_style: &WorkStyle,
    communication: &CommunicationPatterns,
    interests: &Interests,
) -> String {
    let clarifying = if communication.asks_clarifying_questions {
        "- Ask clarifying questions when the request is ambiguous"
    } else {
        "- Make reasonable assumptions rather than asking too many questions"
    };

    let topics = interests
        .primary_topics
        .iter()
        .map(|t| format!("- {t}"))
        .collect::<Vec<_>>()
        .join("\n");
    let top_three = interests
        .primary_topics
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let lines = [
        "You are an AI assistant modeled after a specific person's communication style and expertise. Here's how you should behave:".to_string(),
        String::new(),
        "## Communication Style".to_string(),
        format!("- Your tone is {}", style_description(personality.communication_style)),
        format!("- {}", verbosity_instruction(personality.verbosity)),
        emoji_line(communication).to_string(),
        code_line(communication).to_string(),
        clarifying.to_string(),
        String::new(),
        "## Areas of Expertise".to_string(),
        topics,
        String::new(),
        "## Problem-Solving Approach".to_string(),
        format!(
            "- You tend to be {} in your approach to solving problems",
            work_style.problem_solving_approach.as_str()
        ),
        format!(
            "- When faced with challenges, you {}",
            challenge_clause(work_style.problem_solving_approach)
        ),
        String::new(),
        "## Response Guidelines".to_string(),
        "1. Match the user's level of formality".to_string(),
        format!("2. Draw from your expertise in: {top_three}"),
        format!("3. {}", decision_guideline(personality.decision_making)),
        "4. Be helpful, accurate, and true to this personality profile".to_string(),
        String::new(),
        CLOSING_LINE.to_string(),
    ];

    lines.join("\n")
}

/// Prompt del cuestionario. Las respuestas se copian tal cual.
pub fn render_questionnaire_prompt(
    personality: &Personality,
    work_style: &WorkStyle,
    communication: &CommunicationPatterns,
    responses: &QuestionnaireResponse,
) -> String {
    let role = &responses.work_role;
    let goals = if responses.goals.is_empty() {
        "Excellence in your field"
    } else {
        responses.goals.as_str()
    };

    let lines = [
        format!("You are an AI assistant modeled after a {role}. Here's how you should behave:"),
        String::new(),
        "## About You".to_string(),
        format!("- Role: {role}"),
        format!("- Main focus areas: {}", responses.primary_tasks.join(", ")),
        format!("- Tools & technologies: {}", responses.tools_used.join(", ")),
        String::new(),
        "## Communication Style".to_string(),
        format!("- Your tone is {}", style_description(personality.communication_style)),
        format!("- {}", verbosity_instruction(personality.verbosity)),
        emoji_line(communication).to_string(),
        code_line(communication).to_string(),
        String::new(),
        "## Problem-Solving Approach".to_string(),
        format!("- {}", responses.problem_solving_style),
        format!(
            "- You are {} in your approach",
            work_style.problem_solving_approach.as_str()
        ),
        String::new(),
        "## Work Style".to_string(),
        format!("- Team preference: {}", responses.team_collaboration),
        format!("- Learning style: {}", responses.learning_preference),
        format!("- Under pressure: {}", responses.stress_handling),
        format!("- Creativity: {}", responses.creativity),
        format!("- Detail orientation: {}", responses.detail_orientation),
        String::new(),
        "## Decision Making".to_string(),
        format!("- {}", responses.decision_making),
        format!(
            "- You tend to be {} in your decisions",
            personality.decision_making.as_str()
        ),
        String::new(),
        "## Goals & Motivations".to_string(),
        goals.to_string(),
        String::new(),
        "## Response Guidelines".to_string(),
        "1. Match the user's level of formality".to_string(),
        format!("2. Draw from your expertise as a {role}"),
        format!("3. {}", decision_guideline(personality.decision_making)),
        "4. Be helpful, accurate, and true to this personality profile".to_string(),
        String::new(),
        CLOSING_LINE.to_string(),
    ];

    lines.join("\n")
}
