//! Heurísticas de rasgos. Funciones puras y totales: siempre devuelven una
//! etiqueta, incluso con entradas patológicas.

use crate::{
    lexicon::{COLLABORATIVE_WORDS, CREATIVE_WORDS, KNOWN_TOOLS, SYSTEMATIC_WORDS, TECHNICAL_TERMS},
    models::{
        CommunicationStyle, DecisionMaking, LearningStyle, MessageLength, ProblemSolvingApproach,
        Tone, Verbosity,
    },
    stats::MessageStats,
};

const MAX_PREFERRED_TOOLS: usize = 5;

/// Se evalúa en orden y gana la primera rama que se cumpla.
pub fn communication_style(stats: &MessageStats, keywords: &[String]) -> CommunicationStyle {
    let technical_count = keywords
        .iter()
        .filter(|k| TECHNICAL_TERMS.iter().any(|tk| k.contains(tk)))
        .count();

    if technical_count > 3 {
        CommunicationStyle::Technical
    } else if stats.uses_emojis && stats.average_length < 100.0 {
        CommunicationStyle::Casual
    } else if stats.average_length > 200.0 {
        CommunicationStyle::Formal
    } else if stats.question_ratio() > 0.8 {
        CommunicationStyle::Friendly
    } else {
        CommunicationStyle::Mixed
    }
}

pub fn verbosity(average_length: f64) -> Verbosity {
    if average_length < 80.0 {
        Verbosity::Concise
    } else if average_length > 200.0 {
        Verbosity::Detailed
    } else {
        Verbosity::Moderate
    }
}

pub fn tone(stats: &MessageStats) -> Tone {
    if stats.uses_emojis {
        Tone::Warm
    } else {
        Tone::Professional
    }
}

pub fn decision_making(stats: &MessageStats) -> DecisionMaking {
    if stats.question_ratio() > 0.5 {
        DecisionMaking::Analytical
    } else {
        DecisionMaking::Balanced
    }
}

pub fn learning_style(stats: &MessageStats) -> LearningStyle {
    if stats.question_ratio() > 0.6 {
        LearningStyle::HandsOn
    } else {
        LearningStyle::Mixed
    }
}

/// Cuántas palabras de la lista aparecen (al menos una vez) en el texto.
fn hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

/// Sin ninguna coincidencia el enfoque es `Independent`. Si hay empate en el
/// máximo, la prioridad es systematic > creative > collaborative.
pub fn problem_solving_approach(messages: &[String]) -> ProblemSolvingApproach {
    let text = messages.join(" ").to_lowercase();

    let systematic = hits(&text, SYSTEMATIC_WORDS);
    let creative = hits(&text, CREATIVE_WORDS);
    let collaborative = hits(&text, COLLABORATIVE_WORDS);
    let max = systematic.max(creative).max(collaborative);

    if max == 0 {
        ProblemSolvingApproach::Independent
    } else if systematic == max {
        ProblemSolvingApproach::Systematic
    } else if creative == max {
        ProblemSolvingApproach::Creative
    } else {
        ProblemSolvingApproach::Collaborative
    }
}

/// Keywords que son herramientas conocidas, como mucho 5.
pub fn preferred_tools(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .filter(|k| KNOWN_TOOLS.contains(&k.as_str()))
        .take(MAX_PREFERRED_TOOLS)
        .cloned()
        .collect()
}

pub fn message_length(average_length: f64) -> MessageLength {
    if average_length < 80.0 {
        MessageLength::Short
    } else if average_length > 200.0 {
        MessageLength::Long
    } else {
        MessageLength::Medium
    }
}

pub fn provides_context(stats: &MessageStats) -> bool {
    stats.average_length > 150.0
}

pub fn asks_clarifying_questions(question_patterns: &[String]) -> bool {
    question_patterns.iter().any(|p| p == "can" || p == "could")
}
