//! Extracción de keywords, clasificación por temas y patrones de pregunta.

use std::collections::HashMap;

use crate::lexicon::{QUESTION_STARTERS, STOP_WORDS, TOPIC_CATEGORIES};

pub const MAX_KEYWORDS: usize = 50;
pub const MAX_TOPICS: usize = 5;
const MAX_QUESTION_PATTERNS: usize = 5;
const QUESTION_SAMPLE: usize = 100;

/// Normaliza un mensaje en tokens: minúsculas y todo lo que no sea
/// `[a-z0-9]` o espacio se convierte en espacio.
fn tokenize(message: &str) -> Vec<String> {
    let normalized: String = message
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.len() > 3 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Devuelve hasta 50 keywords por frecuencia descendente. Los empates se
/// resuelven por orden de primera aparición.
pub fn extract_keywords(messages: &[String]) -> Vec<String> {
    // Conteos en orden de inserción + índice para actualizarlos.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for msg in messages {
        for word in tokenize(msg) {
            match index.get(&word) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }
    }

    // sort_by es estable: conserva el orden de primera aparición en empates.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}

/// Coincidencia laxa: la keyword contiene la del tema o al revés.
fn matches_topic(keyword: &str, topic_keywords: &[&str]) -> bool {
    topic_keywords
        .iter()
        .any(|tk| keyword.contains(tk) || tk.contains(keyword))
}

/// Puntuación de cada categoría (sólo las que tienen puntuación > 0),
/// en orden de declaración.
pub fn score_topics(keywords: &[String]) -> Vec<(&'static str, usize)> {
    TOPIC_CATEGORIES
        .iter()
        .map(|(topic, topic_keywords)| {
            let score = keywords
                .iter()
                .filter(|k| matches_topic(k, topic_keywords))
                .count();
            (*topic, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect()
}

/// Los 5 temas con mayor puntuación. Puede ser una lista vacía.
pub fn identify_topics(keywords: &[String]) -> Vec<String> {
    let mut scores = score_topics(keywords);
    scores.sort_by(|a, b| b.1.cmp(&a.1));
    scores
        .into_iter()
        .take(MAX_TOPICS)
        .map(|(topic, _)| topic.to_string())
        .collect()
}

/// Primeras palabras interrogativas distintas (`how`, `can`, ...) de los
/// primeros 100 mensajes que contienen `?`.
pub fn extract_question_patterns(messages: &[String]) -> Vec<String> {
    let mut patterns: Vec<String> = Vec::new();

    for msg in messages.iter().filter(|m| m.contains('?')).take(QUESTION_SAMPLE) {
        let Some(first_word) = msg.split_whitespace().next() else {
            continue;
        };
        let first_word = first_word.to_lowercase();
        if QUESTION_STARTERS.contains(&first_word.as_str()) && !patterns.contains(&first_word) {
            patterns.push(first_word);
        }
    }

    patterns.truncate(MAX_QUESTION_PATTERNS);
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keywords_skip_stop_words_and_short_tokens() {
        let keywords = extract_keywords(&owned(&["How do I debug this error in my function?"]));
        assert_eq!(keywords, vec!["debug", "error", "function"]);
    }

    #[test]
    fn punctuation_splits_tokens() {
        let keywords = extract_keywords(&owned(&["deploy-pipeline/config.yaml, café"]));
        assert_eq!(keywords, vec!["deploy", "pipeline", "config", "yaml"]);
    }

    #[test]
    fn keywords_rank_by_frequency_with_first_seen_ties() {
        let keywords = extract_keywords(&owned(&[
            "alpha bravo charlie",
            "charlie delta",
            "bravo charlie",
        ]));
        assert_eq!(keywords, vec!["charlie", "bravo", "alpha", "delta"]);
    }

    #[test]
    fn keyword_invariants_hold_for_large_inputs() {
        let messages: Vec<String> = (0..200)
            .map(|i| format!("word{i} token{} the this something abc", i % 7))
            .collect();
        let keywords = extract_keywords(&messages);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert!(keywords.iter().all(|k| k.len() > 3));
        assert!(keywords.iter().all(|k| !STOP_WORDS.contains(k.as_str())));
        assert_eq!(keywords[0], "token0");
    }

    #[test]
    fn topic_matching_is_bidirectional_substring() {
        // "emails" contiene "email"; "debugging" contiene "debug".
        let keywords = owned(&["emails", "debugging", "react"]);
        let scores = score_topics(&keywords);
        assert!(scores.contains(&("Programming & Development", 2)));
        // "emails" contiene "ai": coincidencia laxa que se conserva.
        assert!(scores.contains(&("Data & Analytics", 1)));
        assert!(scores.contains(&("Writing & Content", 1)));
    }

    #[test]
    fn topic_ties_keep_declaration_order() {
        let keywords = owned(&["marketing", "research"]);
        assert_eq!(
            identify_topics(&keywords),
            vec!["Business & Strategy", "Research & Learning"]
        );
    }

    #[test]
    fn topics_are_capped_and_positive() {
        let keywords = owned(&[
            "python", "dataset", "blog", "startup", "figma", "study", "workflow", "code",
        ]);
        let topics = identify_topics(&keywords);
        assert_eq!(topics.len(), MAX_TOPICS);
        assert_eq!(topics[0], "Programming & Development");

        assert!(identify_topics(&owned(&["zzzz"])).is_empty());
        assert!(identify_topics(&[]).is_empty());
    }

    #[test]
    fn question_patterns_are_unique_first_words() {
        let messages = owned(&[
            "How does this work?",
            "how about that?",
            "Can you help?",
            "Tell me more?",
            "What is it",
            "Why not?",
        ]);
        assert_eq!(extract_question_patterns(&messages), vec!["how", "can", "why"]);
    }
}
