//! Estadísticas agregadas sobre los mensajes del usuario.

use once_cell::sync::Lazy;
use regex::Regex;

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]",
    )
    .expect("regex de emojis válida")
});

/// Bloques ``` ``` ``` o código en línea entre comillas invertidas.
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*?```|`[^`]+`").expect("regex de código válida"));

const EMOJI_THRESHOLD: f64 = 0.10;
const CODE_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct MessageStats {
    pub total_messages: usize,
    /// Longitud media en caracteres (valores escalares Unicode).
    pub average_length: f64,
    pub uses_emojis: bool,
    pub uses_code_blocks: bool,
    /// Número total de `?`, no de mensajes con pregunta.
    pub question_count: usize,
}

impl MessageStats {
    /// Preguntas por mensaje. Cero si no hay mensajes.
    pub fn question_ratio(&self) -> f64 {
        if self.total_messages == 0 {
            0.0
        } else {
            self.question_count as f64 / self.total_messages as f64
        }
    }
}

/// Calcula las estadísticas. El llamador garantiza que `messages` no está vacío;
/// con una lista vacía se devuelven ceros y banderas a `false`.
pub fn collect_stats(messages: &[String]) -> MessageStats {
    let mut total_length = 0usize;
    let mut emoji_messages = 0usize;
    let mut code_messages = 0usize;
    let mut question_count = 0usize;

    for msg in messages {
        total_length += msg.chars().count();
        if EMOJI_RE.is_match(msg) {
            emoji_messages += 1;
        }
        if CODE_RE.is_match(msg) {
            code_messages += 1;
        }
        question_count += msg.matches('?').count();
    }

    let total = messages.len();
    if total == 0 {
        return MessageStats {
            total_messages: 0,
            average_length: 0.0,
            uses_emojis: false,
            uses_code_blocks: false,
            question_count: 0,
        };
    }

    let total_f = total as f64;
    MessageStats {
        total_messages: total,
        average_length: total_length as f64 / total_f,
        uses_emojis: emoji_messages as f64 / total_f > EMOJI_THRESHOLD,
        uses_code_blocks: code_messages as f64 / total_f > CODE_THRESHOLD,
        question_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_question_message() {
        let stats = collect_stats(&owned(&["How do I debug this error in my function?"]));
        assert_eq!(stats.total_messages, 1);
        assert_eq!(stats.average_length, 41.0);
        assert!(!stats.uses_emojis);
        assert!(!stats.uses_code_blocks);
        assert_eq!(stats.question_count, 1);
    }

    #[test]
    fn average_length_is_exact_mean_of_char_counts() {
        let messages = owned(&["abc", "ñandú", "hola mundo!!", "🎉🎉"]);
        let expected = messages.iter().map(|m| m.chars().count()).sum::<usize>() as f64
            / messages.len() as f64;
        assert_eq!(collect_stats(&messages).average_length, expected);
    }

    #[test]
    fn every_question_mark_counts() {
        let stats = collect_stats(&owned(&["what?? really?", "no"]));
        assert_eq!(stats.question_count, 3);
        assert_eq!(stats.question_ratio(), 1.5);
    }

    #[test]
    fn emoji_threshold_is_strict() {
        let mut messages = vec!["great 😀".to_string()];
        messages.extend((0..9).map(|i| format!("plain message {i}")));
        assert!(!collect_stats(&messages).uses_emojis);

        messages.push("sunny ☀ day".to_string());
        assert!(collect_stats(&messages).uses_emojis);
    }

    #[test]
    fn code_spans_are_detected() {
        let mut messages = owned(&["use `cargo build` here"]);
        messages.extend((0..19).map(|i| format!("text {i}")));
        // 1/20 = 0.05, no supera el umbral
        assert!(!collect_stats(&messages).uses_code_blocks);

        messages.pop();
        assert!(collect_stats(&messages).uses_code_blocks);

        let fenced = owned(&["```\nfn main() {}\n```"]);
        assert!(collect_stats(&fenced).uses_code_blocks);
    }

    #[test]
    fn pathological_inputs_do_not_panic() {
        let stats = collect_stats(&owned(&["🎉🎉🎉", "?!?!", "`"]));
        assert_eq!(stats.total_messages, 3);
        assert!(stats.uses_emojis);
        assert!(!stats.uses_code_blocks);

        let empty = collect_stats(&[]);
        assert_eq!(empty.average_length, 0.0);
        assert_eq!(empty.question_ratio(), 0.0);
    }
}
