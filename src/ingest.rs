//! Ingesta de una exportación de ChatGPT: validación de la forma del
//! documento y extracción de los mensajes escritos por el usuario.

use serde_json::Value;
use tracing::{debug, info};

use crate::{error::AnalysisError, models::Conversation};

/// Resumen de una ingesta.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub conversations: usize,
    pub conversations_skipped: usize,
    pub nodes_scanned: usize,
    pub user_messages: usize,
}

impl std::fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Resumen: {} conversaciones ({} sin mapping), {} nodos recorridos, {} mensajes de usuario.",
            self.conversations, self.conversations_skipped, self.nodes_scanned, self.user_messages
        )
    }
}

/// Mensajes del usuario extraídos de una exportación.
#[derive(Debug, Clone)]
pub struct ExtractedMessages {
    pub messages: Vec<String>,
    pub summary: ExportSummary,
}

/// Parsea el texto de `conversations.json`.
pub fn parse_export(raw: &str) -> Result<Vec<Conversation>, AnalysisError> {
    let value: Value = serde_json::from_str(raw)?;
    conversations_from_value(value)
}

/// Acepta un array de conversaciones o un objeto con un campo `conversations`.
pub fn conversations_from_value(value: Value) -> Result<Vec<Conversation>, AnalysisError> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("conversations") {
            Some(inner @ Value::Array(_)) => inner,
            _ => return Err(AnalysisError::UnrecognizedExport),
        },
        _ => return Err(AnalysisError::UnrecognizedExport),
    };

    let conversations: Vec<Conversation> = serde_json::from_value(list)?;
    debug!("Exportación con {} conversaciones.", conversations.len());
    Ok(conversations)
}

/// Recorre el `mapping` de cada conversación y devuelve los textos del usuario,
/// en el orden en que aparecen conversaciones y nodos en el documento.
pub fn extract_user_messages(
    conversations: &[Conversation],
) -> Result<ExtractedMessages, AnalysisError> {
    let mut summary = ExportSummary {
        conversations: conversations.len(),
        ..Default::default()
    };
    let mut messages = Vec::new();

    for conversation in conversations {
        let Some(mapping) = &conversation.mapping else {
            summary.conversations_skipped += 1;
            continue;
        };

        for node in mapping.values() {
            summary.nodes_scanned += 1;
            if let Some(text) = node.message.as_ref().and_then(|m| m.user_text()) {
                messages.push(text);
            }
        }
    }

    summary.user_messages = messages.len();
    info!("{}", summary);

    if messages.is_empty() {
        return Err(AnalysisError::NoUserMessages);
    }

    Ok(ExtractedMessages { messages, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conversation(nodes: Value) -> Value {
        json!({ "title": "t", "create_time": 1.0, "update_time": 2.0, "mapping": nodes })
    }

    fn node(id: &str, role: &str, parts: Value) -> Value {
        json!({
            "id": id,
            "message": {
                "id": id,
                "author": { "role": role },
                "content": { "content_type": "text", "parts": parts }
            },
            "children": []
        })
    }

    #[test]
    fn accepts_both_export_shapes() {
        let conv = conversation(json!({ "a": node("a", "user", json!(["hola"])) }));
        let as_array = json!([conv.clone()]).to_string();
        let as_object = json!({ "conversations": [conv] }).to_string();

        assert_eq!(parse_export(&as_array).unwrap().len(), 1);
        assert_eq!(parse_export(&as_object).unwrap().len(), 1);
    }

    #[test]
    fn rejects_unknown_shapes_and_bad_json() {
        assert!(matches!(
            parse_export(r#"{"chats": []}"#),
            Err(AnalysisError::UnrecognizedExport)
        ));
        assert!(matches!(parse_export("42"), Err(AnalysisError::UnrecognizedExport)));
        assert!(matches!(parse_export("{not json"), Err(AnalysisError::InvalidJson(_))));
    }

    #[test]
    fn extracts_only_user_messages() {
        let raw = json!([
            conversation(json!({
                "root": { "id": "root", "children": ["a"] },
                "a": node("a", "user", json!(["How do I debug this error in my function?"])),
                "b": node("b", "assistant", json!(["Try this."])),
                "c": node("c", "system", json!(["You are ChatGPT"])),
            })),
            { "title": "sin mapping", "create_time": 0.0, "update_time": 0.0, "mapping": null },
            conversation(json!({ "d": node("d", "user", json!(["segunda", "parte "])) })),
        ])
        .to_string();

        let conversations = parse_export(&raw).unwrap();
        let extracted = extract_user_messages(&conversations).unwrap();

        assert_eq!(
            extracted.messages,
            vec!["How do I debug this error in my function?", "segunda parte"]
        );
        assert_eq!(extracted.summary.conversations, 3);
        assert_eq!(extracted.summary.conversations_skipped, 1);
        assert_eq!(extracted.summary.nodes_scanned, 5);
        assert_eq!(extracted.summary.user_messages, 2);
    }

    #[test]
    fn nodes_are_walked_in_document_order() {
        let raw = r#"[{"title": "t", "mapping": {
            "zeta":  {"id": "zeta",  "message": {"author": {"role": "user"}, "content": {"parts": ["primero"]}}},
            "alpha": {"id": "alpha", "message": {"author": {"role": "user"}, "content": {"parts": ["segundo"]}}},
            "mid":   {"id": "mid",   "message": {"author": {"role": "user"}, "content": {"parts": ["tercero"]}}}
        }}]"#;

        let conversations = parse_export(raw).unwrap();
        let extracted = extract_user_messages(&conversations).unwrap();
        assert_eq!(extracted.messages, vec!["primero", "segundo", "tercero"]);
    }

    #[test]
    fn no_user_messages_is_an_error() {
        let raw = json!([conversation(json!({
            "b": node("b", "assistant", json!(["hola"])),
            "e": node("e", "user", json!(["   "])),
        }))])
        .to_string();
        let conversations = parse_export(&raw).unwrap();

        assert!(matches!(
            extract_user_messages(&conversations),
            Err(AnalysisError::NoUserMessages)
        ));
        assert!(matches!(extract_user_messages(&[]), Err(AnalysisError::NoUserMessages)));
    }
}
