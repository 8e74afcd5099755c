//! Léxico estático: stop-words, categorías de temas y listas de palabras
//! usadas por las heurísticas. Se carga una vez y es de sólo lectura.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const STOP_WORD_LIST: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for",
    "not", "on", "with", "he", "as", "you", "do", "at", "this", "but", "his",
    "by", "from", "they", "we", "say", "her", "she", "or", "an", "will", "my",
    "one", "all", "would", "there", "their", "what", "so", "up", "out", "if",
    "about", "who", "get", "which", "go", "me", "when", "make", "can", "like",
    "time", "no", "just", "him", "know", "take", "people", "into", "year", "your",
    "good", "some", "could", "them", "see", "other", "than", "then", "now", "look",
    "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
    "how", "our", "work", "first", "well", "way", "even", "new", "want", "because",
    "any", "these", "give", "day", "most", "us", "is", "are", "was", "were", "been",
    "being", "has", "had", "does", "did", "doing", "should", "am", "im", "dont",
    "cant", "wont", "isnt", "arent", "wasnt", "werent", "hasnt", "havent", "hadnt",
    "doesnt", "didnt", "shouldnt", "wouldnt", "couldnt", "please", "thanks", "thank",
    "help", "need", "using", "trying", "try", "getting", "something", "thing", "things",
];

/// Palabras vacías que nunca cuentan como keyword.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Categorías de temas, en orden de declaración (el orden desempata).
pub const TOPIC_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming & Development",
        &[
            "code", "programming", "javascript", "python", "react", "api", "function", "class",
            "database", "sql", "html", "css", "typescript", "nodejs", "backend", "frontend",
            "software", "developer", "debug", "error", "bug", "git", "github",
        ],
    ),
    (
        "Data & Analytics",
        &[
            "data", "analysis", "analytics", "machine learning", "ai", "model", "dataset",
            "statistics", "visualization", "pandas", "numpy", "tensorflow", "pytorch",
        ],
    ),
    (
        "Writing & Content",
        &[
            "write", "writing", "content", "article", "blog", "email", "copy", "story",
            "creative", "edit", "grammar", "tone",
        ],
    ),
    (
        "Business & Strategy",
        &[
            "business", "strategy", "marketing", "sales", "customer", "product", "market",
            "growth", "revenue", "startup", "entrepreneur",
        ],
    ),
    (
        "Design & Creative",
        &[
            "design", "ui", "ux", "interface", "visual", "color", "layout", "figma", "prototype",
            "user experience",
        ],
    ),
    (
        "Research & Learning",
        &[
            "research", "learn", "study", "explain", "understand", "concept", "theory",
            "education", "course",
        ],
    ),
    (
        "Productivity & Tools",
        &[
            "productivity", "workflow", "automation", "tool", "app", "organize", "manage",
            "efficiency", "task",
        ],
    ),
];

/// Términos que delatan un estilo técnico (se buscan como subcadena).
pub const TECHNICAL_TERMS: &[&str] = &[
    "code", "function", "api", "error", "debug", "implementation", "algorithm",
];

/// Herramientas reconocidas entre las keywords (coincidencia exacta).
pub const KNOWN_TOOLS: &[&str] = &[
    "react", "python", "javascript", "typescript", "nodejs", "sql", "git", "docker", "aws",
    "figma", "notion",
];

pub const SYSTEMATIC_WORDS: &[&str] = &[
    "step", "first", "then", "next", "process", "method", "approach", "analyze",
];
pub const CREATIVE_WORDS: &[&str] = &[
    "idea", "creative", "different", "alternative", "unique", "innovative",
];
pub const COLLABORATIVE_WORDS: &[&str] = &[
    "team", "together", "collaborate", "discuss", "feedback", "review",
];

/// Primeras palabras que identifican un tipo de pregunta.
pub const QUESTION_STARTERS: &[&str] = &[
    "how", "what", "why", "can", "could", "should", "is", "are", "do", "does", "will", "would",
];

/// Herramientas del cuestionario que implican ejemplos de código.
pub const TECHNICAL_QUESTIONNAIRE_TOOLS: &[&str] = &[
    "JavaScript/TypeScript", "Python", "React/Vue/Angular", "SQL/Databases",
];
