//! Poem records as returned by the classification service.

use serde::{Deserialize, Serialize};

use crate::expression::EmotionVector;

/// One search result: the poem text plus its classifier output.
///
/// Text fields other than `poem` are optional in the service payload,
/// so they default to empty strings rather than failing the parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoemRecord {
    pub poem: String,
    #[serde(default)]
    pub emotion_vector: EmotionVector,
    #[serde(default)]
    pub poet: String,
    #[serde(default)]
    pub title: String,
}

impl PoemRecord {
    /// Fallback record shown when a result set is empty.
    pub fn placeholder() -> Self {
        Self {
            poem: "No poems available. Please go back and search again.".to_string(),
            emotion_vector: EmotionVector::empty(),
            poet: "No Poet".to_string(),
            title: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_service_payload() {
        let json = r#"{
            "poem": "Two roads diverged in a yellow wood",
            "emotion_vector": [0.1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0.7],
            "poet": "Robert Frost",
            "title": "The Road Not Taken"
        }"#;
        let record: PoemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.poet, "Robert Frost");
        assert_eq!(record.emotion_vector.scores().len(), 15);
    }

    #[test]
    fn missing_optional_fields_default() {
        let record: PoemRecord = serde_json::from_str(r#"{"poem": "short"}"#).unwrap();
        assert!(record.emotion_vector.is_empty());
        assert!(record.poet.is_empty());
        assert!(record.title.is_empty());
    }

    #[test]
    fn malformed_vector_fails_the_whole_record() {
        let json = r#"{"poem": "x", "emotion_vector": [0.1, 0.2]}"#;
        assert!(serde_json::from_str::<PoemRecord>(json).is_err());
    }

    #[test]
    fn placeholder_has_no_classification() {
        let p = PoemRecord::placeholder();
        assert!(p.emotion_vector.is_empty());
        assert!(p.poem.contains("No poems available"));
    }
}
