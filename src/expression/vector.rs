//! Validated emotion vectors.
//!
//! The classification service sends either a full 15-score vector or an
//! empty list (poem never classified). Anything else is a malformed
//! payload and is rejected at the deserialization boundary rather than
//! deep inside the mapper.

use serde::{Deserialize, Deserializer, Serialize};

use crate::expression::catalog::EMOTION_COUNT;
use crate::expression::mapper::ExpressionError;

/// An ordered sequence of per-emotion scores.
///
/// Length is either 0 or [`EMOTION_COUNT`]; every value is finite.
/// Scores are expected in `[0,1]` but are deliberately not clamped or
/// normalized — the mapper's scaling law passes them through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct EmotionVector(Vec<f32>);

impl EmotionVector {
    /// Build a vector, enforcing the length and finiteness invariants.
    pub fn new(scores: Vec<f32>) -> Result<Self, ExpressionError> {
        if !scores.is_empty() && scores.len() != EMOTION_COUNT {
            return Err(ExpressionError::VectorLengthMismatch {
                expected: EMOTION_COUNT,
                actual: scores.len(),
            });
        }
        if let Some(pos) = scores.iter().position(|v| !v.is_finite()) {
            return Err(ExpressionError::NonFiniteValue { index: pos });
        }
        Ok(Self(scores))
    }

    /// The empty vector — a poem with no classification.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn scores(&self) -> &[f32] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for EmotionVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<f32>::deserialize(deserializer)?;
        EmotionVector::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_and_full_length() {
        assert!(EmotionVector::new(vec![]).is_ok());
        assert!(EmotionVector::new(vec![0.0; EMOTION_COUNT]).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = EmotionVector::new(vec![0.5; 3]).unwrap_err();
        assert!(matches!(
            err,
            ExpressionError::VectorLengthMismatch { expected: 15, actual: 3 }
        ));
    }

    #[test]
    fn rejects_non_finite_scores() {
        let mut scores = vec![0.0; EMOTION_COUNT];
        scores[7] = f32::NAN;
        let err = EmotionVector::new(scores).unwrap_err();
        assert!(matches!(err, ExpressionError::NonFiniteValue { index: 7 }));
    }

    #[test]
    fn out_of_range_scores_pass_through() {
        // Not clamped — the scaling policy preserves them.
        let mut scores = vec![0.0; EMOTION_COUNT];
        scores[0] = 1.5;
        let v = EmotionVector::new(scores).unwrap();
        assert_eq!(v.scores()[0], 1.5);
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<EmotionVector, _> = serde_json::from_str("[]");
        assert!(ok.is_ok());

        let bad: Result<EmotionVector, _> = serde_json::from_str("[0.1, 0.2]");
        assert!(bad.is_err(), "short vector should fail to deserialize");
    }
}
