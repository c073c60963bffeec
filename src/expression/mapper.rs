//! Expression Mapper — emotion vector in, morph-target influences out.
//!
//! The face shows exactly one emotion at a time: the strongest entry in
//! the poem's vector. Its table entry is scaled linearly by that
//! strength and written over a fully-reset influence array, so nothing
//! from the previous poem's expression survives. Stateless; the
//! influence array is owned by the rendering layer and passed in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expression::catalog::Emotion;
use crate::expression::table::ExpressionTable;
use crate::expression::vector::EmotionVector;

// ── Error Types ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionError {
    /// Emotion name with no expression-table entry (catalog/table mismatch).
    UnknownEmotion(String),
    /// A table entry references a blend shape past the model's count.
    IndexOutOfRange { emotion: String, index: usize, len: usize },
    /// Vector length is neither 0 nor the catalog size.
    VectorLengthMismatch { expected: usize, actual: usize },
    /// Vector carries a NaN or infinite score.
    NonFiniteValue { index: usize },
    /// Table entry with a base intensity outside `[0,1]`.
    InvalidIntensity { emotion: String, index: usize, intensity: f32 },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::UnknownEmotion(name) => {
                write!(f, "No expression table entry for emotion: {}", name)
            }
            ExpressionError::IndexOutOfRange { emotion, index, len } => write!(
                f,
                "Expression for {} references morph target {} but the model has {}",
                emotion, index, len
            ),
            ExpressionError::VectorLengthMismatch { expected, actual } => write!(
                f,
                "Emotion vector must have 0 or {} entries, got {}",
                expected, actual
            ),
            ExpressionError::NonFiniteValue { index } => {
                write!(f, "Emotion vector score at index {} is not finite", index)
            }
            ExpressionError::InvalidIntensity { emotion, index, intensity } => write!(
                f,
                "Base intensity {} for {} (morph target {}) is outside [0,1]",
                intensity, emotion, index
            ),
        }
    }
}

impl std::error::Error for ExpressionError {}

// ── Dominant emotion selection ─────────────────────────

/// Pick the strongest emotion in a vector.
///
/// Returns `None` for the empty vector (poem never classified — the
/// face stays on its idle animation). Ties break to the lowest index:
/// a plain left-to-right maximum scan.
pub fn select_dominant_emotion(vector: &EmotionVector) -> Option<(Emotion, f32)> {
    let scores = vector.scores();
    let (best_index, best) = scores
        .iter()
        .enumerate()
        .fold(None, |acc: Option<(usize, f32)>, (i, &v)| match acc {
            Some((_, max)) if v <= max => acc,
            _ => Some((i, v)),
        })?;
    Emotion::from_index(best_index).map(|e| (e, best))
}

// ── Applying an expression ─────────────────────────────

/// Write one emotion's expression into `influences`.
///
/// Every slot is reset to 0, then each of the emotion's morph targets
/// is set to `base intensity * strength`. Strength is not clamped.
///
/// Validation happens before any mutation: an unknown emotion or an
/// out-of-range morph index leaves `influences` exactly as it was.
pub fn apply_expression(
    emotion: &str,
    strength: f32,
    table: &ExpressionTable,
    influences: &mut [f32],
) -> Result<(), ExpressionError> {
    let targets = table
        .targets(emotion)
        .ok_or_else(|| ExpressionError::UnknownEmotion(emotion.to_string()))?;

    // validate-then-apply: reject the whole update atomically
    for t in targets {
        if t.index >= influences.len() {
            return Err(ExpressionError::IndexOutOfRange {
                emotion: emotion.to_string(),
                index: t.index,
                len: influences.len(),
            });
        }
    }

    influences.fill(0.0);
    for t in targets {
        influences[t.index] = t.intensity * strength;
    }
    Ok(())
}

/// Select the dominant emotion and apply it in one step.
///
/// No-op on the empty vector. On success reports which emotion (and
/// strength) now drives the face, so callers can log or display it.
pub fn update_expression(
    vector: &EmotionVector,
    table: &ExpressionTable,
    influences: &mut [f32],
) -> Result<Option<(Emotion, f32)>, ExpressionError> {
    let Some((emotion, strength)) = select_dominant_emotion(vector) else {
        return Ok(None);
    };
    apply_expression(emotion.name(), strength, table, influences)?;
    Ok(Some((emotion, strength)))
}
