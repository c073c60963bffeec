//! View-model data for the emotion-vector panel.

use serde::Serialize;

use crate::expression::{Emotion, EmotionVector};

/// One bar in the emotion panel.
#[derive(Debug, Clone, Serialize)]
pub struct EmotionBar {
    pub emotion: Emotion,
    /// Ready-made label, e.g. `"Happiness: 42%"`.
    pub label: String,
    /// Bar fill color (CSS hex).
    pub color: &'static str,
    /// Fill percentage, `score * 100` (not clamped).
    pub percent: f32,
}

/// Build the bar descriptors for a poem's emotion vector.
///
/// One bar per score, in catalog order; the empty vector yields no bars.
pub fn emotion_bars(vector: &EmotionVector) -> Vec<EmotionBar> {
    vector
        .scores()
        .iter()
        .zip(Emotion::ALL)
        .map(|(&score, emotion)| EmotionBar {
            emotion,
            label: format!("{}: {:.0}%", emotion, score * 100.0),
            color: emotion.color(),
            percent: score * 100.0,
        })
        .collect()
}
