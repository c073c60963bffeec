//! The fixed emotion catalog.
//!
//! The classification service scores every poem against the same ordered
//! list of 15 emotions, so vector index `i` always refers to `ALL[i]`.
//! The ordering is part of the wire contract and must never change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of emotions the classifier scores. Every non-empty emotion
/// vector has exactly this many entries.
pub const EMOTION_COUNT: usize = 15;

/// One of the 15 catalog emotions, in classifier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happiness,
    Sadness,
    Fear,
    Disgust,
    Anger,
    Surprise,
    Anticipation,
    Trust,
    Guilt,
    Love,
    Saudade,
    Envy,
    Bittersweetness,
    Loneliness,
    Nostalgia,
}

impl Emotion {
    /// All emotions in classifier order.
    pub const ALL: [Emotion; EMOTION_COUNT] = [
        Emotion::Happiness,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Anger,
        Emotion::Surprise,
        Emotion::Anticipation,
        Emotion::Trust,
        Emotion::Guilt,
        Emotion::Love,
        Emotion::Saudade,
        Emotion::Envy,
        Emotion::Bittersweetness,
        Emotion::Loneliness,
        Emotion::Nostalgia,
    ];

    /// Canonical display name, as used for expression-table keys.
    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Happiness => "Happiness",
            Emotion::Sadness => "Sadness",
            Emotion::Fear => "Fear",
            Emotion::Disgust => "Disgust",
            Emotion::Anger => "Anger",
            Emotion::Surprise => "Surprise",
            Emotion::Anticipation => "Anticipation",
            Emotion::Trust => "Trust",
            Emotion::Guilt => "Guilt",
            Emotion::Love => "Love",
            Emotion::Saudade => "Saudade",
            Emotion::Envy => "Envy",
            Emotion::Bittersweetness => "Bittersweetness",
            Emotion::Loneliness => "Loneliness",
            Emotion::Nostalgia => "Nostalgia",
        }
    }

    /// Display color for the emotion-bar panel (CSS hex).
    pub fn color(&self) -> &'static str {
        match self {
            Emotion::Happiness => "#ffd700",
            Emotion::Sadness => "#0000ff",
            Emotion::Fear => "#800080",
            Emotion::Disgust => "#008000",
            Emotion::Anger => "#ff0000",
            Emotion::Surprise => "#ffa500",
            Emotion::Anticipation => "#00ff00",
            Emotion::Trust => "#00ffff",
            Emotion::Guilt => "#8b0000",
            Emotion::Love => "#ff69b4",
            Emotion::Saudade => "#4682b4",
            Emotion::Envy => "#7fff00",
            Emotion::Bittersweetness => "#c71585",
            Emotion::Loneliness => "#4b0082",
            Emotion::Nostalgia => "#ff6347",
        }
    }

    /// Position of this emotion in the classifier vector.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|e| e == self).unwrap_or(0)
    }

    /// Emotion at a given vector index, if in range.
    pub fn from_index(index: usize) -> Option<Emotion> {
        Self::ALL.get(index).copied()
    }

    /// Look up an emotion by its canonical name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Emotion> {
        Self::ALL.iter().find(|e| e.name() == name).copied()
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
