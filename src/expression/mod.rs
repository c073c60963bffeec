//! Emotion-to-expression mapping.
//!
//! A poem's emotion vector is reduced to its dominant emotion, whose
//! expression-table entry is scaled and written into the face model's
//! morph-target influence array.

pub mod catalog;
pub mod mapper;
pub mod table;
pub mod vector;

pub use catalog::{Emotion, EMOTION_COUNT};
pub use mapper::{apply_expression, select_dominant_emotion, update_expression, ExpressionError};
pub use table::{load_table, ExpressionTable, MorphTarget};
pub use vector::EmotionVector;
