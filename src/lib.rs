//! versiface — poem emotion to facial blend-shape expression engine.
//!
//! The viewer's rendering layer (scene graph, GLTF face model, text
//! meshes) lives elsewhere; this crate supplies everything behind it:
//! querying the poem classification service, navigating and laying out
//! results, and mapping each poem's 15-dimensional emotion vector onto
//! the face model's morph-target influences.

pub mod config;
pub mod expression;
pub mod results;
pub mod search;
pub mod session;
pub mod utils;

pub use expression::{
    apply_expression, select_dominant_emotion, update_expression, Emotion, EmotionVector,
    ExpressionError, ExpressionTable, MorphTarget, EMOTION_COUNT,
};
pub use results::{Navigator, PoemRecord};
pub use search::{SearchClient, SearchConfig, SearchError, SearchKind};
pub use session::{PoemView, ViewerCommand, ViewerSession};
