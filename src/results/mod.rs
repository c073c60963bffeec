//! Search-result handling: poem records, navigation, text layout, and
//! the emotion-panel view model.

pub mod display;
pub mod layout;
pub mod navigator;
pub mod poem;
pub mod store;

pub use display::{emotion_bars, EmotionBar};
pub use layout::wrap_poem;
pub use navigator::Navigator;
pub use poem::PoemRecord;
