//! Viewer session — typed UI commands over the current result set.
//!
//! The rendering layer forwards its button events here as [`ViewerCommand`]s
//! and redraws from the returned [`PoemView`]. Expression updates go the
//! other way: the session writes into the renderer's morph-target
//! influence array on request, and mapper configuration defects are logged
//! instead of propagated — the face just stays neutral.

use serde::{Deserialize, Serialize};

use crate::expression::{update_expression, Emotion, ExpressionTable};
use crate::results::{emotion_bars, wrap_poem, EmotionBar, Navigator, PoemRecord};

/// Distance the poem mesh moves per scroll click.
const SCROLL_STEP: f32 = 0.5;

/// A UI event the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerCommand {
    NextPoem,
    PrevPoem,
    ScrollUp,
    ScrollDown,
    BackToSearch,
}

/// Everything the rendering layer needs to draw the current poem.
#[derive(Debug, Clone, Serialize)]
pub struct PoemView {
    pub title: String,
    pub poet: String,
    /// Poem text, wrapped for the 3D text mesh.
    pub lines: Vec<String>,
    /// Emotion-panel bars (empty for unclassified poems).
    pub bars: Vec<EmotionBar>,
    /// Vertical offset of the poem mesh from scrolling.
    pub scroll_offset: f32,
    /// Set when the user asked to leave the viewer.
    pub exited: bool,
}

/// State for one stretch of browsing through search results.
#[derive(Debug)]
pub struct ViewerSession {
    navigator: Navigator,
    scroll_offset: f32,
    exited: bool,
}

impl ViewerSession {
    pub fn new(records: Vec<PoemRecord>) -> Self {
        Self {
            navigator: Navigator::new(records),
            scroll_offset: 0.0,
            exited: false,
        }
    }

    /// Apply one UI command and return the refreshed view.
    pub fn handle(&mut self, command: ViewerCommand) -> PoemView {
        match command {
            ViewerCommand::NextPoem => {
                self.navigator.next();
                self.scroll_offset = 0.0;
            }
            ViewerCommand::PrevPoem => {
                self.navigator.prev();
                self.scroll_offset = 0.0;
            }
            ViewerCommand::ScrollUp => self.scroll_offset += SCROLL_STEP,
            ViewerCommand::ScrollDown => self.scroll_offset -= SCROLL_STEP,
            ViewerCommand::BackToSearch => self.exited = true,
        }
        self.view()
    }

    /// Build the view for the current poem without changing state.
    pub fn view(&self) -> PoemView {
        let record = self.navigator.current();
        PoemView {
            title: record.title.clone(),
            poet: record.poet.clone(),
            lines: wrap_poem(&record.poem),
            bars: emotion_bars(&record.emotion_vector),
            scroll_offset: self.scroll_offset,
            exited: self.exited,
        }
    }

    pub fn current(&self) -> &PoemRecord {
        self.navigator.current()
    }

    /// Drive the face from the current poem's emotion vector.
    ///
    /// Writes into the caller-owned influence array. Returns the emotion
    /// now shown, or `None` when the poem has no vector (influences are
    /// left alone — the idle animation keeps running) or when the table
    /// and model disagree, which is logged as a configuration defect.
    pub fn refresh_expression(
        &self,
        table: &ExpressionTable,
        influences: &mut [f32],
    ) -> Option<(Emotion, f32)> {
        match update_expression(&self.navigator.current().emotion_vector, table, influences) {
            Ok(applied) => applied,
            Err(e) => {
                tracing::warn!(error = %e, "expression update rejected");
                None
            }
        }
    }
}
