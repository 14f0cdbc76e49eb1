use std::time::Duration;

use crate::error::SyncError;
use crate::types::{MatchResult, Paragraph, RateEstimate};

/// Scores a transcript fragment against the script's paragraphs.
pub trait ParagraphMatcher {
    fn best_match(&self, spoken_text: &str, paragraphs: &[Paragraph]) -> MatchResult;
}

/// Converts a finalized transcript span and its elapsed duration into a
/// speed level.
pub trait RateEstimator {
    fn estimate(&self, text: &str, duration: Duration) -> RateEstimate;
}

/// The speech-recognition collaborator. The session only drives its
/// lifecycle; results arrive as [`crate::types::RecognitionEvent`]s pushed
/// into the session by the host.
///
/// `start()` returns [`SyncError::RecognitionUnsupported`] when the host
/// environment has no speech capability; the session then disables
/// voice-driven sync and leaves manual controls available.
pub trait Recognizer {
    fn start(&mut self) -> Result<(), SyncError>;
    fn stop(&mut self);
}

/// The scrollable view hosting the rendered script. Offsets and heights are
/// in the same distance units the motion controller animates.
pub trait Viewport {
    fn scroll_offset(&self) -> f32;
    fn set_scroll_offset(&mut self, offset: f32);
    fn client_height(&self) -> f32;
    fn content_height(&self) -> f32;
    /// Vertical offset of a paragraph's top edge within the content, as laid
    /// out by the rendering collaborator. `None` for out-of-range indices.
    fn paragraph_offset(&self, index: usize) -> Option<f32>;
}
