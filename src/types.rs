use std::time::Instant;

/// A contiguous, non-empty block of script text; the atomic unit of
/// alignment. Indices are invalidated whenever the script changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
    /// Running sum of previous paragraphs' lengths plus separator lengths.
    pub char_offset: usize,
}

/// A unit of recognized speech, either interim (subject to revision) or
/// final. Ephemeral; never persisted.
#[derive(Debug, Clone)]
pub struct TranscriptFragment {
    pub text: String,
    pub is_final: bool,
    pub timestamp: Instant,
}

/// Best-matching paragraph for a transcript fragment.
///
/// `confidence == 0.0` means no usable match; `paragraph_index` defaults to 0
/// when no paragraphs exist or no spoken text was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub paragraph_index: usize,
    pub confidence: f32,
}

impl MatchResult {
    pub(crate) fn none() -> Self {
        Self {
            paragraph_index: 0,
            confidence: 0.0,
        }
    }
}

/// Speaking rate derived from a finalized transcript span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateEstimate {
    pub words_per_minute: f32,
    /// Discrete speed level in [1, 5].
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Idle,
    Animating,
}

/// Viewport position state, exclusively owned and mutated by the motion
/// controller. `Animating` implies exactly one pending scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub current: f32,
    pub target: f32,
    pub mode: ScrollMode,
}

impl ScrollState {
    pub(crate) fn at(offset: f32) -> Self {
        Self {
            current: offset,
            target: offset,
            mode: ScrollMode::Idle,
        }
    }
}

/// Events emitted by the recognition collaborator, dispatched into the
/// session strictly in arrival order.
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    Started,
    Result(TranscriptFragment),
    Error { code: String },
    Ended,
}
