use std::time::Instant;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::matching::segmentation::segment;
use crate::motion::MotionController;
use crate::session::traits::{ParagraphMatcher, RateEstimator, Recognizer, Viewport};
use crate::types::{Paragraph, RecognitionEvent, ScrollState, TranscriptFragment};

/// Wires recognition events to the match scorer and rate estimator, converts
/// match results into scroll targets, and exposes highlight state to the
/// rendering collaborator.
///
/// Single-threaded and event-driven: all state mutation happens synchronously
/// inside [`SyncSession::handle_recognition_event`] or
/// [`SyncSession::handle_frame`], in arrival order. Scroll position is
/// mutated only through the motion controller.
pub struct SyncSession {
    config: SyncConfig,
    paragraphs: Vec<Paragraph>,
    matcher: Box<dyn ParagraphMatcher>,
    rate_estimator: Box<dyn RateEstimator>,
    recognizer: Box<dyn Recognizer>,
    viewport: Box<dyn Viewport>,
    controller: MotionController,
    want_listening: bool,
    listening: bool,
    last_error: Option<String>,
    current_paragraph: Option<usize>,
    span_started_at: Option<Instant>,
}

pub(crate) struct SyncSessionParts {
    pub config: SyncConfig,
    pub paragraphs: Vec<Paragraph>,
    pub matcher: Box<dyn ParagraphMatcher>,
    pub rate_estimator: Box<dyn RateEstimator>,
    pub recognizer: Box<dyn Recognizer>,
    pub viewport: Box<dyn Viewport>,
    pub controller: MotionController,
}

impl SyncSession {
    pub(crate) fn from_parts(parts: SyncSessionParts) -> Self {
        Self {
            config: parts.config,
            paragraphs: parts.paragraphs,
            matcher: parts.matcher,
            rate_estimator: parts.rate_estimator,
            recognizer: parts.recognizer,
            viewport: parts.viewport,
            controller: parts.controller,
            want_listening: false,
            listening: false,
            last_error: None,
            current_paragraph: None,
            span_started_at: None,
        }
    }

    /// Replaces the script wholesale. Paragraph indices are invalidated by
    /// any script change, so the highlight resets.
    pub fn set_script(&mut self, script: &str) {
        self.paragraphs = segment(script);
        self.current_paragraph = None;
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Paragraph currently being spoken, for emphasized rendering.
    pub fn current_paragraph_index(&self) -> Option<usize> {
        self.current_paragraph
    }

    /// Paragraph after the current one, for light emphasis.
    pub fn next_paragraph_index(&self) -> Option<usize> {
        let next = self.current_paragraph? + 1;
        (next < self.paragraphs.len()).then_some(next)
    }

    pub fn speed_level(&self) -> u8 {
        self.controller.speed_level()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.controller.state()
    }

    /// Requests continuous recognition. On an unsupported host the error is
    /// recorded once, voice-driven sync stays disabled and manual scrolling
    /// remains available; the call is not retried.
    pub fn start_listening(&mut self) -> Result<(), SyncError> {
        self.want_listening = true;
        if let Err(err) = self.recognizer.start() {
            self.want_listening = false;
            self.last_error = Some(err.to_string());
            return Err(err);
        }
        Ok(())
    }

    pub fn stop_listening(&mut self) {
        self.want_listening = false;
        self.recognizer.stop();
    }

    /// Host-driven speed override (the speed slider in a front end).
    pub fn set_speed_level(&mut self, level: u8) {
        self.controller.set_speed_level(level);
    }

    /// Tears the session down: freezes the scroll and stops recognition.
    /// The recognizer is stopped unconditionally; a start may have been
    /// issued whose `Started` event has not arrived yet, and skipping the
    /// stop then would leak a live microphone session.
    pub fn end(&mut self) {
        self.controller.stop();
        self.want_listening = false;
        self.listening = false;
        self.recognizer.stop();
    }

    /// One granted animation frame: advances the controller and writes the
    /// new position through to the viewport.
    pub fn handle_frame(&mut self) {
        let position = self.controller.tick();
        self.viewport.set_scroll_offset(position);
    }

    pub fn handle_recognition_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Started => {
                self.listening = true;
                self.last_error = None;
                self.span_started_at = Some(Instant::now());
            }
            RecognitionEvent::Result(fragment) => self.on_result(fragment),
            RecognitionEvent::Error { code } => {
                // Not retried automatically; an error loop is worse than a
                // stopped scroll.
                let err = SyncError::recognition(code);
                tracing::warn!(error = %err, "recognition error, listening stopped");
                self.last_error = Some(err.to_string());
                self.want_listening = false;
                self.listening = false;
                self.recognizer.stop();
            }
            RecognitionEvent::Ended => {
                self.listening = false;
                if self.want_listening {
                    // Recognizers end sessions on their own schedule; restart
                    // to keep continuous coverage.
                    if let Err(err) = self.recognizer.start() {
                        self.want_listening = false;
                        self.last_error = Some(err.to_string());
                    }
                }
            }
        }
    }

    fn on_result(&mut self, fragment: TranscriptFragment) {
        self.align_to(&fragment.text);

        if !fragment.is_final {
            return;
        }
        if let Some(started_at) = self.span_started_at {
            let duration = fragment.timestamp.saturating_duration_since(started_at);
            let estimate = self.rate_estimator.estimate(&fragment.text, duration);
            tracing::debug!(
                wpm = estimate.words_per_minute,
                level = estimate.level,
                "speaking rate estimated from finalized span"
            );
            self.controller.set_speed_level(estimate.level.clamp(1, 5));
        }
        self.span_started_at = Some(fragment.timestamp);
    }

    /// Scores the fragment and, when the matched paragraph sits outside the
    /// ideal reading band, retargets the scroll so it lands at
    /// `ideal_fraction` of the viewport height.
    fn align_to(&mut self, spoken_text: &str) {
        let result = self.matcher.best_match(spoken_text, &self.paragraphs);
        if result.confidence <= 0.0 {
            // No usable match; leave the current target untouched.
            return;
        }
        self.current_paragraph = Some(result.paragraph_index);

        let Some(paragraph_offset) = self.viewport.paragraph_offset(result.paragraph_index) else {
            return;
        };

        let scroll_offset = self.viewport.scroll_offset();
        self.controller.observe_offset(scroll_offset);

        let client_height = self.viewport.client_height();
        let relative = paragraph_offset - scroll_offset;
        let band_top = client_height / 3.0;
        let band_bottom =
            client_height * self.config.lower_band_fraction - self.config.control_panel_allowance;
        if relative >= band_top && relative <= band_bottom {
            return;
        }

        let target = (paragraph_offset - client_height * self.config.ideal_fraction).max(0.0);
        let max_scroll = (self.viewport.content_height() - client_height).max(0.0);
        self.controller.set_target(target.min(max_scroll), result.confidence);
    }
}
