use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::matching::scoring::ScoringParams;
use crate::matching::segmentation::segment;
use crate::motion::{FrameScheduler, MotionController};
use crate::session::defaults::{BucketRateEstimator, TokenOverlapMatcher};
use crate::session::runtime::{SyncSession, SyncSessionParts};
use crate::session::traits::{ParagraphMatcher, RateEstimator, Recognizer, Viewport};

/// Assembles a [`SyncSession`]. Matcher and rate estimator default to the
/// canonical implementations; recognizer, viewport and frame scheduler are
/// host collaborators and must be supplied.
pub struct SyncSessionBuilder {
    config: SyncConfig,
    script: String,
    matcher: Option<Box<dyn ParagraphMatcher>>,
    rate_estimator: Option<Box<dyn RateEstimator>>,
    recognizer: Option<Box<dyn Recognizer>>,
    viewport: Option<Box<dyn Viewport>>,
    scheduler: Option<Box<dyn FrameScheduler>>,
}

impl SyncSessionBuilder {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            script: String::new(),
            matcher: None,
            rate_estimator: None,
            recognizer: None,
            viewport: None,
            scheduler: None,
        }
    }

    pub fn with_script(mut self, script: &str) -> Self {
        self.script = script.to_string();
        self
    }

    pub fn with_matcher(mut self, matcher: Box<dyn ParagraphMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_rate_estimator(mut self, rate_estimator: Box<dyn RateEstimator>) -> Self {
        self.rate_estimator = Some(rate_estimator);
        self
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn Recognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_viewport(mut self, viewport: Box<dyn Viewport>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_scheduler(mut self, scheduler: Box<dyn FrameScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn build(self) -> Result<SyncSession, SyncError> {
        self.config.validate()?;

        let recognizer = self
            .recognizer
            .ok_or(SyncError::MissingCollaborator {
                collaborator: "recognizer",
            })?;
        let viewport = self.viewport.ok_or(SyncError::MissingCollaborator {
            collaborator: "viewport",
        })?;
        let scheduler = self.scheduler.ok_or(SyncError::MissingCollaborator {
            collaborator: "frame scheduler",
        })?;

        let scoring_params = ScoringParams {
            min_token_len: self.config.min_token_len,
            min_token_similarity: self.config.min_token_similarity,
        };
        let controller = MotionController::new(&self.config, scheduler);

        Ok(SyncSession::from_parts(SyncSessionParts {
            paragraphs: segment(&self.script),
            matcher: self
                .matcher
                .unwrap_or_else(|| Box::new(TokenOverlapMatcher::new(scoring_params))),
            rate_estimator: self
                .rate_estimator
                .unwrap_or_else(|| Box::new(BucketRateEstimator)),
            recognizer,
            viewport,
            controller,
            config: self.config,
        }))
    }
}
