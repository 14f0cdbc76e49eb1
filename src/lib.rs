pub mod config;
pub mod error;
pub mod matching;
pub mod motion;
pub mod rate;
pub mod session;
pub mod types;

pub use config::SyncConfig;
pub use error::SyncError;
pub use matching::scoring::{score, ScoringParams};
pub use matching::segmentation::segment;
pub use motion::{FrameHandle, FrameScheduler, MotionController};
pub use session::builder::SyncSessionBuilder;
pub use session::defaults::{BucketRateEstimator, TokenOverlapMatcher};
pub use session::runtime::SyncSession;
pub use session::traits::{ParagraphMatcher, RateEstimator, Recognizer, Viewport};
pub use types::{
    MatchResult, Paragraph, RateEstimate, RecognitionEvent, ScrollMode, ScrollState,
    TranscriptFragment,
};
