use crate::config::SyncConfig;
use crate::motion::scheduler::{FrameHandle, FrameScheduler};
use crate::types::{ScrollMode, ScrollState};

/// Threshold below which a step snaps to the target and the animation ends.
const SNAP_THRESHOLD: f32 = 0.5;

/// Owns the viewport position state and animates it toward a target with
/// exponential convergence, gated by match confidence.
///
/// State machine: `Idle` <-> `Animating`. While `Animating` exactly one
/// frame is pending with the scheduler; retargeting replaces the target in
/// place without restarting the chain, so there is no visible flicker.
pub struct MotionController {
    state: ScrollState,
    smoothness: f32,
    min_confidence: f32,
    max_low_confidence_adjustment: f32,
    speed_curve_base: f32,
    speed_step_units: f32,
    speed_level: u8,
    pending: Option<FrameHandle>,
    scheduler: Box<dyn FrameScheduler>,
}

impl MotionController {
    pub fn new(config: &SyncConfig, scheduler: Box<dyn FrameScheduler>) -> Self {
        Self {
            state: ScrollState::at(0.0),
            smoothness: config.smoothness,
            min_confidence: config.min_confidence,
            max_low_confidence_adjustment: config.max_low_confidence_adjustment,
            speed_curve_base: config.speed_curve_base,
            speed_step_units: config.speed_step_units,
            speed_level: 3,
            pending: None,
            scheduler,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn current(&self) -> f32 {
        self.state.current
    }

    pub fn target(&self) -> f32 {
        self.state.target
    }

    pub fn is_animating(&self) -> bool {
        self.state.mode == ScrollMode::Animating
    }

    pub fn speed_level(&self) -> u8 {
        self.speed_level
    }

    /// Re-seeds the current position from the viewport while idle, so manual
    /// scrolling between matches is respected. Ignored mid-animation; the
    /// controller is the only writer then.
    pub fn observe_offset(&mut self, offset: f32) {
        if self.state.mode == ScrollMode::Idle {
            self.state.current = offset;
        }
    }

    /// Sets the animation target. At or above `min_confidence` the position
    /// is accepted outright; below it a damped, clamped partial correction
    /// nudges the view toward the hypothesis instead of jumping.
    pub fn set_target(&mut self, position: f32, confidence: f32) {
        let target = if confidence >= self.min_confidence {
            position
        } else {
            let adjustment = (position - self.state.current) * (confidence / self.min_confidence);
            let clamp = self.max_low_confidence_adjustment;
            tracing::debug!(
                position,
                confidence,
                adjustment,
                "low-confidence match, applying damped correction"
            );
            self.state.current + adjustment.clamp(-clamp, clamp)
        };

        self.state.target = target;
        if self.state.mode == ScrollMode::Idle
            && (target - self.state.current).abs() > f32::EPSILON
        {
            self.state.mode = ScrollMode::Animating;
            self.pending = Some(self.scheduler.schedule());
        }
    }

    /// Projects a forward target from the speed level. The factor grows
    /// exponentially with the level (`base^(level - 3)`); speed-driven
    /// motion is always fully trusted.
    pub fn set_speed_level(&mut self, level: u8) {
        let level = level.clamp(1, 5);
        self.speed_level = level;
        let factor = self.speed_curve_base.powi(i32::from(level) - 3);
        let projected = self.state.current + factor * self.speed_step_units;
        self.set_target(projected, 1.0);
    }

    /// Advances one animation frame. Closes `1 - smoothness` of the
    /// remaining distance; once the step falls under the snap threshold the
    /// position lands exactly on the target and the controller idles.
    /// Returns the position after the step.
    pub fn tick(&mut self) -> f32 {
        self.pending = None;
        if self.state.mode == ScrollMode::Idle {
            return self.state.current;
        }

        let delta = self.state.target - self.state.current;
        let step = delta * (1.0 - self.smoothness);
        if step.abs() > SNAP_THRESHOLD {
            self.state.current += step;
            self.pending = Some(self.scheduler.schedule());
        } else {
            self.state.current = self.state.target;
            self.state.mode = ScrollMode::Idle;
        }
        self.state.current
    }

    /// Cancels any pending frame and freezes the view exactly where it is.
    /// `current` is deliberately not snapped to `target`.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.state.mode = ScrollMode::Idle;
    }
}
