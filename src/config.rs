use std::path::Path;

use crate::error::SyncError;

/// Tunables for the synchronization core. Every field has a documented
/// default; hosts usually start from `SyncConfig::default()` and override a
/// handful of values.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Fraction of the remaining distance retained per frame (0-1). Each
    /// tick closes `1 - smoothness` of the gap to the target.
    pub smoothness: f32,
    /// Match confidence at or above which a target is accepted outright.
    /// Values as low as 0.05 are usable for aggressive tracking.
    pub min_confidence: f32,
    /// Clamp on the damped partial correction applied below
    /// `min_confidence`, in viewport distance units.
    pub max_low_confidence_adjustment: f32,
    /// Viewport-height fraction where the active paragraph should settle.
    pub ideal_fraction: f32,
    /// Band bottom as a fraction of viewport height; paragraphs below it
    /// trigger a scroll.
    pub lower_band_fraction: f32,
    /// Fixed subtraction from the band bottom for on-screen controls.
    pub control_panel_allowance: f32,
    /// Base of the speed curve, `speed_curve_base^(level - 3)`.
    pub speed_curve_base: f32,
    /// Distance units advanced per speed-driven target projection.
    pub speed_step_units: f32,
    /// Shortest spoken/script token the match scorer keeps.
    pub min_token_len: usize,
    /// Similarity floor below which the edit-distance fallback does not
    /// count a token as matched.
    pub min_token_similarity: f32,
    /// BCP 47 language tag handed to the recognition collaborator.
    pub language: String,
}

impl SyncConfig {
    pub const DEFAULT_SMOOTHNESS: f32 = 0.8;
    pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.3;
    pub const DEFAULT_MAX_LOW_CONFIDENCE_ADJUSTMENT: f32 = 100.0;
    pub const DEFAULT_IDEAL_FRACTION: f32 = 0.3;
    pub const DEFAULT_LOWER_BAND_FRACTION: f32 = 0.7;
    pub const DEFAULT_CONTROL_PANEL_ALLOWANCE: f32 = 80.0;
    pub const DEFAULT_SPEED_CURVE_BASE: f32 = 1.8;
    pub const DEFAULT_SPEED_STEP_UNITS: f32 = 2.0;
    pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;
    pub const DEFAULT_MIN_TOKEN_SIMILARITY: f32 = 0.7;

    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| SyncError::io("read sync config", e))?;
        let config: Self =
            serde_json::from_str(&data).map_err(|e| SyncError::json("parse sync config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SyncError> {
        if !(0.0..1.0).contains(&self.smoothness) {
            return Err(SyncError::invalid_config(format!(
                "smoothness must be in [0, 1): {}",
                self.smoothness
            )));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) || self.min_confidence == 0.0 {
            return Err(SyncError::invalid_config(format!(
                "min_confidence must be in (0, 1]: {}",
                self.min_confidence
            )));
        }
        if self.max_low_confidence_adjustment <= 0.0 {
            return Err(SyncError::invalid_config(
                "max_low_confidence_adjustment must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.ideal_fraction)
            || !(0.0..=1.0).contains(&self.lower_band_fraction)
        {
            return Err(SyncError::invalid_config(
                "ideal_fraction and lower_band_fraction must be in [0, 1]",
            ));
        }
        if self.ideal_fraction >= self.lower_band_fraction {
            return Err(SyncError::invalid_config(format!(
                "ideal_fraction ({}) must lie above lower_band_fraction ({})",
                self.ideal_fraction, self.lower_band_fraction
            )));
        }
        if self.speed_curve_base <= 1.0 {
            return Err(SyncError::invalid_config(
                "speed_curve_base must be greater than 1",
            ));
        }
        if self.speed_step_units <= 0.0 {
            return Err(SyncError::invalid_config(
                "speed_step_units must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_token_similarity) {
            return Err(SyncError::invalid_config(
                "min_token_similarity must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            smoothness: Self::DEFAULT_SMOOTHNESS,
            min_confidence: Self::DEFAULT_MIN_CONFIDENCE,
            max_low_confidence_adjustment: Self::DEFAULT_MAX_LOW_CONFIDENCE_ADJUSTMENT,
            ideal_fraction: Self::DEFAULT_IDEAL_FRACTION,
            lower_band_fraction: Self::DEFAULT_LOWER_BAND_FRACTION,
            control_panel_allowance: Self::DEFAULT_CONTROL_PANEL_ALLOWANCE,
            speed_curve_base: Self::DEFAULT_SPEED_CURVE_BASE,
            speed_step_units: Self::DEFAULT_SPEED_STEP_UNITS,
            min_token_len: Self::DEFAULT_MIN_TOKEN_LEN,
            min_token_similarity: Self::DEFAULT_MIN_TOKEN_SIMILARITY,
            language: "en-US".to_string(),
        }
    }
}
