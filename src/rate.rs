use std::time::Duration;

use crate::types::RateEstimate;

/// Safe default: medium pace.
pub const DEFAULT_LEVEL: u8 = 3;

/// WPM thresholds for levels 1-4; anything at or above the last is level 5.
const LEVEL_BUCKETS: [(f32, u8); 4] = [(100.0, 1), (130.0, 2), (170.0, 3), (200.0, 4)];

/// Converts a finalized transcript span and its elapsed duration into a
/// discrete speed level.
///
/// Invalid input (empty text, non-positive duration, non-finite result)
/// yields the safe default level instead of an error; a bad estimate must
/// never stall the scroll.
pub fn estimate(text: &str, duration: Duration) -> RateEstimate {
    let words = text.split_whitespace().count();
    let seconds = duration.as_secs_f32();
    if words == 0 || seconds <= 0.0 {
        return RateEstimate {
            words_per_minute: 0.0,
            level: DEFAULT_LEVEL,
        };
    }

    let words_per_minute = words as f32 / (seconds / 60.0);
    if !words_per_minute.is_finite() {
        tracing::warn!(seconds, words, "non-finite speaking rate, using default level");
        return RateEstimate {
            words_per_minute: 0.0,
            level: DEFAULT_LEVEL,
        };
    }

    RateEstimate {
        words_per_minute,
        level: level_for_wpm(words_per_minute),
    }
}

fn level_for_wpm(wpm: f32) -> u8 {
    for (threshold, level) in LEVEL_BUCKETS {
        if wpm < threshold {
            return level;
        }
    }
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_example_maps_to_medium() {
        // 5 words in 2 seconds = 150 wpm
        let rate = estimate("the quick brown fox jumps", Duration::from_secs(2));
        assert!((rate.words_per_minute - 150.0).abs() < 1e-3);
        assert_eq!(rate.level, 3);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(level_for_wpm(0.0), 1);
        assert_eq!(level_for_wpm(99.9), 1);
        assert_eq!(level_for_wpm(100.0), 2);
        assert_eq!(level_for_wpm(129.9), 2);
        assert_eq!(level_for_wpm(130.0), 3);
        assert_eq!(level_for_wpm(169.9), 3);
        assert_eq!(level_for_wpm(170.0), 4);
        assert_eq!(level_for_wpm(199.9), 4);
        assert_eq!(level_for_wpm(200.0), 5);
        assert_eq!(level_for_wpm(400.0), 5);
    }

    #[test]
    fn empty_text_returns_default_level() {
        let rate = estimate("", Duration::from_secs(5));
        assert_eq!(rate.level, DEFAULT_LEVEL);
        assert_eq!(rate.words_per_minute, 0.0);
    }

    #[test]
    fn zero_duration_returns_default_level() {
        let rate = estimate("some words here", Duration::ZERO);
        assert_eq!(rate.level, DEFAULT_LEVEL);
    }

    #[test]
    fn slow_and_fast_speech_hit_outer_levels() {
        // 3 words over 4 seconds = 45 wpm
        let slow = estimate("measured and calm", Duration::from_secs(4));
        assert_eq!(slow.level, 1);
        // 8 words over 2 seconds = 240 wpm
        let fast = estimate(
            "rushing through every single word of the script",
            Duration::from_secs(2),
        );
        assert_eq!(fast.level, 5);
    }
}
