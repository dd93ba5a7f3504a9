//! WCAG-style contrast ratios over tones.
//!
//! Contrast ratio is defined over relative luminance Y as
//! `(lighter + 5) / (darker + 5)`, ranging 1 to 21. Tone (L*) is
//! monotonic in Y, so the ratio of two tones is well defined and can be
//! inverted: given one tone and a target ratio, the tone reaching the
//! target on the lighter or darker side is recoverable when one exists.

use crate::color::{lstar_from_y, y_from_lstar};

/// A requested and a realized ratio within this distance still round to
/// the same tenth.
const CONTRAST_RATIO_EPSILON: f64 = 0.04;

/// Display-space quantization reaches a requested lightness only
/// approximately; overshooting by this much keeps the realized ratio at
/// or above the request.
const LUMINANCE_GAMUT_MAP_TOLERANCE: f64 = 0.4;

/// Contrast ratio of two relative luminance values, in [1, 21].
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = if lighter == y2 { y1 } else { y2 };
    (lighter + 5.0) / (darker + 5.0)
}

/// Contrast ratio of two tones, in [1, 21]. Tones outside [0, 100] are
/// clamped first.
pub fn ratio_of_tones(tone_a: f64, tone_b: f64) -> f64 {
    let tone_a = tone_a.clamp(0.0, 100.0);
    let tone_b = tone_b.clamp(0.0, 100.0);
    ratio_of_ys(y_from_lstar(tone_a), y_from_lstar(tone_b))
}

/// The lighter tone reaching `ratio` against `tone`, or `None` when no
/// in-range tone can.
pub fn lighter(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let dark_y = y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }
    let value = lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// The darker tone reaching `ratio` against `tone`, or `None` when no
/// in-range tone can.
pub fn darker(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let light_y = y_from_lstar(tone);
    let dark_y = ((light_y + 5.0) / ratio) - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }
    let value = lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// Like [`lighter`], but falls back to 100 (white) when the ratio is
/// unreachable.
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    lighter(tone, ratio).unwrap_or(100.0)
}

/// Like [`darker`], but falls back to 0 (black) when the ratio is
/// unreachable.
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    darker(tone, ratio).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_extremes() {
        assert!((ratio_of_tones(100.0, 0.0) - 21.0).abs() < 1e-9);
        assert!((ratio_of_tones(50.0, 50.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_clamps_out_of_bounds_tones() {
        assert!((ratio_of_tones(-10.0, 110.0) - 21.0).abs() < 1e-3);
    }

    #[test]
    fn test_lighter_impossible_ratio() {
        assert_eq!(lighter(90.0, 10.0), None);
    }

    #[test]
    fn test_lighter_rejects_out_of_bounds_tone() {
        assert_eq!(lighter(110.0, 2.0), None);
        assert_eq!(lighter(-10.0, 2.0), None);
    }

    #[test]
    fn test_lighter_unsafe_falls_back_to_white() {
        assert!((lighter_unsafe(100.0, 2.0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_darker_impossible_ratio() {
        assert_eq!(darker(10.0, 20.0), None);
    }

    #[test]
    fn test_darker_rejects_out_of_bounds_tone() {
        assert_eq!(darker(110.0, 2.0), None);
        assert_eq!(darker(-10.0, 2.0), None);
    }

    #[test]
    fn test_darker_unsafe_falls_back_to_black() {
        assert!(darker_unsafe(0.0, 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_realized_ratio_meets_request() {
        let light = lighter(30.0, 4.5);
        assert!(light.is_some());
        if let Some(light) = light {
            assert!(ratio_of_tones(30.0, light) >= 4.5);
        }
        let dark = darker(80.0, 4.5);
        assert!(dark.is_some());
        if let Some(dark) = dark {
            assert!(ratio_of_tones(80.0, dark) >= 4.5);
        }
    }
}
