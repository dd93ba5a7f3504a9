//! Contrast ratios as a function of the user's contrast preference.

use crate::math::lerp;

/// A target contrast ratio that varies with the contrast level.
///
/// Anchored at four points: level -1.0 (lowest legal contrast), 0.0
/// (the default), 0.5 (medium), and 1.0 (highest). Levels in between
/// interpolate linearly between the neighboring anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCurve {
    low: f64,
    normal: f64,
    medium: f64,
    high: f64,
}

impl ContrastCurve {
    /// Creates a curve from its four anchors. Each anchor is the value
    /// at contrast level -1.0, 0.0, 0.5, and 1.0 respectively.
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// The value at `contrast_level`, clamped to the anchors beyond
    /// -1.0 and 1.0. For contrast ratios the result lies in [1, 21].
    pub fn get(&self, contrast_level: f64) -> f64 {
        if contrast_level <= -1.0 {
            self.low
        } else if contrast_level < 0.0 {
            lerp(self.low, self.normal, (contrast_level - (-1.0)) / 1.0)
        } else if contrast_level < 0.5 {
            lerp(self.normal, self.medium, contrast_level / 0.5)
        } else if contrast_level < 1.0 {
            lerp(self.medium, self.high, (contrast_level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors() {
        let curve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
        assert_eq!(curve.get(-1.0), 3.0);
        assert_eq!(curve.get(0.0), 4.5);
        assert_eq!(curve.get(0.5), 7.0);
        assert_eq!(curve.get(1.0), 11.0);
    }

    #[test]
    fn test_clamps_beyond_anchors() {
        let curve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
        assert_eq!(curve.get(-2.0), 3.0);
        assert_eq!(curve.get(2.0), 11.0);
    }

    #[test]
    fn test_interpolates_between_anchors() {
        let curve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
        assert!((curve.get(-0.5) - 3.75).abs() < 1e-9);
        assert!((curve.get(0.25) - 5.75).abs() < 1e-9);
        assert!((curve.get(0.75) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotone_for_increasing_anchors() {
        let curve = ContrastCurve::new(1.0, 3.0, 4.5, 7.0);
        let mut previous = curve.get(-1.0);
        let mut level = -1.0;
        while level <= 1.0 {
            let value = curve.get(level);
            assert!(value >= previous);
            previous = value;
            level += 0.05;
        }
    }
}
