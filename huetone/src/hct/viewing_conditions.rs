//! The context a color is seen in, and the coefficients derived from it.
//!
//! CAM16 is parameterized by the conditions a color is viewed under: the
//! white point, how bright the environment is, how light the background
//! is, how distinct the surround is, and whether the eye is assumed to
//! fully discount the illuminant. All of the model's per-conversion math
//! depends only on a handful of scalars derived from those inputs, so
//! they are computed once here and reused by every conversion.

use std::sync::LazyLock;

use crate::color::{WHITE_POINT_D65, y_from_lstar};
use crate::math::lerp;

/// Precomputed coefficients describing one viewing environment.
///
/// Construct with [`ViewingConditions::new`], or use
/// [`ViewingConditions::standard`] for the sRGB frame every default
/// conversion in this crate assumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    pub(crate) adapting_luminance: f64,
    pub(crate) background_lstar: f64,
    pub(crate) surround: f64,
    pub(crate) discounting_illuminant: bool,
    pub(crate) background_y_to_white_point_y: f64,
    pub(crate) aw: f64,
    pub(crate) nbb: f64,
    pub(crate) ncb: f64,
    pub(crate) c: f64,
    pub(crate) n_c: f64,
    pub(crate) fl: f64,
    pub(crate) fl_root: f64,
    pub(crate) z: f64,
    pub(crate) white_point: [f64; 3],
    pub(crate) rgb_d: [f64; 3],
}

static STANDARD: LazyLock<ViewingConditions> = LazyLock::new(|| {
    ViewingConditions::new(
        WHITE_POINT_D65,
        200.0 / std::f64::consts::PI * y_from_lstar(50.0) / 100.0,
        50.0,
        2.0,
        false,
    )
});

impl ViewingConditions {
    /// Derives the full coefficient set from the raw environment
    /// description.
    ///
    /// `adapting_luminance` is in cd/m²; non-positive values select the
    /// standard frame's luminance. `background_lstar` below 30 is lifted
    /// to 30. `surround` ranges from 0 (dark) to 2 (average).
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let adapting_luminance = if adapting_luminance > 0.0 {
            adapting_luminance
        } else {
            200.0 / std::f64::consts::PI * y_from_lstar(50.0) / 100.0
        };
        let background_lstar = background_lstar.max(30.0);
        let rgb_w = [
            0.401288 * white_point[0] + 0.650173 * white_point[1] - 0.051461 * white_point[2],
            -0.250268 * white_point[0] + 1.204414 * white_point[1] + 0.045854 * white_point[2],
            -0.002079 * white_point[0] + 0.048952 * white_point[1] + 0.953127 * white_point[2],
        ];
        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let n_c = f;
        let rgb_d = [
            d * (100.0 / rgb_w[0]) + 1.0 - d,
            d * (100.0 / rgb_w[1]) + 1.0 - d,
            d * (100.0 / rgb_w[2]) + 1.0 - d,
        ];
        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance
            + 0.1 * k4f * k4f * (5.0 * adapting_luminance).powf(1.0 / 3.0);
        let fl_root = fl.powf(0.25);
        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;
        let rgb_a_factors = [
            (fl * rgb_d[0] * rgb_w[0] / 100.0).powf(0.42),
            (fl * rgb_d[1] * rgb_w[1] / 100.0).powf(0.42),
            (fl * rgb_d[2] * rgb_w[2] / 100.0).powf(0.42),
        ];
        let rgb_a = [
            400.0 * rgb_a_factors[0] / (rgb_a_factors[0] + 27.13),
            400.0 * rgb_a_factors[1] / (rgb_a_factors[1] + 27.13),
            400.0 * rgb_a_factors[2] / (rgb_a_factors[2] + 27.13),
        ];
        let aw = (40.0 * rgb_a[0] + 20.0 * rgb_a[1] + rgb_a[2]) / 20.0 * nbb;

        ViewingConditions {
            adapting_luminance,
            background_lstar,
            surround,
            discounting_illuminant,
            background_y_to_white_point_y: n,
            aw,
            nbb,
            ncb,
            c,
            n_c,
            fl,
            fl_root,
            z,
            white_point,
            rgb_d,
        }
    }

    /// The sRGB frame: D65 white point, ~11.7 cd/m² adapting luminance,
    /// L* 50 background, average surround, no illuminant discounting.
    pub fn standard() -> Self {
        *STANDARD
    }

    /// The sRGB frame with a different background lightness. Used to
    /// re-render colors as they would appear against darker or lighter
    /// surroundings.
    pub fn standard_with_background_lstar(background_lstar: f64) -> Self {
        ViewingConditions::new(WHITE_POINT_D65, -1.0, background_lstar, 2.0, false)
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self::standard()
    }
}
