//! The HCT color space: hue, chroma, and tone.
//!
//! HCT pairs the hue and chroma of CAM16 with the L* lightness axis of
//! L*a*b*, called tone. CAM16 describes how a color actually appears;
//! L* is the scale contrast ratios are defined over. Combining them
//! yields a color system that is both perceptually accurate and able to
//! guarantee legible contrast.

pub mod cam16;
pub(crate) mod solver;
pub mod viewing_conditions;

use crate::color::{self, Argb};
use cam16::Cam16;
use viewing_conditions::ViewingConditions;

/// A color expressed by hue, chroma, and tone.
///
/// Not every requested triple is displayable in sRGB. Construction
/// gamut-maps to the closest displayable color, holding hue and tone
/// and reducing chroma as needed, so the accessors report the values
/// actually realized rather than the ones requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Creates a color from hue in degrees (sanitized into [0, 360)),
    /// chroma (the realized chroma may be lower; its ceiling varies by
    /// hue and tone), and tone in [0, 100].
    pub fn from(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solver::solve_to_argb(hue, chroma, tone))
    }

    /// Measures the hue, chroma, and tone of an sRGB color.
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Hct {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: color::lstar_from_argb(argb),
            argb,
        }
    }

    /// Hue in degrees, in [0, 360).
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Chroma; 0 is gray and the displayable maximum depends on hue
    /// and tone.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Tone, the L* lightness, in [0, 100].
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// The sRGB color this value resolves to.
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// This color with a different hue. Chroma may shrink if the new
    /// hue supports less of it at this tone.
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::from(hue, self.chroma, self.tone)
    }

    /// This color with a different chroma, capped by what the hue and
    /// tone can display.
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::from(self.hue, chroma, self.tone)
    }

    /// This color with a different tone. Chroma may shrink if the new
    /// tone supports less of it at this hue.
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::from(self.hue, self.chroma, tone)
    }

    /// Re-renders this color as it would appear under the given
    /// viewing conditions, expressed back in the standard frame.
    ///
    /// Colors shift in appearance with their surroundings; this
    /// answers "what standard-frame color looks the way this one does
    /// in `conditions`".
    pub fn in_viewing_conditions(&self, conditions: &ViewingConditions) -> Self {
        let cam = Cam16::from_argb(self.argb);
        let [x, y, z] = cam.xyz_in_viewing_conditions(conditions);
        let recast = Cam16::from_xyz_in(x, y, z, &ViewingConditions::standard());
        Hct::from(recast.hue, recast.chroma, color::lstar_from_y(y))
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}
