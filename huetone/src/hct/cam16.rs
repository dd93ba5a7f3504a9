//! The CAM16 color appearance model.
//!
//! CAM16 describes what a color *looks like* rather than how it is
//! stored: hue, chroma, lightness (J), brightness (Q), colorfulness (M),
//! and saturation (s), all relative to a [`ViewingConditions`] frame. It
//! also projects into CAM16-UCS, a space whose Euclidean distances match
//! perceived color difference, used for blending and distance checks.

use crate::color::{Argb, argb_from_linrgb, xyz_from_argb};
use crate::hct::ViewingConditions;
use crate::math::{sanitize_degrees, signum};

/// A color's appearance under some viewing conditions.
///
/// Immutable once constructed; every coordinate is derived from the
/// source color and the frame together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees, in [0, 360).
    pub hue: f64,
    /// Colorfulness relative to the color's own brightness.
    pub chroma: f64,
    /// Lightness relative to the frame's white.
    pub j: f64,
    /// Absolute brightness.
    pub q: f64,
    /// Absolute colorfulness.
    pub m: f64,
    /// Saturation: colorfulness relative to the color's own brightness,
    /// scaled against the frame.
    pub s: f64,
    /// Lightness coordinate in CAM16-UCS.
    pub jstar: f64,
    /// Red-green coordinate in CAM16-UCS.
    pub astar: f64,
    /// Yellow-blue coordinate in CAM16-UCS.
    pub bstar: f64,
}

impl Cam16 {
    /// The appearance of `argb` under [`ViewingConditions::standard`].
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in(argb, &ViewingConditions::standard())
    }

    /// The appearance of `argb` under the given conditions.
    pub fn from_argb_in(argb: Argb, vc: &ViewingConditions) -> Self {
        let [x, y, z] = xyz_from_argb(argb);
        Self::from_xyz_in(x, y, z, vc)
    }

    /// The appearance of XYZ tristimulus values under the given
    /// conditions.
    pub fn from_xyz_in(x: f64, y: f64, z: f64, vc: &ViewingConditions) -> Self {
        // Cone responses.
        let r_c = 0.401288 * x + 0.650173 * y - 0.051461 * z;
        let g_c = -0.250268 * x + 1.204414 * y + 0.045854 * z;
        let b_c = -0.002079 * x + 0.048952 * y + 0.953127 * z;

        // Discount illuminant and adapt.
        let r_d = vc.rgb_d[0] * r_c;
        let g_d = vc.rgb_d[1] * g_c;
        let b_d = vc.rgb_d[2] * b_c;
        let r_af = (vc.fl * r_d.abs() / 100.0).powf(0.42);
        let g_af = (vc.fl * g_d.abs() / 100.0).powf(0.42);
        let b_af = (vc.fl * b_d.abs() / 100.0).powf(0.42);
        let r_a = signum(r_d) * 400.0 * r_af / (r_af + 27.13);
        let g_a = signum(g_d) * 400.0 * g_af / (g_af + 27.13);
        let b_a = signum(b_d) * 400.0 * b_af / (b_af + 27.13);

        // Opponent axes and auxiliary components.
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.n_c * vc.ncb;
        let t = p1 * (a * a + b * b).sqrt() / (u + 0.305);
        let alpha =
            t.powf(0.9) * (1.64 - 0.29f64.powf(vc.background_y_to_white_point_y)).powf(0.73);

        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (1.0 + 0.0228 * m).ln();
        let astar = mstar * hue_radians.cos();
        let bstar = mstar * hue_radians.sin();

        Cam16 {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Reconstructs the full appearance from UCS coordinates under
    /// [`ViewingConditions::standard`].
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in(jstar, astar, bstar, &ViewingConditions::standard())
    }

    /// Reconstructs the full appearance from UCS coordinates under the
    /// given conditions.
    pub fn from_ucs_in(jstar: f64, astar: f64, bstar: f64, vc: &ViewingConditions) -> Self {
        let m = (astar * astar + bstar * bstar).sqrt();
        let m_2 = ((m * 0.0228).exp() - 1.0) / 0.0228;
        let c = m_2 / vc.fl_root;
        let mut h = bstar.atan2(astar).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);
        Self::from_jch_in(j, c, h, vc)
    }

    fn from_jch_in(j: f64, c: f64, h: f64, vc: &ViewingConditions) -> Self {
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = c * vc.fl_root;
        let alpha = c / (j / 100.0).sqrt();
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();
        let hue_radians = h.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (1.0 + 0.0228 * m).ln();
        Cam16 {
            hue: h,
            chroma: c,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// The display color of this appearance under
    /// [`ViewingConditions::standard`].
    pub fn to_argb(&self) -> Argb {
        self.viewed(&ViewingConditions::standard())
    }

    /// The display color that would produce this appearance under the
    /// given conditions.
    pub fn viewed(&self, vc: &ViewingConditions) -> Argb {
        let [x, y, z] = self.xyz_in_viewing_conditions(vc);

        let r_l = 3.2406 * x - 1.5372 * y - 0.4986 * z;
        let g_l = -0.9689 * x + 1.8758 * y + 0.0415 * z;
        let b_l = 0.0557 * x - 0.2040 * y + 1.0570 * z;
        argb_from_linrgb([r_l, g_l, b_l])
    }

    /// The XYZ tristimulus values this appearance maps to under the
    /// given conditions.
    pub(crate) fn xyz_in_viewing_conditions(&self, vc: &ViewingConditions) -> [f64; 3] {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };
        let t = (alpha
            / (1.64 - 0.29f64.powf(vc.background_y_to_white_point_y)).powf(0.73))
        .powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();

        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = e_hue * (50000.0 / 13.0) * vc.n_c * vc.ncb;
        let p2 = ac / vc.nbb;

        let h_sin = h_rad.sin();
        let h_cos = h_rad.cos();
        let gamma =
            23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let adapted = |component: f64| {
            let base = (27.13 * component.abs() / (400.0 - component.abs())).max(0.0);
            signum(component) * (100.0 / vc.fl) * base.powf(1.0 / 0.42)
        };
        let r_f = adapted(r_a) / vc.rgb_d[0];
        let g_f = adapted(g_a) / vc.rgb_d[1];
        let b_f = adapted(b_a) / vc.rgb_d[2];

        [
            1.86206786 * r_f - 1.01125463 * g_f + 0.14918677 * b_f,
            0.38752654 * r_f + 0.62144744 * g_f - 0.00897398 * b_f,
            -0.01584150 * r_f - 0.03412294 * g_f + 1.04996444 * b_f,
        ]
    }

    /// Perceptual distance to another appearance: ΔE in CAM16-UCS with
    /// the standard 1.41·ΔE'^0.63 correction.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }
}
