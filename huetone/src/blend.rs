//! Blending colors toward one another.
//!
//! Harmonization shifts a design color's hue partway toward a key
//! color so the two read as related without losing the design color's
//! identity. The underlying interpolation runs in CAM16-UCS, where
//! straight lines are perceptually even.

use crate::color::Argb;
use crate::hct::Hct;
use crate::hct::cam16::Cam16;
use crate::math::{diff_degrees, rotation_direction, sanitize_degrees};

/// Rotates `design_color`'s hue toward `key_color` by half the gap
/// between them, capped at 15 degrees. Chroma and tone are preserved.
pub fn harmonize(design_color: Argb, key_color: Argb) -> Argb {
    let from_hct = Hct::from_argb(design_color);
    let to_hct = Hct::from_argb(key_color);
    let difference_degrees = diff_degrees(from_hct.hue(), to_hct.hue());
    let rotation_degrees = (difference_degrees * 0.5).min(15.0);
    let output_hue = sanitize_degrees(
        from_hct.hue() + rotation_degrees * rotation_direction(from_hct.hue(), to_hct.hue()),
    );
    from_hct.with_hue(output_hue).to_argb()
}

/// Blends hue from one color into another. `amount` in [0, 1] is how
/// much of `to`'s hue flows in; `from`'s chroma and tone are kept.
pub fn hct_hue(from: Argb, to: Argb, amount: f64) -> Argb {
    let ucs = cam16_ucs(from, to, amount);
    let ucs_hct = Hct::from_argb(ucs);
    let from_hct = Hct::from_argb(from);
    from_hct.with_hue(ucs_hct.hue()).to_argb()
}

/// Linear interpolation from `from` to `to` in CAM16-UCS coordinates.
pub fn cam16_ucs(from: Argb, to: Argb, amount: f64) -> Argb {
    let from_cam = Cam16::from_argb(from);
    let to_cam = Cam16::from_argb(to);
    let jstar = from_cam.jstar + (to_cam.jstar - from_cam.jstar) * amount;
    let astar = from_cam.astar + (to_cam.astar - from_cam.astar) * amount;
    let bstar = from_cam.bstar + (to_cam.bstar - from_cam.bstar) * amount;
    Cam16::from_ucs(jstar, astar, bstar).to_argb()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Argb = 0xffff_0000;
    const BLUE: Argb = 0xff00_00ff;
    const GREEN: Argb = 0xff00_ff00;
    const YELLOW: Argb = 0xffff_ff00;

    #[test]
    fn test_harmonize_red() {
        assert_eq!(harmonize(RED, BLUE), 0xfffb_0057);
        assert_eq!(harmonize(RED, GREEN), 0xffd8_5600);
        assert_eq!(harmonize(RED, YELLOW), 0xffd8_5600);
    }

    #[test]
    fn test_harmonize_blue() {
        assert_eq!(harmonize(BLUE, RED), 0xff57_00dc);
        assert_eq!(harmonize(BLUE, YELLOW), 0xff00_47a3);
    }

    #[test]
    fn test_harmonize_green() {
        assert_eq!(harmonize(GREEN, BLUE), 0xff00_fc94);
        assert_eq!(harmonize(GREEN, RED), 0xffb1_f000);
        assert_eq!(harmonize(GREEN, YELLOW), 0xffb1_f000);
    }

    #[test]
    fn test_harmonize_yellow() {
        assert_eq!(harmonize(YELLOW, BLUE), 0xffeb_ffba);
        assert_eq!(harmonize(YELLOW, GREEN), 0xffeb_ffba);
        assert_eq!(harmonize(YELLOW, RED), 0xffff_f6e3);
    }

    #[test]
    fn test_ucs_blend_endpoints() {
        assert_eq!(cam16_ucs(RED, BLUE, 0.0), RED);
        assert_eq!(cam16_ucs(RED, BLUE, 1.0), BLUE);
    }

    #[test]
    fn test_hue_blend_keeps_tone() {
        let blended = hct_hue(RED, BLUE, 0.5);
        let original = Hct::from_argb(RED);
        let result = Hct::from_argb(blended);
        assert!((result.tone() - original.tone()).abs() < 1.5);
    }
}
