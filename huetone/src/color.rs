//! Display colors and the conversions between sRGB, XYZ, Lab, and L*.
//!
//! Colors enter and leave the crate as packed 32-bit ARGB values with an
//! opaque alpha channel. Everything in between works on linear-light
//! channels scaled to 0..100 so that Y coincides with relative luminance.

use crate::math::matrix_multiply;

/// A color packed as 0xAARRGGBB. Alpha is always 0xFF for colors produced
/// by this crate.
pub type Argb = u32;

/// The D65 white point used by every conversion in this crate.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// Alpha channel of `argb`, 0..=255.
#[inline]
pub fn alpha_of(argb: Argb) -> u8 {
    ((argb & 0xff00_0000) >> 24) as u8
}

/// Red channel of `argb`, 0..=255.
#[inline]
pub fn red_of(argb: Argb) -> u8 {
    ((argb & 0x00ff_0000) >> 16) as u8
}

/// Green channel of `argb`, 0..=255.
#[inline]
pub fn green_of(argb: Argb) -> u8 {
    ((argb & 0x0000_ff00) >> 8) as u8
}

/// Blue channel of `argb`, 0..=255.
#[inline]
pub fn blue_of(argb: Argb) -> u8 {
    (argb & 0x0000_00ff) as u8
}

/// Whether the alpha channel is fully opaque.
#[inline]
pub fn is_opaque(argb: Argb) -> bool {
    alpha_of(argb) == 255
}

/// Packs three 0..=255 channels into an opaque ARGB value.
#[inline]
pub const fn argb_from_rgb(red: u8, green: u8, blue: u8) -> Argb {
    0xff00_0000 | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Converts a linear-light channel (0..100) to an 8-bit sRGB channel.
pub fn delinearized(rgb_component: f64) -> u8 {
    let normalized = rgb_component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    (delinearized * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts an 8-bit sRGB channel to linear light, scaled to 0..100.
pub fn linearized(rgb_component: u8) -> f64 {
    let normalized = rgb_component as f64 / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Packs linear-light RGB (each 0..100) into an opaque ARGB value.
pub fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    argb_from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// XYZ coordinates of `argb` under D65.
pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    let r = linearized(red_of(argb));
    let g = linearized(green_of(argb));
    let b = linearized(blue_of(argb));
    matrix_multiply([r, g, b], &SRGB_TO_XYZ)
}

/// L* (perceptual lightness, 0..100) of `argb`.
pub fn lstar_from_argb(argb: Argb) -> f64 {
    let y = 0.2126 * linearized(red_of(argb))
        + 0.7152 * linearized(green_of(argb))
        + 0.0722 * linearized(blue_of(argb));
    lstar_from_y(y)
}

/// Relative luminance Y (0..100) of an L* value.
pub fn y_from_lstar(lstar: f64) -> f64 {
    const KE: f64 = 8.0;
    if lstar > KE {
        let cube_root = (lstar + 16.0) / 116.0;
        cube_root * cube_root * cube_root * 100.0
    } else {
        lstar / (24389.0 / 27.0) * 100.0
    }
}

/// L* of a relative luminance Y (0..100).
pub fn lstar_from_y(y: f64) -> f64 {
    const E: f64 = 216.0 / 24389.0;
    let y_normalized = y / 100.0;
    if y_normalized <= E {
        (24389.0 / 27.0) * y_normalized
    } else {
        116.0 * y_normalized.powf(1.0 / 3.0) - 16.0
    }
}

/// The gray with the given L*.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    argb_from_rgb(component, component, component)
}

/// CIE Lab coordinates under D65. Used by the temperature analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

pub(crate) fn lab_from_argb(argb: Argb) -> Lab {
    const E: f64 = 216.0 / 24389.0;
    const KAPPA: f64 = 24389.0 / 27.0;

    let [x, y, z] = xyz_from_argb(argb);
    let f = |normalized: f64| {
        if normalized > E {
            normalized.powf(1.0 / 3.0)
        } else {
            (KAPPA * normalized + 16.0) / 116.0
        }
    };
    let fx = f(x / WHITE_POINT_D65[0]);
    let fy = f(y / WHITE_POINT_D65[1]);
    let fz = f(z / WHITE_POINT_D65[2]);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}
