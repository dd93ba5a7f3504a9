//! Tonal palettes: one hue/chroma pair across every tone.
//!
//! A palette answers "this color family, at tone T" for any T in
//! [0, 100], gamut-mapping each request. Palettes are the unit the
//! scheme variants hand to the resolution engine: roles pick a palette
//! and the engine picks the tone.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, OnceLock};

use lru::LruCache;
use parking_lot::Mutex;

use crate::color::Argb;
use crate::hct::cam16::Cam16;
use crate::hct::{Hct, solver};

const TONE_CACHE_CAPACITY: usize = 64;

/// Colors of a single hue and chroma, addressable by tone.
///
/// Cloning is cheap and clones share one solved-tone cache. Equality
/// and hashing consider only the hue and chroma.
#[derive(Clone)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: Arc<OnceLock<Hct>>,
    cache: Arc<Mutex<LruCache<u64, Argb>>>,
}

impl TonalPalette {
    /// A palette of the given hue and chroma.
    pub fn new(hue: f64, chroma: f64) -> Self {
        TonalPalette {
            hue,
            chroma,
            key_color: Arc::new(OnceLock::new()),
            cache: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(TONE_CACHE_CAPACITY)
                    .expect("tone cache capacity must be greater than zero"),
            ))),
        }
    }

    /// A palette of the color's hue and chroma, with the color itself
    /// as the key color.
    pub fn from_hct(hct: Hct) -> Self {
        let palette = Self::new(hct.hue(), hct.chroma());
        let _ = palette.key_color.set(hct);
        palette
    }

    /// The palette's hue, in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// The palette's chroma.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// The color at the given tone.
    pub fn tone(&self, tone: f64) -> Argb {
        let key = tone.to_bits();
        let mut cache = self.cache.lock();
        if let Some(&argb) = cache.get(&key) {
            return argb;
        }
        let argb = solver::solve_to_argb(self.hue, self.chroma, tone);
        cache.put(key, argb);
        argb
    }

    /// The color that best represents this palette: the requested hue
    /// and chroma at the tone where that chroma actually exists.
    /// Computed on first access.
    pub fn key_color(&self) -> Hct {
        *self
            .key_color
            .get_or_init(|| create_key_color(self.hue, self.chroma))
    }
}

/// Finds the tone closest to 50 that delivers the requested chroma.
/// T50 carries the most chroma on average, so the search fans outward
/// from there.
fn create_key_color(hue: f64, chroma: f64) -> Hct {
    let start_tone = 50.0;
    let mut smallest_delta_hct = Hct::from(hue, chroma, start_tone);
    let mut smallest_delta = (smallest_delta_hct.chroma() - chroma).abs();
    let mut delta = 1.0;
    while delta < 50.0 {
        // Rounded comparison, so a request of 16.51 accepts 16.49.
        if chroma.round() == smallest_delta_hct.chroma().round() {
            return smallest_delta_hct;
        }
        let hct_add = Hct::from(hue, chroma, start_tone + delta);
        let add_delta = (hct_add.chroma() - chroma).abs();
        if add_delta < smallest_delta {
            smallest_delta = add_delta;
            smallest_delta_hct = hct_add;
        }
        let hct_subtract = Hct::from(hue, chroma, start_tone - delta);
        let subtract_delta = (hct_subtract.chroma() - chroma).abs();
        if subtract_delta < smallest_delta {
            smallest_delta = subtract_delta;
            smallest_delta_hct = hct_subtract;
        }
        delta += 1.0;
    }
    smallest_delta_hct
}

impl fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonalPalette")
            .field("hue", &self.hue)
            .field("chroma", &self.chroma)
            .finish()
    }
}

impl PartialEq for TonalPalette {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue && self.chroma == other.chroma
    }
}

/// The five standard palettes plus error, derived from a single seed
/// color.
#[derive(Debug, Clone, PartialEq)]
pub struct CorePalette {
    primary: TonalPalette,
    secondary: TonalPalette,
    tertiary: TonalPalette,
    neutral: TonalPalette,
    neutral_variant: TonalPalette,
    error: TonalPalette,
}

impl CorePalette {
    fn new(hue: f64, chroma: f64, is_content: bool) -> Self {
        let (primary, secondary, tertiary, neutral, neutral_variant) = if is_content {
            (
                chroma,
                chroma / 3.0,
                chroma / 2.0,
                (chroma / 12.0).min(4.0),
                (chroma / 6.0).min(8.0),
            )
        } else {
            (chroma.max(48.0), 16.0, 24.0, 4.0, 8.0)
        };
        CorePalette {
            primary: TonalPalette::new(hue, primary),
            secondary: TonalPalette::new(hue, secondary),
            tertiary: TonalPalette::new(hue + 60.0, tertiary),
            neutral: TonalPalette::new(hue, neutral),
            neutral_variant: TonalPalette::new(hue, neutral_variant),
            error: TonalPalette::new(25.0, 84.0),
        }
    }

    /// Palettes for a seed color, boosting low-chroma seeds to a
    /// colorful baseline.
    pub fn of(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self::new(cam.hue, cam.chroma, false)
    }

    /// Palettes for a seed color, preserving the seed's chroma as-is.
    pub fn content_of(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self::new(cam.hue, cam.chroma, true)
    }

    /// The primary palette.
    pub fn primary(&self) -> &TonalPalette {
        &self.primary
    }

    /// The secondary palette.
    pub fn secondary(&self) -> &TonalPalette {
        &self.secondary
    }

    /// The tertiary palette.
    pub fn tertiary(&self) -> &TonalPalette {
        &self.tertiary
    }

    /// The neutral palette.
    pub fn neutral(&self) -> &TonalPalette {
        &self.neutral
    }

    /// The neutral variant palette.
    pub fn neutral_variant(&self) -> &TonalPalette {
        &self.neutral_variant
    }

    /// The error palette.
    pub fn error(&self) -> &TonalPalette {
        &self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tones_of_blue() {
        let hct = Hct::from_argb(0xff00_00ff);
        let tones = TonalPalette::new(hct.hue(), hct.chroma());

        assert_eq!(tones.tone(0.0), 0xff00_0000);
        assert_eq!(tones.tone(10.0), 0xff00_006e);
        assert_eq!(tones.tone(20.0), 0xff00_01ac);
        assert_eq!(tones.tone(30.0), 0xff00_00ef);
        assert_eq!(tones.tone(40.0), 0xff34_3dff);
        assert_eq!(tones.tone(50.0), 0xff5a_64ff);
        assert_eq!(tones.tone(60.0), 0xff7c_84ff);
        assert_eq!(tones.tone(70.0), 0xff9d_a3ff);
        assert_eq!(tones.tone(80.0), 0xffbe_c2ff);
        assert_eq!(tones.tone(90.0), 0xffe0_e0ff);
        assert_eq!(tones.tone(95.0), 0xfff1_efff);
        assert_eq!(tones.tone(99.0), 0xffff_fbff);
        assert_eq!(tones.tone(100.0), 0xffff_ffff);
        assert_eq!(tones.tone(3.0), 0xff00_003c);
    }

    #[test]
    fn test_cached_tone_matches_fresh_solve() {
        let tones = TonalPalette::new(120.0, 40.0);
        let first = tones.tone(42.0);
        let second = tones.tone(42.0);
        assert_eq!(first, second);
        assert_eq!(first, Hct::from(120.0, 40.0, 42.0).to_argb());
    }

    #[test]
    fn test_key_color_with_exact_chroma() {
        let palette = TonalPalette::new(50.0, 60.0);
        let key = palette.key_color();
        assert!((key.hue() - 50.0).abs() < 10.0);
        assert!((key.chroma() - 60.0).abs() < 0.5);
        assert!(key.tone() > 0.0 && key.tone() < 100.0);
    }

    #[test]
    fn test_key_color_with_unreachable_chroma() {
        // Hue 149 peaks near chroma 89.6; a request of 200 settles there.
        let palette = TonalPalette::new(149.0, 200.0);
        let key = palette.key_color();
        assert!((key.hue() - 149.0).abs() < 10.0);
        assert!(key.chroma() > 89.0);
        assert!(key.tone() > 0.0 && key.tone() < 100.0);
    }

    #[test]
    fn test_key_color_with_low_chroma_stays_near_mid_tone() {
        let palette = TonalPalette::new(50.0, 3.0);
        let key = palette.key_color();
        assert!((key.hue() - 50.0).abs() < 10.0);
        assert!((key.chroma() - 3.0).abs() < 0.5);
        assert!((key.tone() - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_equality_ignores_cache_state() {
        let a = TonalPalette::new(282.0, 87.0);
        let b = TonalPalette::new(282.0, 87.0);
        let _ = a.tone(50.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_core_palette_of_blue() {
        let core = CorePalette::of(0xff00_00ff);
        assert_eq!(core.primary().tone(90.0), 0xffe0_e0ff);
        assert_eq!(core.primary().tone(40.0), 0xff34_3dff);
        assert_eq!(core.secondary().tone(90.0), 0xffe1_e0f9);
        assert_eq!(core.secondary().tone(40.0), 0xff5c_5d72);
    }

    #[test]
    fn test_content_core_palette_keeps_seed_chroma() {
        let core = CorePalette::content_of(0xff00_00ff);
        assert_eq!(core.primary().tone(40.0), 0xff34_3dff);
        assert_eq!(core.secondary().tone(80.0), 0xffc1_c3f4);
    }
}
