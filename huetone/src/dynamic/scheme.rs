//! Scheme derivation: a seed color, variant, and contrast preference
//! expanded into the palettes every color role draws from.

use thiserror::Error;
use tracing::debug;

use crate::color::Argb;
use crate::dislike::fix_if_disliked;
use crate::dynamic::variant::Variant;
use crate::hct::Hct;
use crate::math::sanitize_degrees;
use crate::palette::TonalPalette;
use crate::temperature::TemperatureCache;

/// Hue breakpoints shared by the vibrant rotation tables.
const VIBRANT_HUES: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS: [f64; 9] =
    [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS: [f64; 9] =
    [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

/// Hue breakpoints shared by the expressive rotation tables.
const EXPRESSIVE_HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

/// Errors from scheme derivation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// A hue breakpoint table and its rotation table differ in length.
    #[error("hue table has {hues} entries but rotation table has {rotations}")]
    RotationLengthMismatch {
        /// Number of hue breakpoints supplied.
        hues: usize,
        /// Number of rotations supplied.
        rotations: usize,
    },
}

/// Everything a [`DynamicColor`](crate::dynamic::color::DynamicColor)
/// may depend on when resolving to a concrete color.
///
/// A scheme is immutable once built; construct one with
/// [`DynamicSchemeBuilder`]. The six palettes are fully determined by
/// the seed color and variant, while `is_dark` and `contrast_level`
/// steer tone resolution later.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicScheme {
    source_color_hct: Hct,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    primary_palette: TonalPalette,
    secondary_palette: TonalPalette,
    tertiary_palette: TonalPalette,
    neutral_palette: TonalPalette,
    neutral_variant_palette: TonalPalette,
    error_palette: TonalPalette,
}

impl DynamicScheme {
    pub(crate) fn new(
        source_color_hct: Hct,
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
        palettes: [TonalPalette; 5],
        error_palette: TonalPalette,
    ) -> Self {
        let [primary, secondary, tertiary, neutral, neutral_variant] = palettes;
        Self {
            source_color_hct,
            variant,
            is_dark,
            contrast_level,
            primary_palette: primary,
            secondary_palette: secondary,
            tertiary_palette: tertiary,
            neutral_palette: neutral,
            neutral_variant_palette: neutral_variant,
            error_palette,
        }
    }

    /// The seed color the scheme was derived from.
    pub fn source_color_hct(&self) -> Hct {
        self.source_color_hct
    }

    /// The seed color as ARGB.
    pub fn source_color_argb(&self) -> Argb {
        self.source_color_hct.to_argb()
    }

    /// The palette derivation strategy in effect.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether roles resolve against dark-mode tones.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// The user's contrast preference in [-1, 1]; 0 is standard.
    pub fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    /// Palette for primary accent roles.
    pub fn primary_palette(&self) -> &TonalPalette {
        &self.primary_palette
    }

    /// Palette for secondary accent roles.
    pub fn secondary_palette(&self) -> &TonalPalette {
        &self.secondary_palette
    }

    /// Palette for tertiary accent roles.
    pub fn tertiary_palette(&self) -> &TonalPalette {
        &self.tertiary_palette
    }

    /// Palette for surfaces and backgrounds.
    pub fn neutral_palette(&self) -> &TonalPalette {
        &self.neutral_palette
    }

    /// Palette for outlines and surface variants.
    pub fn neutral_variant_palette(&self) -> &TonalPalette {
        &self.neutral_variant_palette
    }

    /// Palette for error roles; the same red family in every scheme.
    pub fn error_palette(&self) -> &TonalPalette {
        &self.error_palette
    }

    /// Rotates the source hue by the rotation assigned to its segment
    /// of the hue circle.
    ///
    /// `hues` lists segment breakpoints in ascending order and
    /// `rotations[i]` applies to hues in `[hues[i], hues[i + 1])`. A
    /// single-entry rotation table applies unconditionally. A source
    /// hue outside every segment is returned unrotated.
    pub fn rotated_hue(
        source_color_hct: Hct,
        hues: &[f64],
        rotations: &[f64],
    ) -> Result<f64, SchemeError> {
        if hues.len() != rotations.len() {
            return Err(SchemeError::RotationLengthMismatch {
                hues: hues.len(),
                rotations: rotations.len(),
            });
        }
        let source_hue = source_color_hct.hue();
        if rotations.len() == 1 {
            return Ok(sanitize_degrees(source_hue + rotations[0]));
        }
        for i in 0..hues.len().saturating_sub(1) {
            if hues[i] <= source_hue && source_hue < hues[i + 1] {
                return Ok(sanitize_degrees(source_hue + rotations[i]));
            }
        }
        Ok(source_hue)
    }
}

/// Builds a [`DynamicScheme`] from a seed color and settings.
///
/// Unset fields fall back to the baseline seed `0xFF6750A4`,
/// [`Variant::TonalSpot`], light mode, and standard contrast. Each
/// palette the variant would derive can be overridden individually.
///
/// ```
/// use huetone::{DynamicSchemeBuilder, Hct, Variant};
///
/// let scheme = DynamicSchemeBuilder::default()
///     .source_color_hct(Hct::from_argb(0xFF0000FF))
///     .variant(Variant::Vibrant)
///     .is_dark(true)
///     .build();
/// assert!(scheme.is_dark());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicSchemeBuilder {
    source_color_hct: Option<Hct>,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    primary_palette: Option<TonalPalette>,
    secondary_palette: Option<TonalPalette>,
    tertiary_palette: Option<TonalPalette>,
    neutral_palette: Option<TonalPalette>,
    neutral_variant_palette: Option<TonalPalette>,
    error_palette: Option<TonalPalette>,
}

impl DynamicSchemeBuilder {
    /// Sets the seed color.
    pub fn source_color_hct(mut self, source_color_hct: Hct) -> Self {
        self.source_color_hct = Some(source_color_hct);
        self
    }

    /// Sets the palette derivation strategy.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Selects dark or light mode.
    pub fn is_dark(mut self, is_dark: bool) -> Self {
        self.is_dark = is_dark;
        self
    }

    /// Sets the contrast preference, from -1 (reduced) to 1 (maximum).
    pub fn contrast_level(mut self, contrast_level: f64) -> Self {
        self.contrast_level = contrast_level;
        self
    }

    /// Replaces the derived primary palette.
    pub fn primary_palette(mut self, palette: TonalPalette) -> Self {
        self.primary_palette = Some(palette);
        self
    }

    /// Replaces the derived secondary palette.
    pub fn secondary_palette(mut self, palette: TonalPalette) -> Self {
        self.secondary_palette = Some(palette);
        self
    }

    /// Replaces the derived tertiary palette.
    pub fn tertiary_palette(mut self, palette: TonalPalette) -> Self {
        self.tertiary_palette = Some(palette);
        self
    }

    /// Replaces the derived neutral palette.
    pub fn neutral_palette(mut self, palette: TonalPalette) -> Self {
        self.neutral_palette = Some(palette);
        self
    }

    /// Replaces the derived neutral variant palette.
    pub fn neutral_variant_palette(mut self, palette: TonalPalette) -> Self {
        self.neutral_variant_palette = Some(palette);
        self
    }

    /// Replaces the standard error palette.
    pub fn error_palette(mut self, palette: TonalPalette) -> Self {
        self.error_palette = Some(palette);
        self
    }

    /// Derives the palettes and produces the scheme.
    pub fn build(self) -> DynamicScheme {
        let source = self
            .source_color_hct
            .unwrap_or_else(|| Hct::from_argb(0xff6750a4));
        let [primary, secondary, tertiary, neutral, neutral_variant] =
            palettes_of(self.variant, source);
        debug!(
            "Derived {:?} palettes from seed {:#010x}, dark={}, contrast={}",
            self.variant,
            source.to_argb(),
            self.is_dark,
            self.contrast_level
        );
        DynamicScheme::new(
            source,
            self.variant,
            self.is_dark,
            self.contrast_level,
            [
                self.primary_palette.unwrap_or(primary),
                self.secondary_palette.unwrap_or(secondary),
                self.tertiary_palette.unwrap_or(tertiary),
                self.neutral_palette.unwrap_or(neutral),
                self.neutral_variant_palette.unwrap_or(neutral_variant),
            ],
            self.error_palette
                .unwrap_or_else(|| TonalPalette::new(25.0, 84.0)),
        )
    }
}

/// Primary, secondary, tertiary, neutral, and neutral variant palettes
/// for a variant and seed, in that order.
fn palettes_of(variant: Variant, source: Hct) -> [TonalPalette; 5] {
    let hue = source.hue();
    let chroma = source.chroma();
    match variant {
        Variant::Monochrome => [
            TonalPalette::new(hue, 0.0),
            TonalPalette::new(hue, 0.0),
            TonalPalette::new(hue, 0.0),
            TonalPalette::new(hue, 0.0),
            TonalPalette::new(hue, 0.0),
        ],
        Variant::Neutral => [
            TonalPalette::new(hue, 12.0),
            TonalPalette::new(hue, 8.0),
            TonalPalette::new(hue, 16.0),
            TonalPalette::new(hue, 2.0),
            TonalPalette::new(hue, 2.0),
        ],
        Variant::TonalSpot => [
            TonalPalette::new(hue, 36.0),
            TonalPalette::new(hue, 16.0),
            TonalPalette::new(sanitize_degrees(hue + 60.0), 24.0),
            TonalPalette::new(hue, 6.0),
            TonalPalette::new(hue, 8.0),
        ],
        Variant::Vibrant => {
            let secondary_hue =
                DynamicScheme::rotated_hue(source, &VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS)
                    .expect("rotation tables must match the hue table length");
            let tertiary_hue =
                DynamicScheme::rotated_hue(source, &VIBRANT_HUES, &VIBRANT_TERTIARY_ROTATIONS)
                    .expect("rotation tables must match the hue table length");
            [
                TonalPalette::new(hue, 200.0),
                TonalPalette::new(secondary_hue, 24.0),
                TonalPalette::new(tertiary_hue, 32.0),
                TonalPalette::new(hue, 10.0),
                TonalPalette::new(hue, 12.0),
            ]
        }
        Variant::Expressive => {
            let secondary_hue = DynamicScheme::rotated_hue(
                source,
                &EXPRESSIVE_HUES,
                &EXPRESSIVE_SECONDARY_ROTATIONS,
            )
            .expect("rotation tables must match the hue table length");
            let tertiary_hue = DynamicScheme::rotated_hue(
                source,
                &EXPRESSIVE_HUES,
                &EXPRESSIVE_TERTIARY_ROTATIONS,
            )
            .expect("rotation tables must match the hue table length");
            [
                TonalPalette::new(sanitize_degrees(hue + 240.0), 40.0),
                TonalPalette::new(secondary_hue, 24.0),
                TonalPalette::new(tertiary_hue, 32.0),
                TonalPalette::new(sanitize_degrees(hue + 15.0), 8.0),
                TonalPalette::new(sanitize_degrees(hue + 15.0), 12.0),
            ]
        }
        Variant::Fidelity => {
            let complement = TemperatureCache::new(source).complement();
            content_palettes(hue, chroma, fix_if_disliked(complement))
        }
        Variant::Content => {
            let analogous = TemperatureCache::new(source).analogous(3, 6);
            content_palettes(hue, chroma, fix_if_disliked(analogous[2]))
        }
        Variant::Rainbow => [
            TonalPalette::new(hue, 48.0),
            TonalPalette::new(sanitize_degrees(hue + 60.0), 16.0),
            TonalPalette::new(sanitize_degrees(hue + 120.0), 24.0),
            TonalPalette::new(hue, 0.0),
            TonalPalette::new(hue, 0.0),
        ],
        Variant::FruitSalad => [
            TonalPalette::new(sanitize_degrees(hue - 50.0), 48.0),
            TonalPalette::new(sanitize_degrees(hue - 50.0), 36.0),
            TonalPalette::new(hue, 36.0),
            TonalPalette::new(hue, 10.0),
            TonalPalette::new(hue, 16.0),
        ],
    }
}

/// Palettes for the content variants, which keep the seed's own chroma
/// and take their tertiary from a temperature-derived color.
fn content_palettes(hue: f64, chroma: f64, tertiary: Hct) -> [TonalPalette; 5] {
    [
        TonalPalette::new(hue, chroma),
        TonalPalette::new(hue, (chroma - 32.0).max(chroma * 0.5)),
        TonalPalette::from_hct(tertiary),
        TonalPalette::new(hue, chroma / 8.0),
        TonalPalette::new(hue, chroma / 8.0 + 4.0),
    ]
}
