//! huetone derives complete, contrast-safe color schemes from a single seed color.
//!
//! # HCT
//!
//! Colors are manipulated in HCT, a color space built on the CAM16 appearance
//! model. Hue and chroma describe what a color looks like; tone is CIE L*, which
//! predicts how well two colors will contrast. Any hue/chroma/tone request is
//! mapped to the closest color sRGB can actually display.
//!
//! ```
//! use huetone::Hct;
//!
//! let hct = Hct::from(282.0, 48.0, 55.0);
//! let argb = hct.to_argb();
//! assert_eq!(argb >> 24, 0xFF);
//! ```
//!
//! # Schemes
//!
//! A [`DynamicScheme`] is built from a seed color, a [`Variant`] that decides
//! how the seed is spread across six tonal palettes, a light/dark flag, and a
//! contrast level between -1.0 and 1.0.
//!
//! ```
//! use huetone::{DynamicSchemeBuilder, Hct, Variant};
//!
//! let scheme = DynamicSchemeBuilder::default()
//!     .source_color_hct(Hct::from_argb(0xFF0000FF))
//!     .variant(Variant::Vibrant)
//!     .is_dark(false)
//!     .contrast_level(0.5)
//!     .build();
//! assert!(!scheme.is_dark());
//! ```
//!
//! # Color roles
//!
//! [`MaterialDynamicColors`] names every role a themed interface needs. A role
//! resolves to a different color per scheme: the tone assignments shift with
//! the mode and the contrast level, while contrast between a role and its
//! background is always preserved.
//!
//! ```
//! use huetone::{DynamicSchemeBuilder, Hct, MaterialDynamicColors, Variant};
//!
//! let scheme = DynamicSchemeBuilder::default()
//!     .source_color_hct(Hct::from_argb(0xFF0000FF))
//!     .variant(Variant::TonalSpot)
//!     .is_dark(true)
//!     .build();
//! let primary = MaterialDynamicColors::new().primary().get_argb(&scheme);
//! assert_eq!(primary, 0xFFBEC2FF);
//! ```
//!
//! # Supporting utilities
//!
//! The [`blend`] module shifts colors toward a theme, [`contrast`] measures and
//! searches tones by WCAG ratio, [`dislike`] detects universally disliked
//! colors, and [`temperature`] finds complementary and analogous colors.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod blend;
pub mod color;
pub mod contrast;
pub mod dislike;
pub mod dynamic;
pub mod hct;
mod math;
pub mod palette;
pub mod temperature;

pub use crate::{
    color::Argb,
    dynamic::{
        color::DynamicColor,
        contrast_curve::ContrastCurve,
        roles::MaterialDynamicColors,
        scheme::{DynamicScheme, DynamicSchemeBuilder, SchemeError},
        tone_delta::{ToneDeltaConstraint, ToneDeltaPair, TonePolarity},
        variant::Variant,
    },
    hct::Hct,
    palette::{CorePalette, TonalPalette},
    temperature::TemperatureCache,
};
