//! The standard catalog of color roles.
//!
//! Every role a themed interface needs, from `surface` through
//! `on_tertiary_container`, defined once as [`DynamicColor`]s and
//! resolved against whatever scheme the caller supplies. The catalog
//! encodes the Material tone assignments per role, the monochrome and
//! fidelity variant overrides, and the tone-delta pairing between each
//! accent and its container.

use std::sync::Arc;

use crate::dislike::fix_if_disliked;
use crate::dynamic::color::{
    DynamicColor, enable_light_foreground, foreground_tone, tone_allows_light_foreground,
    tone_prefers_light_foreground,
};
use crate::dynamic::scheme::DynamicScheme;
use crate::dynamic::tone_delta::{ToneDeltaPair, TonePolarity};
use crate::dynamic::variant::Variant;
use crate::hct::Hct;
use crate::hct::viewing_conditions::ViewingConditions;

/// Minimum tone distance between an accent role and its container.
const CONTENT_ACCENT_TONE_DELTA: f64 = 15.0;

fn is_fidelity(scheme: &DynamicScheme) -> bool {
    scheme.variant().is_content()
}

fn is_monochrome(scheme: &DynamicScheme) -> bool {
    scheme.variant() == Variant::Monochrome
}

/// Re-renders `pre_albers` against the scheme's surface lightness and
/// returns the tone it lands on, keeping tones that supported a light
/// foreground from drifting somewhere that cannot.
fn perform_albers(pre_albers: Hct, scheme: &DynamicScheme) -> f64 {
    let conditions = ViewingConditions::standard_with_background_lstar(if scheme.is_dark() {
        30.0
    } else {
        80.0
    });
    let albersd = pre_albers.in_viewing_conditions(&conditions);
    if tone_prefers_light_foreground(pre_albers.tone())
        && !tone_allows_light_foreground(albersd.tone())
    {
        enable_light_foreground(pre_albers.tone())
    } else {
        enable_light_foreground(albersd.tone())
    }
}

/// Walks tones away from `tone` until `chroma` is reachable at this
/// hue, or as close to reachable as the gamut allows.
fn find_desired_chroma_by_tone(
    hue: f64,
    chroma: f64,
    tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut closest_to_chroma = Hct::from(hue, chroma, tone);
    if closest_to_chroma.chroma() < chroma {
        let mut chroma_peak = closest_to_chroma.chroma();
        while closest_to_chroma.chroma() < chroma {
            answer += if by_decreasing_tone { -1.0 } else { 1.0 };
            let potential_solution = Hct::from(hue, chroma, answer);
            if chroma_peak > potential_solution.chroma() {
                break;
            }
            if (potential_solution.chroma() - chroma).abs() < 0.4 {
                break;
            }
            let potential_delta = (potential_solution.chroma() - chroma).abs();
            let current_delta = (closest_to_chroma.chroma() - chroma).abs();
            if potential_delta < current_delta {
                closest_to_chroma = potential_solution;
            }
            chroma_peak = chroma_peak.max(potential_solution.chroma());
        }
    }
    answer
}

/// The lightest surface role in the current mode; the background most
/// foreground roles sit on.
fn highest_surface(scheme: &DynamicScheme) -> DynamicColor {
    if scheme.is_dark() {
        surface_bright()
    } else {
        surface_dim()
    }
}

fn primary_palette_key_color() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| s.primary_palette().key_color().tone(),
        None,
        None,
    )
}

fn secondary_palette_key_color() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| s.secondary_palette().key_color().tone(),
        None,
        None,
    )
}

fn tertiary_palette_key_color() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| s.tertiary_palette().key_color().tone(),
        None,
        None,
    )
}

fn neutral_palette_key_color() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| s.neutral_palette().key_color().tone(),
        None,
        None,
    )
}

fn neutral_variant_palette_key_color() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_variant_palette().clone(),
        |s: &DynamicScheme| s.neutral_variant_palette().key_color().tone(),
        None,
        None,
    )
}

fn background() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 6.0 } else { 98.0 },
        None,
        None,
    )
}

fn on_background() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 90.0 } else { 10.0 },
        Some(Arc::new(|_| background())),
        None,
    )
}

fn surface() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 6.0 } else { 98.0 },
        None,
        None,
    )
}

fn surface_dim() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 6.0 } else { 87.0 },
        None,
        None,
    )
}

fn surface_bright() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 24.0 } else { 98.0 },
        None,
        None,
    )
}

fn surface_container_lowest() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 4.0 } else { 100.0 },
        None,
        None,
    )
}

fn surface_container_low() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 10.0 } else { 96.0 },
        None,
        None,
    )
}

fn surface_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 12.0 } else { 94.0 },
        None,
        None,
    )
}

fn surface_container_high() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 17.0 } else { 92.0 },
        None,
        None,
    )
}

fn surface_container_highest() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 22.0 } else { 90.0 },
        None,
        None,
    )
}

fn on_surface() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 90.0 } else { 10.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn surface_variant() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_variant_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 30.0 } else { 90.0 },
        None,
        None,
    )
}

fn on_surface_variant() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_variant_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 80.0 } else { 30.0 },
        Some(Arc::new(|_| surface_variant())),
        None,
    )
}

fn inverse_surface() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 90.0 } else { 20.0 },
        None,
        None,
    )
}

fn inverse_on_surface() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 20.0 } else { 95.0 },
        Some(Arc::new(|_| inverse_surface())),
        None,
    )
}

fn outline() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_variant_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 60.0 } else { 50.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn outline_variant() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_variant_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 30.0 } else { 80.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn shadow() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |_| 0.0,
        None,
        None,
    )
}

fn scrim() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.neutral_palette().clone(),
        |_| 0.0,
        None,
        None,
    )
}

fn surface_tint() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 80.0 } else { 40.0 },
        None,
        None,
    )
}

fn primary() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 100.0 } else { 0.0 };
            }
            if s.is_dark() { 80.0 } else { 40.0 }
        },
        Some(Arc::new(highest_surface)),
        Some(Arc::new(|s: &DynamicScheme| {
            ToneDeltaPair::new(
                primary_container(),
                primary(),
                CONTENT_ACCENT_TONE_DELTA,
                TonePolarity::Nearer,
                false,
            )
            .constraint_for_b(s)
        })),
    )
}

fn on_primary() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 10.0 } else { 90.0 };
            }
            if s.is_dark() { 20.0 } else { 100.0 }
        },
        Some(Arc::new(|_| primary())),
        None,
    )
}

fn primary_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_fidelity(s) {
                return perform_albers(s.source_color_hct(), s);
            }
            if is_monochrome(s) {
                return if s.is_dark() { 85.0 } else { 25.0 };
            }
            if s.is_dark() { 30.0 } else { 90.0 }
        },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn on_primary_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_fidelity(s) {
                return foreground_tone((*primary_container().tone)(s), 4.5);
            }
            if is_monochrome(s) {
                return if s.is_dark() { 0.0 } else { 100.0 };
            }
            if s.is_dark() { 90.0 } else { 10.0 }
        },
        Some(Arc::new(|_| primary_container())),
        None,
    )
}

fn inverse_primary() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 40.0 } else { 80.0 },
        Some(Arc::new(|_| inverse_surface())),
        None,
    )
}

fn secondary() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 80.0 } else { 40.0 },
        Some(Arc::new(highest_surface)),
        Some(Arc::new(|s: &DynamicScheme| {
            ToneDeltaPair::new(
                secondary_container(),
                secondary(),
                CONTENT_ACCENT_TONE_DELTA,
                TonePolarity::Nearer,
                false,
            )
            .constraint_for_b(s)
        })),
    )
}

fn on_secondary() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 10.0 } else { 100.0 };
            }
            if s.is_dark() { 20.0 } else { 100.0 }
        },
        Some(Arc::new(|_| secondary())),
        None,
    )
}

fn secondary_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| {
            let initial_tone = if s.is_dark() { 30.0 } else { 90.0 };
            if is_monochrome(s) {
                return if s.is_dark() { 30.0 } else { 85.0 };
            }
            if !is_fidelity(s) {
                return initial_tone;
            }
            let answer = find_desired_chroma_by_tone(
                s.secondary_palette().hue(),
                s.secondary_palette().chroma(),
                initial_tone,
                !s.is_dark(),
            );
            perform_albers(
                Hct::from(
                    s.secondary_palette().hue(),
                    s.secondary_palette().chroma(),
                    answer,
                ),
                s,
            )
        },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn on_secondary_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| {
            if !is_fidelity(s) {
                return if s.is_dark() { 90.0 } else { 10.0 };
            }
            foreground_tone((*secondary_container().tone)(s), 4.5)
        },
        Some(Arc::new(|_| secondary_container())),
        None,
    )
}

fn tertiary() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 90.0 } else { 25.0 };
            }
            if s.is_dark() { 80.0 } else { 40.0 }
        },
        Some(Arc::new(highest_surface)),
        Some(Arc::new(|s: &DynamicScheme| {
            ToneDeltaPair::new(
                tertiary_container(),
                tertiary(),
                CONTENT_ACCENT_TONE_DELTA,
                TonePolarity::Nearer,
                false,
            )
            .constraint_for_b(s)
        })),
    )
}

fn on_tertiary() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 10.0 } else { 90.0 };
            }
            if s.is_dark() { 20.0 } else { 100.0 }
        },
        Some(Arc::new(|_| tertiary())),
        None,
    )
}

fn tertiary_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 60.0 } else { 49.0 };
            }
            if !is_fidelity(s) {
                return if s.is_dark() { 30.0 } else { 90.0 };
            }
            let albers_tone = perform_albers(
                Hct::from_argb(s.tertiary_palette().tone(s.source_color_hct().tone())),
                s,
            );
            let proposed = Hct::from_argb(s.tertiary_palette().tone(albers_tone));
            fix_if_disliked(proposed).tone()
        },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn on_tertiary_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 0.0 } else { 100.0 };
            }
            if !is_fidelity(s) {
                return if s.is_dark() { 90.0 } else { 10.0 };
            }
            foreground_tone((*tertiary_container().tone)(s), 4.5)
        },
        Some(Arc::new(|_| tertiary_container())),
        None,
    )
}

fn error() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.error_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 80.0 } else { 40.0 },
        Some(Arc::new(highest_surface)),
        Some(Arc::new(|s: &DynamicScheme| {
            ToneDeltaPair::new(
                error_container(),
                error(),
                CONTENT_ACCENT_TONE_DELTA,
                TonePolarity::Nearer,
                false,
            )
            .constraint_for_b(s)
        })),
    )
}

fn on_error() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.error_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 20.0 } else { 100.0 },
        Some(Arc::new(|_| error())),
        None,
    )
}

fn error_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.error_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 30.0 } else { 90.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn on_error_container() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.error_palette().clone(),
        |s: &DynamicScheme| if s.is_dark() { 90.0 } else { 10.0 },
        Some(Arc::new(|_| error_container())),
        None,
    )
}

fn primary_fixed() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 100.0 } else { 10.0 };
            }
            90.0
        },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn primary_fixed_dim() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 90.0 } else { 20.0 };
            }
            80.0
        },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn on_primary_fixed() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 10.0 } else { 90.0 };
            }
            10.0
        },
        Some(Arc::new(|_| primary_fixed_dim())),
        None,
    )
}

fn on_primary_fixed_variant() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.primary_palette().clone(),
        |s: &DynamicScheme| {
            if is_monochrome(s) {
                return if s.is_dark() { 30.0 } else { 70.0 };
            }
            30.0
        },
        Some(Arc::new(|_| primary_fixed_dim())),
        None,
    )
}

fn secondary_fixed() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| if is_monochrome(s) { 80.0 } else { 90.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn secondary_fixed_dim() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| if is_monochrome(s) { 70.0 } else { 80.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn on_secondary_fixed() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |_| 10.0,
        Some(Arc::new(|_| secondary_fixed_dim())),
        None,
    )
}

fn on_secondary_fixed_variant() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.secondary_palette().clone(),
        |s: &DynamicScheme| if is_monochrome(s) { 25.0 } else { 30.0 },
        Some(Arc::new(|_| secondary_fixed_dim())),
        None,
    )
}

fn tertiary_fixed() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| if is_monochrome(s) { 40.0 } else { 90.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn tertiary_fixed_dim() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| if is_monochrome(s) { 30.0 } else { 80.0 },
        Some(Arc::new(highest_surface)),
        None,
    )
}

fn on_tertiary_fixed() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| if is_monochrome(s) { 90.0 } else { 10.0 },
        Some(Arc::new(|_| tertiary_fixed_dim())),
        None,
    )
}

fn on_tertiary_fixed_variant() -> DynamicColor {
    DynamicColor::from_palette(
        |s: &DynamicScheme| s.tertiary_palette().clone(),
        |s: &DynamicScheme| if is_monochrome(s) { 70.0 } else { 30.0 },
        Some(Arc::new(|_| tertiary_fixed_dim())),
        None,
    )
}

/// The full set of named color roles.
///
/// Stateless; each method returns a fresh role that can be resolved
/// against any number of schemes.
///
/// ```
/// use huetone::{DynamicSchemeBuilder, Hct, MaterialDynamicColors};
///
/// let scheme = DynamicSchemeBuilder::default()
///     .source_color_hct(Hct::from_argb(0xFF0000FF))
///     .build();
/// let colors = MaterialDynamicColors::new();
/// assert_eq!(colors.primary().get_argb(&scheme), 0xFF555992);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialDynamicColors;

impl MaterialDynamicColors {
    /// Creates the catalog.
    pub fn new() -> Self {
        Self
    }

    /// The surface foreground roles sit on in the current mode.
    pub fn highest_surface(&self, scheme: &DynamicScheme) -> DynamicColor {
        highest_surface(scheme)
    }

    /// Representative color of the primary palette.
    pub fn primary_palette_key_color(&self) -> DynamicColor {
        primary_palette_key_color()
    }

    /// Representative color of the secondary palette.
    pub fn secondary_palette_key_color(&self) -> DynamicColor {
        secondary_palette_key_color()
    }

    /// Representative color of the tertiary palette.
    pub fn tertiary_palette_key_color(&self) -> DynamicColor {
        tertiary_palette_key_color()
    }

    /// Representative color of the neutral palette.
    pub fn neutral_palette_key_color(&self) -> DynamicColor {
        neutral_palette_key_color()
    }

    /// Representative color of the neutral variant palette.
    pub fn neutral_variant_palette_key_color(&self) -> DynamicColor {
        neutral_variant_palette_key_color()
    }

    /// The scrollable canvas behind all content.
    pub fn background(&self) -> DynamicColor {
        background()
    }

    /// Text and icons on [`MaterialDynamicColors::background`].
    pub fn on_background(&self) -> DynamicColor {
        on_background()
    }

    /// Default component surface.
    pub fn surface(&self) -> DynamicColor {
        surface()
    }

    /// Dimmest surface in light mode.
    pub fn surface_dim(&self) -> DynamicColor {
        surface_dim()
    }

    /// Brightest surface in dark mode.
    pub fn surface_bright(&self) -> DynamicColor {
        surface_bright()
    }

    /// Lowest-emphasis container surface.
    pub fn surface_container_lowest(&self) -> DynamicColor {
        surface_container_lowest()
    }

    /// Low-emphasis container surface.
    pub fn surface_container_low(&self) -> DynamicColor {
        surface_container_low()
    }

    /// Default container surface.
    pub fn surface_container(&self) -> DynamicColor {
        surface_container()
    }

    /// High-emphasis container surface.
    pub fn surface_container_high(&self) -> DynamicColor {
        surface_container_high()
    }

    /// Highest-emphasis container surface.
    pub fn surface_container_highest(&self) -> DynamicColor {
        surface_container_highest()
    }

    /// Text and icons on surfaces.
    pub fn on_surface(&self) -> DynamicColor {
        on_surface()
    }

    /// Surface tinted with the neutral variant palette.
    pub fn surface_variant(&self) -> DynamicColor {
        surface_variant()
    }

    /// Lower-emphasis text and icons on surfaces.
    pub fn on_surface_variant(&self) -> DynamicColor {
        on_surface_variant()
    }

    /// Surface with inverted lightness, for elements like snackbars.
    pub fn inverse_surface(&self) -> DynamicColor {
        inverse_surface()
    }

    /// Text and icons on [`MaterialDynamicColors::inverse_surface`].
    pub fn inverse_on_surface(&self) -> DynamicColor {
        inverse_on_surface()
    }

    /// Borders and dividers with 3:1 contrast against surfaces.
    pub fn outline(&self) -> DynamicColor {
        outline()
    }

    /// Decorative borders that do not need outline contrast.
    pub fn outline_variant(&self) -> DynamicColor {
        outline_variant()
    }

    /// Shadow color; always black.
    pub fn shadow(&self) -> DynamicColor {
        shadow()
    }

    /// Scrim color; always black.
    pub fn scrim(&self) -> DynamicColor {
        scrim()
    }

    /// Elevation overlay tint.
    pub fn surface_tint(&self) -> DynamicColor {
        surface_tint()
    }

    /// The main accent color.
    pub fn primary(&self) -> DynamicColor {
        primary()
    }

    /// Text and icons on [`MaterialDynamicColors::primary`].
    pub fn on_primary(&self) -> DynamicColor {
        on_primary()
    }

    /// Subdued fill for primary-accented components.
    pub fn primary_container(&self) -> DynamicColor {
        primary_container()
    }

    /// Text and icons on [`MaterialDynamicColors::primary_container`].
    pub fn on_primary_container(&self) -> DynamicColor {
        on_primary_container()
    }

    /// Primary accent against [`MaterialDynamicColors::inverse_surface`].
    pub fn inverse_primary(&self) -> DynamicColor {
        inverse_primary()
    }

    /// Supporting accent color.
    pub fn secondary(&self) -> DynamicColor {
        secondary()
    }

    /// Text and icons on [`MaterialDynamicColors::secondary`].
    pub fn on_secondary(&self) -> DynamicColor {
        on_secondary()
    }

    /// Subdued fill for secondary-accented components.
    pub fn secondary_container(&self) -> DynamicColor {
        secondary_container()
    }

    /// Text and icons on [`MaterialDynamicColors::secondary_container`].
    pub fn on_secondary_container(&self) -> DynamicColor {
        on_secondary_container()
    }

    /// Contrasting accent used sparingly.
    pub fn tertiary(&self) -> DynamicColor {
        tertiary()
    }

    /// Text and icons on [`MaterialDynamicColors::tertiary`].
    pub fn on_tertiary(&self) -> DynamicColor {
        on_tertiary()
    }

    /// Subdued fill for tertiary-accented components.
    pub fn tertiary_container(&self) -> DynamicColor {
        tertiary_container()
    }

    /// Text and icons on [`MaterialDynamicColors::tertiary_container`].
    pub fn on_tertiary_container(&self) -> DynamicColor {
        on_tertiary_container()
    }

    /// Signals errors and destructive actions.
    pub fn error(&self) -> DynamicColor {
        error()
    }

    /// Text and icons on [`MaterialDynamicColors::error`].
    pub fn on_error(&self) -> DynamicColor {
        on_error()
    }

    /// Subdued fill for error states.
    pub fn error_container(&self) -> DynamicColor {
        error_container()
    }

    /// Text and icons on [`MaterialDynamicColors::error_container`].
    pub fn on_error_container(&self) -> DynamicColor {
        on_error_container()
    }

    /// Primary fill that keeps the same tone in light and dark mode.
    pub fn primary_fixed(&self) -> DynamicColor {
        primary_fixed()
    }

    /// Dimmer mode-stable primary fill.
    pub fn primary_fixed_dim(&self) -> DynamicColor {
        primary_fixed_dim()
    }

    /// Text and icons on the fixed primary fills.
    pub fn on_primary_fixed(&self) -> DynamicColor {
        on_primary_fixed()
    }

    /// Lower-emphasis text on the fixed primary fills.
    pub fn on_primary_fixed_variant(&self) -> DynamicColor {
        on_primary_fixed_variant()
    }

    /// Secondary fill that keeps the same tone in light and dark mode.
    pub fn secondary_fixed(&self) -> DynamicColor {
        secondary_fixed()
    }

    /// Dimmer mode-stable secondary fill.
    pub fn secondary_fixed_dim(&self) -> DynamicColor {
        secondary_fixed_dim()
    }

    /// Text and icons on the fixed secondary fills.
    pub fn on_secondary_fixed(&self) -> DynamicColor {
        on_secondary_fixed()
    }

    /// Lower-emphasis text on the fixed secondary fills.
    pub fn on_secondary_fixed_variant(&self) -> DynamicColor {
        on_secondary_fixed_variant()
    }

    /// Tertiary fill that keeps the same tone in light and dark mode.
    pub fn tertiary_fixed(&self) -> DynamicColor {
        tertiary_fixed()
    }

    /// Dimmer mode-stable tertiary fill.
    pub fn tertiary_fixed_dim(&self) -> DynamicColor {
        tertiary_fixed_dim()
    }

    /// Text and icons on the fixed tertiary fills.
    pub fn on_tertiary_fixed(&self) -> DynamicColor {
        on_tertiary_fixed()
    }

    /// Lower-emphasis text on the fixed tertiary fills.
    pub fn on_tertiary_fixed_variant(&self) -> DynamicColor {
        on_tertiary_fixed_variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Argb;
    use crate::dynamic::scheme::DynamicSchemeBuilder;

    const BLUE: Argb = 0xff0000ff;
    const RED: Argb = 0xffff0000;
    const PURPLE: Argb = 0xff850096;

    fn scheme_of(
        source: Argb,
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
    ) -> DynamicScheme {
        DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_argb(source))
            .variant(variant)
            .is_dark(is_dark)
            .contrast_level(contrast_level)
            .build()
    }

    fn triplet(
        source: Argb,
        variant: Variant,
        is_dark: bool,
        role: fn() -> DynamicColor,
    ) -> [Argb; 3] {
        [-1.0, 0.0, 1.0].map(|level| role().get_argb(&scheme_of(source, variant, is_dark, level)))
    }

    #[test]
    fn test_key_color_roles_match_palette_key_colors() {
        let scheme = scheme_of(BLUE, Variant::TonalSpot, false, 0.0);
        assert_eq!(
            primary_palette_key_color().get_argb(&scheme),
            scheme.primary_palette().key_color().to_argb()
        );
        assert_eq!(
            neutral_palette_key_color().get_argb(&scheme),
            scheme.neutral_palette().key_color().to_argb()
        );
    }

    #[test]
    fn test_key_color_roles_ignore_contrast_level() {
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, primary_palette_key_color),
            [0xff6e72ac, 0xff6e72ac, 0xff6e72ac]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, tertiary_palette_key_color),
            [0xff936b84, 0xff936b84, 0xff936b84]
        );
    }

    #[test]
    fn test_tonal_spot_light_accents() {
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, primary),
            [0xff6c70aa, 0xff555992, 0xff181c51]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, primary_container),
            [0xffd5d6ff, 0xffe0e0ff, 0xff3a3e74]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, on_primary_container),
            [0xff555992, 0xff11144b, 0xffffffff]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, on_secondary),
            [0xfffffbff, 0xffffffff, 0xffffffff]
        );
    }

    #[test]
    fn test_tonal_spot_light_surfaces() {
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, surface),
            [0xfffbf8ff, 0xfffbf8ff, 0xfffbf8ff]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, false, on_surface),
            [0xff5f5e65, 0xff1b1b21, 0xff000000]
        );
    }

    #[test]
    fn test_tonal_spot_dark_accents() {
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, primary),
            [0xff888cc8, 0xffbec2ff, 0xfffdf9ff]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, primary_container),
            [0xff31356b, 0xff3e4278, 0xffc4c6ff]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, on_primary_container),
            [0xff9b9fdd, 0xffe0e0ff, 0xff000000]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, on_tertiary_container),
            [0xffc397b2, 0xffffd8ee, 0xff000000]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, on_secondary),
            [0xff27283b, 0xff2e2f42, 0xff000000]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, on_tertiary),
            [0xff3e1f34, 0xff46263b, 0xff000000]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, on_error),
            [0xff5c0003, 0xff690005, 0xff000000]
        );
    }

    #[test]
    fn test_tonal_spot_dark_surfaces() {
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, surface),
            [0xff131318, 0xff131318, 0xff131318]
        );
        assert_eq!(
            triplet(BLUE, Variant::TonalSpot, true, on_surface),
            [0xffa4a2a9, 0xffe4e1e9, 0xffffffff]
        );
    }

    #[test]
    fn test_monochrome_primary_and_surfaces() {
        assert_eq!(
            triplet(BLUE, Variant::Monochrome, false, primary),
            [0xff3c3c3c, 0xff000000, 0xff000000]
        );
        let light = scheme_of(BLUE, Variant::Monochrome, false, 0.0);
        assert_eq!(surface().get_argb(&light), 0xfff9f9f9);
        let dark = scheme_of(BLUE, Variant::Monochrome, true, 0.0);
        assert_eq!(surface().get_argb(&dark), 0xff131313);
    }

    #[test]
    fn test_monochrome_dark_tones() {
        let scheme = scheme_of(BLUE, Variant::Monochrome, true, 0.0);
        let expectations: [(fn() -> DynamicColor, f64); 12] = [
            (primary, 100.0),
            (on_primary, 10.0),
            (primary_container, 85.0),
            (on_primary_container, 0.0),
            (secondary, 80.0),
            (on_secondary, 10.0),
            (secondary_container, 30.0),
            (on_secondary_container, 90.0),
            (tertiary, 90.0),
            (on_tertiary, 10.0),
            (tertiary_container, 60.0),
            (on_tertiary_container, 0.0),
        ];
        for (role, tone) in expectations {
            let got = role().get_hct(&scheme).tone();
            assert!((got - tone).abs() < 1.0, "expected ~{tone}, got {got}");
        }
    }

    #[test]
    fn test_monochrome_light_tones() {
        let scheme = scheme_of(BLUE, Variant::Monochrome, false, 0.0);
        let expectations: [(fn() -> DynamicColor, f64); 12] = [
            (primary, 0.0),
            (on_primary, 90.0),
            (primary_container, 25.0),
            (on_primary_container, 100.0),
            (secondary, 40.0),
            (on_secondary, 100.0),
            (secondary_container, 85.0),
            (on_secondary_container, 10.0),
            (tertiary, 25.0),
            (on_tertiary, 90.0),
            (tertiary_container, 49.0),
            (on_tertiary_container, 100.0),
        ];
        for (role, tone) in expectations {
            let got = role().get_hct(&scheme).tone();
            assert!((got - tone).abs() < 1.0, "expected ~{tone}, got {got}");
        }
    }

    #[test]
    fn test_fidelity_tracks_the_seed() {
        assert_eq!(
            triplet(BLUE, Variant::Fidelity, false, primary),
            [0xff5660ff, 0xff0001c3, 0xff000181]
        );
        assert_eq!(
            triplet(BLUE, Variant::Fidelity, false, tertiary_container),
            [0xffffcdc6, 0xffb31910, 0xff8c0002]
        );
        assert_eq!(
            triplet(PURPLE, Variant::Fidelity, false, tertiary_container),
            [0xffebd982, 0xffbcac5a, 0xff4d4300]
        );
        let dark = scheme_of(BLUE, Variant::Fidelity, true, 0.0);
        assert_eq!(surface().get_argb(&dark), 0xff12121d);
    }

    #[test]
    fn test_content_tertiary_container_stays_analogous() {
        assert_eq!(
            triplet(BLUE, Variant::Content, false, tertiary_container),
            [0xfffac9ff, 0xff9221af, 0xff73008e]
        );
        assert_eq!(
            triplet(PURPLE, Variant::Content, false, tertiary_container),
            [0xffffccd7, 0xffac1b57, 0xff870040]
        );
    }

    #[test]
    fn test_expressive_scheme_colors() {
        assert_eq!(
            triplet(BLUE, Variant::Expressive, false, primary),
            [0xff32835d, 0xff146c48, 0xff002818]
        );
        let light = scheme_of(BLUE, Variant::Expressive, false, 0.0);
        assert_eq!(surface().get_argb(&light), 0xfffdf7ff);
        let dark = scheme_of(BLUE, Variant::Expressive, true, 0.0);
        assert_eq!(surface().get_argb(&dark), 0xff14121a);
    }

    #[test]
    fn test_vibrant_scheme_colors() {
        assert_eq!(
            triplet(BLUE, Variant::Vibrant, false, primary),
            [0xff5660ff, 0xff343dff, 0xff000181]
        );
        let dark = scheme_of(BLUE, Variant::Vibrant, true, 0.0);
        assert_eq!(surface().get_argb(&dark), 0xff12131c);
    }

    #[test]
    fn test_neutral_scheme_colors() {
        assert_eq!(
            triplet(BLUE, Variant::Neutral, false, primary),
            [0xff737383, 0xff5d5d6c, 0xff21212e]
        );
        let light = scheme_of(BLUE, Variant::Neutral, false, 0.0);
        assert_eq!(surface().get_argb(&light), 0xfffcf8fa);
        let dark = scheme_of(BLUE, Variant::Neutral, true, 0.0);
        assert_eq!(surface().get_argb(&dark), 0xff131315);
    }

    #[test]
    fn test_rainbow_scheme_colors() {
        assert_eq!(
            triplet(BLUE, Variant::Rainbow, false, primary),
            [0xff676dc1, 0xff5056a9, 0xff0f136a]
        );
        let light = scheme_of(BLUE, Variant::Rainbow, false, 0.0);
        assert_eq!(surface().get_argb(&light), 0xfff9f9f9);
        assert_eq!(secondary().get_argb(&light), 0xff5c5d72);
        assert_eq!(secondary_container().get_argb(&light), 0xffe1e0f9);
    }

    #[test]
    fn test_fruit_salad_scheme_colors() {
        assert_eq!(
            triplet(BLUE, Variant::FruitSalad, false, primary),
            [0xff007ea7, 0xff006688, 0xff002635]
        );
        let light = scheme_of(BLUE, Variant::FruitSalad, false, 0.0);
        assert_eq!(secondary().get_argb(&light), 0xff196584);
        assert_eq!(secondary_container().get_argb(&light), 0xffc2e8ff);
        let dark = scheme_of(BLUE, Variant::FruitSalad, true, 0.0);
        assert_eq!(secondary_container().get_argb(&dark), 0xff004d67);
    }

    #[test]
    fn test_vibrant_red_half_contrast_sweep() {
        let scheme = scheme_of(RED, Variant::Vibrant, false, 0.5);
        let expectations: [(fn() -> DynamicColor, Argb); 37] = [
            (background, 0xfffff8f6),
            (on_background, 0xff261715),
            (surface, 0xfffff8f6),
            (surface_dim, 0xfff0d4cf),
            (surface_bright, 0xfffff8f6),
            (surface_container_lowest, 0xffffffff),
            (surface_container_low, 0xfffff0ee),
            (surface_container, 0xffffe9e6),
            (surface_container_high, 0xffffe2dd),
            (surface_container_highest, 0xfff9dcd8),
            (on_surface, 0xff261715),
            (surface_variant, 0xfffddbd5),
            (on_surface_variant, 0xff58413d),
            (inverse_surface, 0xff3d2c29),
            (inverse_on_surface, 0xffffedeb),
            (outline, 0xff6f5652),
            (outline_variant, 0xff896e6a),
            (shadow, 0xff000000),
            (scrim, 0xff000000),
            (surface_tint, 0xffc00100),
            (primary, 0xff850100),
            (on_primary, 0xffffc8bf),
            (primary_container, 0xffeb0000),
            (on_primary_container, 0xffffffff),
            (inverse_primary, 0xffffb5a9),
            (secondary, 0xff5c3521),
            (on_secondary, 0xffffcab0),
            (secondary_container, 0xff996952),
            (on_secondary_container, 0xffffffff),
            (tertiary, 0xff5e3506),
            (on_tertiary, 0xffffcb9d),
            (tertiary_container, 0xff9d6937),
            (on_tertiary_container, 0xffffffff),
            (error, 0xff850008),
            (on_error, 0xffffc8c1),
            (error_container, 0xffda342e),
            (on_error_container, 0xffffffff),
        ];
        for (role, expected) in expectations {
            let got = role().get_argb(&scheme);
            assert_eq!(got, expected, "expected {expected:08x}, got {got:08x}");
        }
    }

    #[test]
    fn test_accents_keep_their_distance_from_containers() {
        for variant in [
            Variant::TonalSpot,
            Variant::Vibrant,
            Variant::Fidelity,
            Variant::Content,
        ] {
            for is_dark in [false, true] {
                for contrast_level in [-1.0, 0.0, 1.0] {
                    let scheme = scheme_of(BLUE, variant, is_dark, contrast_level);
                    let pairs: [(fn() -> DynamicColor, fn() -> DynamicColor); 3] = [
                        (primary, primary_container),
                        (secondary, secondary_container),
                        (error, error_container),
                    ];
                    for (accent, container) in pairs {
                        let accent_tone = accent().get_tone(&scheme);
                        let container_tone = container().get_tone(&scheme);
                        assert!(
                            (accent_tone - container_tone).abs() >= CONTENT_ACCENT_TONE_DELTA - 1e-9,
                            "accent {accent_tone} too close to container {container_tone} \
                             for {variant:?}, dark {is_dark}, contrast {contrast_level}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_fixed_roles_are_stable_across_modes() {
        let light = scheme_of(BLUE, Variant::TonalSpot, false, 0.0);
        let dark = scheme_of(BLUE, Variant::TonalSpot, true, 0.0);
        for role in [
            primary_fixed,
            primary_fixed_dim,
            on_primary_fixed,
            secondary_fixed,
            tertiary_fixed_dim,
        ] {
            assert_eq!(role().get_argb(&light), role().get_argb(&dark));
        }
    }

    #[test]
    fn test_catalog_facade_matches_free_constructors() {
        let colors = MaterialDynamicColors::new();
        let scheme = scheme_of(BLUE, Variant::TonalSpot, false, 0.0);
        assert_eq!(colors.primary().get_argb(&scheme), primary().get_argb(&scheme));
        assert_eq!(colors.surface().get_argb(&scheme), surface().get_argb(&scheme));
        assert_eq!(
            colors.highest_surface(&scheme).get_argb(&scheme),
            surface_dim().get_argb(&scheme)
        );
    }
}
