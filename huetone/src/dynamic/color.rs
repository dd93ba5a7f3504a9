//! Context-dependent color roles and the tone resolution engine.
//!
//! A [`DynamicColor`] does not store a color; it stores functions of a
//! [`DynamicScheme`] that produce one. Resolution starts from the
//! role's declared tone, moves it toward the role's minimum- or
//! maximum-contrast tone according to the scheme's contrast level,
//! clamps the result into the contrast band allowed against the
//! role's background, and finally enforces any tone-delta constraint
//! against a companion role. Every step works in tones (HCT T), where
//! contrast ratios depend on tone alone.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::color::Argb;
use crate::contrast::{darker_unsafe, lighter_unsafe, ratio_of_tones};
use crate::dynamic::scheme::DynamicScheme;
use crate::dynamic::tone_delta::{ToneDeltaConstraint, TonePolarity};
use crate::hct::Hct;
use crate::palette::TonalPalette;

/// A function of the scheme context, shared by the role that owns it.
pub type SchemeFn<T> = Arc<dyn Fn(&DynamicScheme) -> T + Send + Sync>;

type ToneFn = dyn Fn(&DynamicScheme) -> f64 + Send + Sync;
type BackgroundFn = dyn Fn(&DynamicScheme) -> DynamicColor + Send + Sync;
type ConstraintFn = dyn Fn(&DynamicScheme) -> ToneDeltaConstraint + Send + Sync;

/// Resolved colors are memoized per scheme up to this many entries,
/// then the memo is dropped wholesale.
const HCT_MEMO_CAPACITY: usize = 4;

/// A color role: hue, chroma, and tone defined as functions of the
/// scheme, resolved on demand.
///
/// Roles are cheap to clone; clones share the same memo. Construct
/// them with [`DynamicColor::from_palette`].
#[derive(Clone)]
pub struct DynamicColor {
    pub(crate) hue: SchemeFn<f64>,
    pub(crate) chroma: SchemeFn<f64>,
    pub(crate) tone: SchemeFn<f64>,
    pub(crate) background: Option<SchemeFn<DynamicColor>>,
    pub(crate) tone_min_contrast: SchemeFn<f64>,
    pub(crate) tone_max_contrast: SchemeFn<f64>,
    pub(crate) tone_delta_constraint: Option<SchemeFn<ToneDeltaConstraint>>,
    hct_memo: Arc<Mutex<Vec<(DynamicScheme, Hct)>>>,
}

impl DynamicColor {
    /// Creates a role drawing hue and chroma from `palette` and its
    /// standard tone from `tone`.
    ///
    /// `background`, when present, makes the role subject to contrast
    /// requirements against that background. `tone_delta_constraint`
    /// keeps the resolved tone a minimum distance from a companion
    /// role. Minimum- and maximum-contrast tones fall out of these
    /// automatically.
    pub fn from_palette(
        palette: impl Fn(&DynamicScheme) -> TonalPalette + Send + Sync + 'static,
        tone: impl Fn(&DynamicScheme) -> f64 + Send + Sync + 'static,
        background: Option<SchemeFn<DynamicColor>>,
        tone_delta_constraint: Option<SchemeFn<ToneDeltaConstraint>>,
    ) -> Self {
        let palette: SchemeFn<TonalPalette> = Arc::new(palette);
        let tone: SchemeFn<f64> = Arc::new(tone);
        let hue: SchemeFn<f64> = {
            let palette = Arc::clone(&palette);
            Arc::new(move |scheme| (*palette)(scheme).hue())
        };
        let chroma: SchemeFn<f64> = {
            let palette = Arc::clone(&palette);
            Arc::new(move |scheme| (*palette)(scheme).chroma())
        };
        let tone_min_contrast: SchemeFn<f64> = {
            let tone = Arc::clone(&tone);
            let background = background.clone();
            let constraint = tone_delta_constraint.clone();
            Arc::new(move |scheme| {
                tone_min_contrast_default(
                    tone.as_ref(),
                    background.as_deref(),
                    scheme,
                    constraint.as_deref(),
                )
            })
        };
        let tone_max_contrast: SchemeFn<f64> = {
            let tone = Arc::clone(&tone);
            let background = background.clone();
            let constraint = tone_delta_constraint.clone();
            Arc::new(move |scheme| {
                tone_max_contrast_default(
                    tone.as_ref(),
                    background.as_deref(),
                    scheme,
                    constraint.as_deref(),
                )
            })
        };
        Self {
            hue,
            chroma,
            tone,
            background,
            tone_min_contrast,
            tone_max_contrast,
            tone_delta_constraint,
            hct_memo: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Resolves the role against `scheme` as ARGB.
    pub fn get_argb(&self, scheme: &DynamicScheme) -> Argb {
        self.get_hct(scheme).to_argb()
    }

    /// Resolves the role against `scheme`.
    pub fn get_hct(&self, scheme: &DynamicScheme) -> Hct {
        let mut memo = self.hct_memo.lock();
        if let Some((_, cached)) = memo.iter().find(|(cached_scheme, _)| cached_scheme == scheme) {
            return *cached;
        }
        trace!(
            "Memo miss: resolving tone against {:?} scheme, dark={}, contrast={}",
            scheme.variant(),
            scheme.is_dark(),
            scheme.contrast_level()
        );
        let answer = Hct::from(
            (*self.hue)(scheme),
            (*self.chroma)(scheme),
            self.get_tone(scheme),
        );
        if memo.len() > HCT_MEMO_CAPACITY {
            memo.clear();
        }
        memo.push((scheme.clone(), answer));
        answer
    }

    /// The tone the role resolves to under `scheme`, after contrast
    /// adjustment, banding against the background, and tone-delta
    /// enforcement.
    pub fn get_tone(&self, scheme: &DynamicScheme) -> f64 {
        let mut answer = (*self.tone)(scheme);
        let decreasing_contrast = scheme.contrast_level() < 0.0;
        if scheme.contrast_level() != 0.0 {
            let start_tone = (*self.tone)(scheme);
            let end_tone = if decreasing_contrast {
                (*self.tone_min_contrast)(scheme)
            } else {
                (*self.tone_max_contrast)(scheme)
            };
            answer = start_tone + (end_tone - start_tone) * scheme.contrast_level().abs();
        }

        let background = self.background.as_deref().map(|of| of(scheme));
        let mut min_ratio = 1.0;
        let mut max_ratio = 21.0;
        if let Some(background) = &background {
            let background_is_surface = background.background.is_none();
            let standard_ratio =
                ratio_of_tones((*self.tone)(scheme), (*background.tone)(scheme));
            if decreasing_contrast {
                let min_contrast_ratio = ratio_of_tones(
                    (*self.tone_min_contrast)(scheme),
                    (*background.tone_min_contrast)(scheme),
                );
                if !background_is_surface {
                    min_ratio = min_contrast_ratio;
                }
                max_ratio = standard_ratio;
            } else {
                let max_contrast_ratio = ratio_of_tones(
                    (*self.tone_max_contrast)(scheme),
                    (*background.tone_max_contrast)(scheme),
                );
                if !background_is_surface {
                    min_ratio = max_contrast_ratio.min(standard_ratio);
                    max_ratio = max_contrast_ratio.max(standard_ratio);
                }
            }
        }

        calculate_dynamic_tone(
            scheme,
            self.tone.as_ref(),
            &|color| color.get_tone(scheme),
            &|_standard_ratio, _background_tone| answer,
            background,
            self.tone_delta_constraint.as_deref(),
            Some(&|_| min_ratio),
            Some(&|_| max_ratio),
        )
    }
}

/// A role's default tone when the scheme asks for reduced contrast.
fn tone_min_contrast_default(
    tone: &ToneFn,
    background: Option<&BackgroundFn>,
    scheme: &DynamicScheme,
    constraint: Option<&ConstraintFn>,
) -> f64 {
    calculate_dynamic_tone(
        scheme,
        tone,
        &|color| (*color.tone_min_contrast)(scheme),
        &|standard_ratio, background_tone| {
            let mut answer = tone(scheme);
            if standard_ratio >= 7.0 {
                answer = foreground_tone(background_tone, 4.5);
            } else if standard_ratio >= 3.0 {
                answer = foreground_tone(background_tone, 3.0);
            } else if background_has_background(background, scheme) {
                answer = foreground_tone(background_tone, standard_ratio);
            }
            answer
        },
        background.map(|of| of(scheme)),
        constraint,
        None,
        Some(&|standard_ratio| standard_ratio),
    )
}

/// A role's default tone when the scheme asks for maximum contrast.
fn tone_max_contrast_default(
    tone: &ToneFn,
    background: Option<&BackgroundFn>,
    scheme: &DynamicScheme,
    constraint: Option<&ConstraintFn>,
) -> f64 {
    calculate_dynamic_tone(
        scheme,
        tone,
        &|color| (*color.tone_max_contrast)(scheme),
        &|standard_ratio, background_tone| {
            if background_has_background(background, scheme) {
                foreground_tone(background_tone, 7.0)
            } else {
                foreground_tone(background_tone, 7.0_f64.max(standard_ratio))
            }
        },
        background.map(|of| of(scheme)),
        constraint,
        None,
        None,
    )
}

/// Whether the role behind `background` itself sits on a background,
/// as opposed to being a top-level surface.
fn background_has_background(background: Option<&BackgroundFn>, scheme: &DynamicScheme) -> bool {
    match background {
        None => false,
        Some(of) => of(scheme).background.is_some(),
    }
}

/// Core tone resolution shared by standard, minimum-contrast, and
/// maximum-contrast tones.
///
/// `tone_to_judge` selects which tone axis of a companion role to
/// measure against, so each axis stays self-consistent. `desired_tone`
/// proposes a tone given the standard contrast ratio and the judged
/// background tone; the proposal survives only while its ratio stays
/// inside the `min_ratio`..`max_ratio` band, otherwise the tone is
/// re-derived from the band edge.
#[allow(clippy::too_many_arguments)]
fn calculate_dynamic_tone(
    scheme: &DynamicScheme,
    tone_standard: &ToneFn,
    tone_to_judge: &dyn Fn(&DynamicColor) -> f64,
    desired_tone: &dyn Fn(f64, f64) -> f64,
    background: Option<DynamicColor>,
    constraint: Option<&ConstraintFn>,
    min_ratio: Option<&dyn Fn(f64) -> f64>,
    max_ratio: Option<&dyn Fn(f64) -> f64>,
) -> f64 {
    let tone_std = tone_standard(scheme);
    let Some(background) = background else {
        return tone_std;
    };

    let background_tone_std = (*background.tone)(scheme);
    let standard_ratio = ratio_of_tones(tone_std, background_tone_std);
    let background_tone = tone_to_judge(&background);
    let desired = desired_tone(standard_ratio, background_tone);
    let current_ratio = ratio_of_tones(background_tone, desired);
    let min = min_ratio.map_or(1.0, |of| of(standard_ratio));
    let max = max_ratio.map_or(21.0, |of| of(standard_ratio));
    let desired_ratio = current_ratio.clamp(min, max);
    let mut answer = if desired_ratio == current_ratio {
        desired
    } else {
        foreground_tone(background_tone, desired_ratio)
    };

    if background.background.is_none() {
        answer = enable_light_foreground(answer);
    }
    ensure_tone_delta(answer, tone_std, scheme, constraint, tone_to_judge)
}

/// Moves `tone` away from a companion role until the constraint's
/// required delta holds.
fn ensure_tone_delta(
    tone: f64,
    tone_standard: f64,
    scheme: &DynamicScheme,
    constraint: Option<&ConstraintFn>,
    tone_to_distance_from: &dyn Fn(&DynamicColor) -> f64,
) -> f64 {
    let Some(constraint) = constraint else {
        return tone;
    };
    let constraint = constraint(scheme);
    let required_delta = constraint.delta;
    let keep_away_tone = tone_to_distance_from(&constraint.keep_away);
    let delta = (tone - keep_away_tone).abs();
    if delta > required_delta {
        return tone;
    }
    match constraint.keep_away_polarity {
        TonePolarity::Darker => clamp_delta_push(keep_away_tone + required_delta),
        TonePolarity::Lighter => clamp_delta_push(keep_away_tone - required_delta),
        // Nearer and Farther lower to Darker or Lighter before they
        // reach a constraint; any leftover is a free choice of side.
        TonePolarity::NoPreference | TonePolarity::Nearer | TonePolarity::Farther => {
            let keep_away_tone_std = (*constraint.keep_away.tone)(scheme);
            let prefer_lighten = tone_standard > keep_away_tone_std;
            let alter_amount = (delta - required_delta).abs();
            let lighten = if prefer_lighten {
                tone + alter_amount <= 100.0
            } else {
                tone < alter_amount
            };
            if lighten { tone + alter_amount } else { tone - alter_amount }
        }
    }
}

/// Clamps a delta-enforced tone into [0, 100], noting when the
/// required delta cannot be fully honored.
fn clamp_delta_push(tone: f64) -> f64 {
    if !(0.0..=100.0).contains(&tone) {
        warn!("Tone delta pushes to {tone:.1}, outside the tone range; clamping");
        return tone.clamp(0.0, 100.0);
    }
    tone
}

/// The tone on either side of `background_tone` that best reaches
/// `ratio`, preferring the side the background's own tone favors.
pub fn foreground_tone(background_tone: f64, ratio: f64) -> f64 {
    let lighter_tone = lighter_unsafe(background_tone, ratio);
    let darker_tone = darker_unsafe(background_tone, ratio);
    let lighter_ratio = ratio_of_tones(lighter_tone, background_tone);
    let darker_ratio = ratio_of_tones(darker_tone, background_tone);
    if tone_prefers_light_foreground(background_tone) {
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if lighter_ratio >= ratio || lighter_ratio >= darker_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if darker_ratio >= ratio || darker_ratio >= lighter_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

/// Nudges a tone that wants a light foreground but cannot support one
/// down to T49, where light foregrounds work.
pub fn enable_light_foreground(tone: f64) -> f64 {
    if tone_prefers_light_foreground(tone) && !tone_allows_light_foreground(tone) {
        return 49.0;
    }
    tone
}

/// Whether people read text on this tone more comfortably in white.
///
/// True below T60; in that range white foregrounds both measure and
/// feel higher contrast than black ones.
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// Whether the tone is dark enough for a light foreground to reach
/// 4.5:1, which holds up to T49.
pub fn tone_allows_light_foreground(tone: f64) -> bool {
    tone.round() <= 49.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::scheme::DynamicSchemeBuilder;
    use crate::dynamic::variant::Variant;

    fn scheme(is_dark: bool, contrast_level: f64) -> DynamicScheme {
        DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_argb(0xff0000ff))
            .variant(Variant::TonalSpot)
            .is_dark(is_dark)
            .contrast_level(contrast_level)
            .build()
    }

    fn surface_role() -> DynamicColor {
        DynamicColor::from_palette(
            |s: &DynamicScheme| s.neutral_palette().clone(),
            |s: &DynamicScheme| if s.is_dark() { 6.0 } else { 98.0 },
            None,
            None,
        )
    }

    fn text_role() -> DynamicColor {
        DynamicColor::from_palette(
            |s: &DynamicScheme| s.neutral_palette().clone(),
            |s: &DynamicScheme| if s.is_dark() { 90.0 } else { 10.0 },
            Some(Arc::new(|_| surface_role())),
            None,
        )
    }

    #[test]
    fn test_prefers_light_foreground_boundary() {
        assert!(tone_prefers_light_foreground(0.0));
        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(59.5));
        assert!(!tone_prefers_light_foreground(60.0));
        assert!(!tone_prefers_light_foreground(100.0));
    }

    #[test]
    fn test_allows_light_foreground_boundary() {
        assert!(tone_allows_light_foreground(0.0));
        assert!(tone_allows_light_foreground(49.4));
        assert!(!tone_allows_light_foreground(49.5));
        assert!(!tone_allows_light_foreground(50.0));
    }

    #[test]
    fn test_enable_light_foreground_pins_borderline_tones() {
        assert!((enable_light_foreground(55.0) - 49.0).abs() < 1e-12);
        assert!((enable_light_foreground(30.0) - 30.0).abs() < 1e-12);
        assert!((enable_light_foreground(70.0) - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_foreground_tone_picks_the_legible_side() {
        let on_dark = foreground_tone(10.0, 4.5);
        assert!(on_dark > 50.0);
        assert!(ratio_of_tones(10.0, on_dark) >= 4.5);

        let on_light = foreground_tone(90.0, 4.5);
        assert!(on_light < 50.0);
        assert!(ratio_of_tones(90.0, on_light) >= 4.5);
    }

    #[test]
    fn test_standard_tone_passes_through_without_background() {
        let role = surface_role();
        assert!((role.get_tone(&scheme(false, 0.0)) - 98.0).abs() < 1e-9);
        assert!((role.get_tone(&scheme(true, 0.0)) - 6.0).abs() < 1e-9);
        // No background means no contrast adjustment either.
        assert!((role.get_tone(&scheme(false, 1.0)) - 98.0).abs() < 1e-9);
        assert!((role.get_tone(&scheme(false, -1.0)) - 98.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_monotone_in_contrast_level() {
        for is_dark in [false, true] {
            let mut previous = 0.0;
            for contrast_level in [-1.0, -0.5, 0.0, 0.5, 1.0] {
                let scheme = scheme(is_dark, contrast_level);
                let text = text_role().get_tone(&scheme);
                let surface = surface_role().get_tone(&scheme);
                let ratio = ratio_of_tones(text, surface);
                assert!(
                    ratio >= previous - 1e-9,
                    "ratio {ratio} regressed below {previous} at contrast {contrast_level}, dark {is_dark}"
                );
                previous = ratio;
            }
        }
    }

    #[test]
    fn test_resolved_tones_stay_in_range() {
        for variant in [
            Variant::TonalSpot,
            Variant::Monochrome,
            Variant::Fidelity,
            Variant::Vibrant,
        ] {
            for is_dark in [false, true] {
                for contrast_level in [-1.0, -0.5, 0.0, 0.5, 1.0] {
                    let scheme = DynamicSchemeBuilder::default()
                        .source_color_hct(Hct::from_argb(0xff0000ff))
                        .variant(variant)
                        .is_dark(is_dark)
                        .contrast_level(contrast_level)
                        .build();
                    for role in [surface_role(), text_role()] {
                        let tone = role.get_tone(&scheme);
                        assert!((0.0..=100.0).contains(&tone), "tone {tone} out of range");
                    }
                }
            }
        }
    }

    #[test]
    fn test_tone_delta_constraint_pushes_past_required_delta() {
        fn companion() -> DynamicColor {
            DynamicColor::from_palette(
                |s: &DynamicScheme| s.primary_palette().clone(),
                |_| 45.0,
                None,
                None,
            )
        }
        let scheme = scheme(false, 0.0);

        let kept_darker = DynamicColor::from_palette(
            |s: &DynamicScheme| s.primary_palette().clone(),
            |_| 40.0,
            Some(Arc::new(|_| surface_role())),
            Some(Arc::new(|_| {
                ToneDeltaConstraint::new(15.0, companion(), TonePolarity::Darker)
            })),
        );
        assert!((kept_darker.get_tone(&scheme) - 60.0).abs() < 1e-9);

        let kept_lighter = DynamicColor::from_palette(
            |s: &DynamicScheme| s.primary_palette().clone(),
            |_| 40.0,
            Some(Arc::new(|_| surface_role())),
            Some(Arc::new(|_| {
                ToneDeltaConstraint::new(15.0, companion(), TonePolarity::Lighter)
            })),
        );
        assert!((kept_lighter.get_tone(&scheme) - 30.0).abs() < 1e-9);

        let no_preference = DynamicColor::from_palette(
            |s: &DynamicScheme| s.primary_palette().clone(),
            |_| 40.0,
            Some(Arc::new(|_| surface_role())),
            Some(Arc::new(|_| {
                ToneDeltaConstraint::new(15.0, companion(), TonePolarity::NoPreference)
            })),
        );
        assert!((no_preference.get_tone(&scheme) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_satisfied_tone_delta_leaves_tone_alone() {
        fn companion() -> DynamicColor {
            DynamicColor::from_palette(
                |s: &DynamicScheme| s.primary_palette().clone(),
                |_| 90.0,
                None,
                None,
            )
        }
        let role = DynamicColor::from_palette(
            |s: &DynamicScheme| s.primary_palette().clone(),
            |_| 40.0,
            Some(Arc::new(|_| surface_role())),
            Some(Arc::new(|_| {
                ToneDeltaConstraint::new(15.0, companion(), TonePolarity::Darker)
            })),
        );
        assert!((role.get_tone(&scheme(false, 0.0)) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_memoized_resolution_matches_fresh_resolution() {
        let role = text_role();
        let first = scheme(false, 0.0);
        let again = scheme(false, 0.0);
        assert_eq!(role.get_hct(&first), role.get_hct(&again));

        // Push past the memo capacity and confirm values survive the
        // wholesale clear.
        for contrast_level in [-1.0, -0.75, -0.5, -0.25, 0.25, 0.5, 0.75, 1.0] {
            role.get_hct(&scheme(true, contrast_level));
        }
        assert_eq!(role.get_hct(&first), text_role().get_hct(&first));
    }

    #[test]
    fn test_get_argb_is_opaque() {
        let scheme = scheme(true, 0.0);
        for role in [surface_role(), text_role()] {
            assert_eq!(role.get_argb(&scheme) >> 24, 0xff);
        }
    }
}
