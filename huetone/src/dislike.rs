//! Detection and repair of universally disliked colors.
//!
//! Cross-cultural color-preference research identifies one region
//! people consistently dislike: dark yellow-greens, the colors of
//! biological waste and rotting food. Raising such a color's tone
//! leaves its family intact while moving it out of the disliked zone.

use crate::hct::Hct;

/// Whether the color sits in the universally disliked dark
/// yellow-green region.
pub fn is_disliked(hct: &Hct) -> bool {
    let hue_passes = (90.0..=111.0).contains(&hct.hue().round());
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// Lightens the color to tone 70 if it is disliked, otherwise returns
/// it unchanged.
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::from(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}
