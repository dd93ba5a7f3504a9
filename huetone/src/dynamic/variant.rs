//! Palette variants: named strategies for expanding a seed color into
//! scheme palettes.

/// How a scheme derives its palettes from the source color.
///
/// Each variant fixes the hue and chroma recipe for the primary,
/// secondary, tertiary, neutral, and neutral variant palettes. The
/// same seed produces anything from grayscale ([`Variant::Monochrome`])
/// to maximally colorful ([`Variant::Vibrant`]) schemes depending on
/// the variant chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// All palettes are pure grayscale, regardless of the seed's hue.
    Monochrome,
    /// Near-grayscale with a hint of the seed's hue.
    Neutral,
    /// Calm pastels; the default Material You strategy.
    #[default]
    TonalSpot,
    /// Maximum-chroma primary with hue-rotated supporting palettes.
    Vibrant,
    /// A playful theme deliberately detached from the seed's hue.
    Expressive,
    /// Stays true to the seed color even when it costs contrast
    /// headroom; tertiary is the seed's complement.
    Fidelity,
    /// Like [`Variant::Fidelity`], but tertiary is an analogous color
    /// of the seed rather than its complement.
    Content,
    /// Chromatic accents over pure gray neutrals.
    Rainbow,
    /// A playful theme shifted well away from the seed's hue.
    FruitSalad,
}

impl Variant {
    /// Whether palettes keep the seed's own chroma instead of a preset.
    pub fn is_content(self) -> bool {
        matches!(self, Variant::Fidelity | Variant::Content)
    }
}
