//! Dynamic color: scheme-aware color roles.
//!
//! A [`scheme::DynamicScheme`] captures everything known about the
//! rendering context: the source color, the palette variant, dark or
//! light mode, and the user's contrast preference. A
//! [`color::DynamicColor`] is a color role defined as functions of
//! that context rather than a fixed value; asking it for a color runs
//! the contrast constraints against the scheme and returns a tone
//! adjusted for legibility. [`roles`] holds the standard catalog of
//! roles (primary, surface, outline, and the rest).

pub mod color;
pub mod contrast_curve;
pub mod roles;
pub mod scheme;
pub mod tone_delta;
pub mod variant;
