//! Tone-delta constraints: minimum tone separation between roles.
//!
//! Accent roles and their containers must stay visually distinct even
//! after contrast adjustment moves their tones around. A
//! [`ToneDeltaPair`] declares the relationship once; the resolution
//! engine consumes it lowered to a per-role [`ToneDeltaConstraint`].

use crate::dynamic::color::DynamicColor;
use crate::dynamic::scheme::DynamicScheme;

/// Which side of a companion role a tone should land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonePolarity {
    /// Either side satisfies the constraint.
    NoPreference,
    /// The companion stays darker than the constrained role.
    Darker,
    /// The companion stays lighter than the constrained role.
    Lighter,
    /// The role closer to the surface tone; resolves to darker in dark
    /// schemes and lighter in light schemes.
    Nearer,
    /// The role farther from the surface tone; the inverse of
    /// [`TonePolarity::Nearer`].
    Farther,
}

/// Requires a role's tone to stay at least `delta` away from
/// `keep_away`'s tone, on the side `keep_away_polarity` names.
#[derive(Clone)]
pub struct ToneDeltaConstraint {
    /// Minimum tone distance to maintain.
    pub delta: f64,
    /// The companion role being kept away from.
    pub keep_away: DynamicColor,
    /// The side of the constrained role `keep_away` belongs on.
    pub keep_away_polarity: TonePolarity,
}

impl ToneDeltaConstraint {
    /// Creates a constraint keeping a role `delta` tones from
    /// `keep_away`.
    pub fn new(delta: f64, keep_away: DynamicColor, keep_away_polarity: TonePolarity) -> Self {
        Self {
            delta,
            keep_away,
            keep_away_polarity,
        }
    }
}

/// A declared tone relationship between two roles, such as a container
/// and the accent sitting on it.
///
/// `polarity` describes `role_a` relative to `role_b`:
/// [`TonePolarity::Nearer`] means `role_a` stays closer to the surface
/// tone than `role_b` does. [`ToneDeltaPair::constraint_for_a`] and
/// [`ToneDeltaPair::constraint_for_b`] lower the pair to the one-sided
/// constraints the engine works with.
#[derive(Clone)]
pub struct ToneDeltaPair {
    role_a: DynamicColor,
    role_b: DynamicColor,
    delta: f64,
    polarity: TonePolarity,
    stay_together: bool,
}

impl ToneDeltaPair {
    /// Creates a pair requiring `delta` tones between `role_a` and
    /// `role_b`.
    pub fn new(
        role_a: DynamicColor,
        role_b: DynamicColor,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together,
        }
    }

    /// The first role of the pair.
    pub fn role_a(&self) -> &DynamicColor {
        &self.role_a
    }

    /// The second role of the pair.
    pub fn role_b(&self) -> &DynamicColor {
        &self.role_b
    }

    /// Minimum tone distance between the two roles.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// How `role_a` sits relative to `role_b`.
    pub fn polarity(&self) -> TonePolarity {
        self.polarity
    }

    /// Whether the roles must keep the delta even when contrast
    /// adjustment would rather move only one of them.
    pub fn stay_together(&self) -> bool {
        self.stay_together
    }

    /// The constraint `role_a` must satisfy under `scheme`.
    pub fn constraint_for_a(&self, scheme: &DynamicScheme) -> ToneDeltaConstraint {
        let polarity = match self.polarity {
            TonePolarity::NoPreference => TonePolarity::NoPreference,
            TonePolarity::Darker => TonePolarity::Lighter,
            TonePolarity::Lighter => TonePolarity::Darker,
            TonePolarity::Nearer => {
                if scheme.is_dark() {
                    TonePolarity::Lighter
                } else {
                    TonePolarity::Darker
                }
            }
            TonePolarity::Farther => {
                if scheme.is_dark() {
                    TonePolarity::Darker
                } else {
                    TonePolarity::Lighter
                }
            }
        };
        ToneDeltaConstraint::new(self.delta, self.role_b.clone(), polarity)
    }

    /// The constraint `role_b` must satisfy under `scheme`.
    pub fn constraint_for_b(&self, scheme: &DynamicScheme) -> ToneDeltaConstraint {
        let polarity = match self.polarity {
            TonePolarity::NoPreference => TonePolarity::NoPreference,
            TonePolarity::Darker => TonePolarity::Darker,
            TonePolarity::Lighter => TonePolarity::Lighter,
            TonePolarity::Nearer => {
                if scheme.is_dark() {
                    TonePolarity::Darker
                } else {
                    TonePolarity::Lighter
                }
            }
            TonePolarity::Farther => {
                if scheme.is_dark() {
                    TonePolarity::Lighter
                } else {
                    TonePolarity::Darker
                }
            }
        };
        ToneDeltaConstraint::new(self.delta, self.role_a.clone(), polarity)
    }
}
