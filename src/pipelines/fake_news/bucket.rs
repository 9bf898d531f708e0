use std::fmt;

use serde::{Deserialize, Serialize};

/// The five mutually exclusive classification labels, ordered from most
/// confidently fake to most confidently real. Each probability score maps to
/// exactly one bucket.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// p > 0.8
    HighlyFake,

    /// 0.6 < p <= 0.8
    LikelyFake,

    /// 0.4 < p <= 0.6
    PossiblyFake,

    /// 0.2 < p <= 0.4
    PotentiallyReal,

    /// p <= 0.2
    HighlyReal,
}

impl Bucket {
    /// Derive the bucket for a probability score.
    ///
    /// The chain is evaluated top-down with strict comparisons: a score
    /// exactly on a boundary falls into the lower bucket, so 0.8 is
    /// `LikelyFake` rather than `HighlyFake`.
    pub fn from_probability(p: f32) -> Self {
        if p > 0.8 {
            Self::HighlyFake
        } else if p > 0.6 {
            Self::LikelyFake
        } else if p > 0.4 {
            Self::PossiblyFake
        } else if p > 0.2 {
            Self::PotentiallyReal
        } else {
            Self::HighlyReal
        }
    }

    /// Returns true if this bucket counts toward the fake side of the tally
    #[must_use]
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::HighlyFake | Self::LikelyFake | Self::PossiblyFake)
    }

    /// The human-readable label shown to the user and exported to CSV
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyFake => "Highly Likely to be Fake News",
            Self::LikelyFake => "Likely to be Fake News",
            Self::PossiblyFake => "Possibly Fake News",
            Self::PotentiallyReal => "Potentially Real News",
            Self::HighlyReal => "Highly Likely to be Real News",
        }
    }

    /// The percentage shown next to the label: confidence in fakeness for the
    /// fake buckets, confidence in realness for the real buckets
    pub fn displayed_percentage(&self, p: f32) -> f32 {
        if self.is_fake() {
            p * 100.0
        } else {
            (1.0 - p) * 100.0
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
