// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bitmaps::Feature;
use serde::{Deserialize, Serialize};

/// Capability flags derived once from a device's `FeatureMap`.
///
/// The value is computed at the start of a run and passed immutably to every
/// step guard. Unknown feature bits are retained so they show up in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    features: Feature,
}

impl Capabilities {
    /// Derives capabilities from a raw `FeatureMap` value.
    #[must_use]
    pub const fn from_feature_map(feature_map: u32) -> Self {
        Self {
            features: Feature::from_bits_retain(feature_map),
        }
    }

    /// Builds capabilities from known feature flags.
    #[must_use]
    pub const fn from_features(features: Feature) -> Self {
        Self { features }
    }

    /// Returns the underlying feature flags.
    #[must_use]
    pub const fn features(&self) -> Feature {
        self.features
    }

    /// SPRS: alarm suppression supported.
    #[must_use]
    pub const fn alarm_suppress(&self) -> bool {
        self.features.contains(Feature::ALARM_SUPPRESS)
    }

    /// VIS: visual alarm supported.
    #[must_use]
    pub const fn visual(&self) -> bool {
        self.features.contains(Feature::VISUAL)
    }

    /// AUD: audible alarm supported.
    #[must_use]
    pub const fn audible(&self) -> bool {
        self.features.contains(Feature::AUDIBLE)
    }

    /// SENSLVL: sensitivity level supported.
    #[must_use]
    pub const fn sensitivity_level(&self) -> bool {
        self.features.contains(Feature::SENSITIVITY_LEVEL)
    }

    /// Returns true if at least one of `required` is advertised.
    ///
    /// An empty requirement is always satisfied.
    #[must_use]
    pub const fn supports_any(&self, required: Feature) -> bool {
        required.is_empty() || self.features.intersects(required)
    }
}

impl std::fmt::Display for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VIS={} AUD={} SPRS={} SENSLVL={}",
            self.visual(),
            self.audible(),
            self.alarm_suppress(),
            self.sensitivity_level()
        )
    }
}
