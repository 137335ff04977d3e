// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Optional capabilities advertised through the `FeatureMap` attribute.
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Feature: u32 {
        /// VIS: the device can raise a visual alarm.
        const VISUAL = 0b0001;
        /// AUD: the device can raise an audible alarm.
        const AUDIBLE = 0b0010;
        /// SPRS: raised alarms can be suppressed.
        const ALARM_SUPPRESS = 0b0100;
        /// SENSLVL: the sensor sensitivity is configurable.
        const SENSITIVITY_LEVEL = 0b1000;
    }
}

bitflags! {
    /// Alarm channels used by `AlarmsActive`, `AlarmsSuppressed`,
    /// `AlarmsEnabled` and `AlarmsSupported`.
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AlarmModeBitmap: u8 {
        /// Visual alarm channel.
        const VISUAL = 0b01;
        /// Audible alarm channel.
        const AUDIBLE = 0b10;
    }
}

impl Feature {
    /// Returns the short feature codes joined by `" or "`, e.g. `VIS or AUD`.
    #[must_use]
    pub fn codes(self) -> String {
        let codes: Vec<&str> = self
            .iter()
            .map(|flag| match flag {
                f if f == Self::VISUAL => "VIS",
                f if f == Self::AUDIBLE => "AUD",
                f if f == Self::ALARM_SUPPRESS => "SPRS",
                f if f == Self::SENSITIVITY_LEVEL => "SENSLVL",
                _ => "UNKNOWN",
            })
            .collect();
        codes.join(" or ")
    }
}

impl AlarmModeBitmap {
    /// Returns the alarm channels a device with the given features must support.
    #[must_use]
    pub const fn supported_by(features: Feature) -> Self {
        let mut bits: u8 = 0;
        if features.contains(Feature::VISUAL) {
            bits |= Self::VISUAL.bits();
        }
        if features.contains(Feature::AUDIBLE) {
            bits |= Self::AUDIBLE.bits();
        }
        Self::from_bits_retain(bits)
    }
}
