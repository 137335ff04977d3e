// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bitmaps::AlarmModeBitmap;
use crate::ids::{BOOLEAN_STATE_CONFIGURATION, ClusterId, GENERAL_DIAGNOSTICS};
use crate::key::TestEventTriggerKey;
use serde::{Deserialize, Serialize};

/// Test event that drives the boolean sensor state to `true`.
pub const SENSOR_TRIGGER: u64 = 0x0080_0000_0000_0000;

/// Test event that drives the boolean sensor state back to `false`.
pub const SENSOR_UNTRIGGER: u64 = 0x0080_0000_0000_0001;

/// A cluster command as data only.
///
/// Commands are the only way a test asks the device to change state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterCommand {
    /// Boolean State Configuration `SuppressAlarm`.
    SuppressAlarm {
        /// Alarm channels to suppress.
        alarms_to_suppress: AlarmModeBitmap,
    },
    /// Boolean State Configuration `EnableDisableAlarm`.
    EnableDisableAlarm {
        /// Channels to enable; every other channel is disabled.
        alarms_to_enable_disable: AlarmModeBitmap,
    },
    /// General Diagnostics `TestEventTrigger`.
    TestEventTrigger {
        /// Enable key shared with the device.
        enable_key: TestEventTriggerKey,
        /// Manufacturer/test event identifier.
        event_trigger: u64,
    },
}

impl ClusterCommand {
    /// Returns the cluster the command belongs to.
    #[must_use]
    pub const fn cluster(&self) -> ClusterId {
        match self {
            Self::SuppressAlarm { .. } | Self::EnableDisableAlarm { .. } => {
                BOOLEAN_STATE_CONFIGURATION
            }
            Self::TestEventTrigger { .. } => GENERAL_DIAGNOSTICS,
        }
    }

    /// Returns the command id within its cluster.
    #[must_use]
    pub const fn command_id(&self) -> u32 {
        match self {
            Self::SuppressAlarm { .. } | Self::TestEventTrigger { .. } => 0x00,
            Self::EnableDisableAlarm { .. } => 0x01,
        }
    }

    /// Returns the command name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SuppressAlarm { .. } => "SuppressAlarm",
            Self::EnableDisableAlarm { .. } => "EnableDisableAlarm",
            Self::TestEventTrigger { .. } => "TestEventTrigger",
        }
    }
}

impl std::fmt::Display for ClusterCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuppressAlarm { alarms_to_suppress } => {
                write!(f, "SuppressAlarm(0b{:02b})", alarms_to_suppress.bits())
            }
            Self::EnableDisableAlarm {
                alarms_to_enable_disable,
            } => write!(
                f,
                "EnableDisableAlarm(0b{:02b})",
                alarms_to_enable_disable.bits()
            ),
            // The key is a shared secret and stays out of logs.
            Self::TestEventTrigger { event_trigger, .. } => {
                write!(f, "TestEventTrigger(0x{event_trigger:016X})")
            }
        }
    }
}
