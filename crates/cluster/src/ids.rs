// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClusterError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A logical device sub-unit addressed by a numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(u16);

impl EndpointId {
    /// Creates a new endpoint identifier.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw endpoint number.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl Default for EndpointId {
    /// Application clusters live on endpoint 1 unless told otherwise.
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for EndpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Endpoint 0 hosts the utility clusters, including General Diagnostics.
pub const ROOT_ENDPOINT: EndpointId = EndpointId::new(0);

/// A cluster identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(u32);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw cluster id.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Boolean State Configuration cluster.
pub const BOOLEAN_STATE_CONFIGURATION: ClusterId = ClusterId::new(0x0080);

/// General Diagnostics cluster (carries `TestEventTrigger`).
pub const GENERAL_DIAGNOSTICS: ClusterId = ClusterId::new(0x0033);

/// An attribute identifier within a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(u32);

impl AttributeId {
    /// Creates a new attribute identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw attribute id.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Attributes of the Boolean State Configuration cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanStateConfigurationAttribute {
    /// Currently selected sensitivity level.
    CurrentSensitivityLevel,
    /// Number of sensitivity levels the device supports.
    SupportedSensitivityLevels,
    /// Factory default sensitivity level.
    DefaultSensitivityLevel,
    /// Alarm modes currently raised.
    AlarmsActive,
    /// Alarm modes currently suppressed.
    AlarmsSuppressed,
    /// Alarm modes enabled for raising.
    AlarmsEnabled,
    /// Alarm modes the device can raise at all.
    AlarmsSupported,
    /// Sensor fault bitmap.
    SensorFault,
    /// Global feature map.
    FeatureMap,
    /// Global cluster revision.
    ClusterRevision,
}

impl BooleanStateConfigurationAttribute {
    /// All attributes, in id order.
    pub const ALL: [Self; 10] = [
        Self::CurrentSensitivityLevel,
        Self::SupportedSensitivityLevels,
        Self::DefaultSensitivityLevel,
        Self::AlarmsActive,
        Self::AlarmsSuppressed,
        Self::AlarmsEnabled,
        Self::AlarmsSupported,
        Self::SensorFault,
        Self::FeatureMap,
        Self::ClusterRevision,
    ];

    /// Returns the wire identifier of this attribute.
    #[must_use]
    pub const fn id(&self) -> AttributeId {
        AttributeId::new(match self {
            Self::CurrentSensitivityLevel => 0x0000,
            Self::SupportedSensitivityLevels => 0x0001,
            Self::DefaultSensitivityLevel => 0x0002,
            Self::AlarmsActive => 0x0003,
            Self::AlarmsSuppressed => 0x0004,
            Self::AlarmsEnabled => 0x0005,
            Self::AlarmsSupported => 0x0006,
            Self::SensorFault => 0x0007,
            Self::FeatureMap => 0xFFFC,
            Self::ClusterRevision => 0xFFFD,
        })
    }

    /// Looks up an attribute by its wire identifier.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::UnknownAttribute` if the id is not part of the cluster.
    pub fn from_id(id: AttributeId) -> Result<Self, ClusterError> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.id() == id)
            .ok_or(ClusterError::UnknownAttribute(id.value()))
    }

    /// Returns the attribute name as used in test plans.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentSensitivityLevel => "CurrentSensitivityLevel",
            Self::SupportedSensitivityLevels => "SupportedSensitivityLevels",
            Self::DefaultSensitivityLevel => "DefaultSensitivityLevel",
            Self::AlarmsActive => "AlarmsActive",
            Self::AlarmsSuppressed => "AlarmsSuppressed",
            Self::AlarmsEnabled => "AlarmsEnabled",
            Self::AlarmsSupported => "AlarmsSupported",
            Self::SensorFault => "SensorFault",
            Self::FeatureMap => "FeatureMap",
            Self::ClusterRevision => "ClusterRevision",
        }
    }
}

impl std::fmt::Display for BooleanStateConfigurationAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BooleanStateConfigurationAttribute {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == s)
            .ok_or_else(|| ClusterError::UnknownAttributeName(s.to_string()))
    }
}
