// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use alarmcert_cluster::{
    AlarmModeBitmap, AttributeValue, BooleanStateConfigurationAttribute, Feature, Status,
};
use serde::{Deserialize, Serialize};

/// Revision of the Boolean State Configuration cluster the simulator models.
pub const CLUSTER_REVISION: u16 = 1;

/// Number of sensitivity levels offered when SENSLVL is advertised.
pub const SUPPORTED_SENSITIVITY_LEVELS: u8 = 3;

/// Attribute store of one simulated Boolean State Configuration server.
///
/// State only changes through [`crate::apply`], which returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterState {
    /// Advertised features.
    pub features: Feature,
    /// Alarm channels the device can raise at all.
    pub alarms_supported: AlarmModeBitmap,
    /// Alarm channels enabled for raising.
    pub alarms_enabled: AlarmModeBitmap,
    /// Alarm channels currently raised.
    pub alarms_active: AlarmModeBitmap,
    /// Raised alarm channels currently suppressed.
    pub alarms_suppressed: AlarmModeBitmap,
    /// Sensor fault bitmap.
    pub sensor_fault: u16,
    /// Selected sensitivity level.
    pub current_sensitivity_level: u8,
}

impl ClusterState {
    /// Creates the power-on state of a device advertising `features`.
    ///
    /// Every supported alarm starts enabled, none active.
    #[must_use]
    pub const fn new(features: Feature) -> Self {
        let supported: AlarmModeBitmap = AlarmModeBitmap::supported_by(features);
        Self {
            features,
            alarms_supported: supported,
            alarms_enabled: supported,
            alarms_active: AlarmModeBitmap::empty(),
            alarms_suppressed: AlarmModeBitmap::empty(),
            sensor_fault: 0,
            current_sensitivity_level: 0,
        }
    }

    /// Reads one attribute.
    ///
    /// # Errors
    ///
    /// Returns `Status::UnsupportedAttribute` for attributes that depend on a
    /// feature the device does not advertise.
    pub fn read(
        &self,
        attribute: BooleanStateConfigurationAttribute,
    ) -> Result<AttributeValue, Status> {
        let alarms: bool = self
            .features
            .intersects(Feature::VISUAL | Feature::AUDIBLE);
        let sensitivity: bool = self.features.contains(Feature::SENSITIVITY_LEVEL);

        match attribute {
            BooleanStateConfigurationAttribute::FeatureMap => {
                Ok(AttributeValue::Bitmap32(self.features.bits()))
            }
            BooleanStateConfigurationAttribute::ClusterRevision => {
                Ok(AttributeValue::U16(CLUSTER_REVISION))
            }
            BooleanStateConfigurationAttribute::SensorFault => {
                Ok(AttributeValue::U16(self.sensor_fault))
            }
            BooleanStateConfigurationAttribute::AlarmsActive if alarms => {
                Ok(AttributeValue::Bitmap8(self.alarms_active.bits()))
            }
            BooleanStateConfigurationAttribute::AlarmsEnabled if alarms => {
                Ok(AttributeValue::Bitmap8(self.alarms_enabled.bits()))
            }
            BooleanStateConfigurationAttribute::AlarmsSupported if alarms => {
                Ok(AttributeValue::Bitmap8(self.alarms_supported.bits()))
            }
            BooleanStateConfigurationAttribute::AlarmsSuppressed
                if self.features.contains(Feature::ALARM_SUPPRESS) =>
            {
                Ok(AttributeValue::Bitmap8(self.alarms_suppressed.bits()))
            }
            BooleanStateConfigurationAttribute::CurrentSensitivityLevel if sensitivity => {
                Ok(AttributeValue::U8(self.current_sensitivity_level))
            }
            BooleanStateConfigurationAttribute::SupportedSensitivityLevels if sensitivity => {
                Ok(AttributeValue::U8(SUPPORTED_SENSITIVITY_LEVELS))
            }
            BooleanStateConfigurationAttribute::DefaultSensitivityLevel if sensitivity => {
                Ok(AttributeValue::U8(0))
            }
            _ => Err(Status::UnsupportedAttribute),
        }
    }
}
