// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AlarmModeBitmap, AttributeId, AttributeValue, BooleanStateConfigurationAttribute,
    Capabilities, ClusterCommand, ClusterError, EndpointId, Feature, GENERAL_DIAGNOSTICS,
    SENSOR_TRIGGER, Status, TestEventTriggerKey,
};

#[test]
fn test_feature_bits_match_cluster_definition() {
    assert_eq!(Feature::VISUAL.bits(), 0x1);
    assert_eq!(Feature::AUDIBLE.bits(), 0x2);
    assert_eq!(Feature::ALARM_SUPPRESS.bits(), 0x4);
    assert_eq!(Feature::SENSITIVITY_LEVEL.bits(), 0x8);
}

#[test]
fn test_alarm_mode_bits_match_cluster_definition() {
    assert_eq!(AlarmModeBitmap::VISUAL.bits(), 0b01);
    assert_eq!(AlarmModeBitmap::AUDIBLE.bits(), 0b10);
}

#[test]
fn test_supported_alarms_follow_features() {
    assert_eq!(
        AlarmModeBitmap::supported_by(Feature::VISUAL | Feature::ALARM_SUPPRESS),
        AlarmModeBitmap::VISUAL
    );
    assert_eq!(
        AlarmModeBitmap::supported_by(Feature::VISUAL | Feature::AUDIBLE),
        AlarmModeBitmap::VISUAL | AlarmModeBitmap::AUDIBLE
    );
    assert!(AlarmModeBitmap::supported_by(Feature::SENSITIVITY_LEVEL).is_empty());
}

#[test]
fn test_capabilities_from_feature_map() {
    let caps: Capabilities = Capabilities::from_feature_map(0b0111);

    assert!(caps.visual());
    assert!(caps.audible());
    assert!(caps.alarm_suppress());
    assert!(!caps.sensitivity_level());
}

#[test]
fn test_capabilities_retain_unknown_bits() {
    let caps: Capabilities = Capabilities::from_feature_map(0x0100_0004);

    assert!(caps.alarm_suppress());
    assert_eq!(caps.features().bits(), 0x0100_0004);
}

#[test]
fn test_supports_any_semantics() {
    let caps: Capabilities = Capabilities::from_features(Feature::AUDIBLE);

    assert!(caps.supports_any(Feature::empty()));
    assert!(caps.supports_any(Feature::VISUAL | Feature::AUDIBLE));
    assert!(!caps.supports_any(Feature::VISUAL));
}

#[test]
fn test_capabilities_display() {
    let caps: Capabilities = Capabilities::from_features(Feature::VISUAL | Feature::ALARM_SUPPRESS);
    assert_eq!(
        format!("{caps}"),
        "VIS=true AUD=false SPRS=true SENSLVL=false"
    );
}

#[test]
fn test_attribute_ids() {
    assert_eq!(
        BooleanStateConfigurationAttribute::AlarmsSuppressed.id(),
        AttributeId::new(0x0004)
    );
    assert_eq!(
        BooleanStateConfigurationAttribute::FeatureMap.id(),
        AttributeId::new(0xFFFC)
    );
    assert_eq!(
        BooleanStateConfigurationAttribute::from_id(AttributeId::new(0x0003)).unwrap(),
        BooleanStateConfigurationAttribute::AlarmsActive
    );
}

#[test]
fn test_unknown_attribute_id_is_rejected() {
    let result = BooleanStateConfigurationAttribute::from_id(AttributeId::new(0x0042));
    assert_eq!(result, Err(ClusterError::UnknownAttribute(0x0042)));
}

#[test]
fn test_attribute_name_parsing() {
    let attribute: BooleanStateConfigurationAttribute = "AlarmsEnabled".parse().unwrap();
    assert_eq!(attribute, BooleanStateConfigurationAttribute::AlarmsEnabled);
    assert!("alarmsenabled".parse::<BooleanStateConfigurationAttribute>().is_err());
}

#[test]
fn test_status_codes() {
    assert_eq!(Status::Success.code(), 0x00);
    assert_eq!(Status::ConstraintError.code(), 0x87);
    assert_eq!(Status::from_code(0x81), Status::UnsupportedCommand);
    assert_eq!(Status::from_code(0x42), Status::Other(0x42));
    assert!(Status::Success.is_success());
    assert!(!Status::Failure.is_success());
}

#[test]
fn test_status_display() {
    assert_eq!(format!("{}", Status::ConstraintError), "CONSTRAINT_ERROR (0x87)");
    assert_eq!(format!("{}", Status::Other(0x42)), "UNKNOWN (0x42)");
}

#[test]
fn test_attribute_value_accessors() {
    let value: AttributeValue = AttributeValue::Bitmap8(0b11);
    assert_eq!(
        value.as_alarm_modes().unwrap(),
        AlarmModeBitmap::VISUAL | AlarmModeBitmap::AUDIBLE
    );
    assert_eq!(value.raw(), 3);

    let err = value.as_feature_map().unwrap_err();
    assert_eq!(
        err,
        ClusterError::UnexpectedValueType {
            expected: "bitmap32",
            actual: "bitmap8",
        }
    );
}

#[test]
fn test_command_identity() {
    let trigger: ClusterCommand = ClusterCommand::TestEventTrigger {
        enable_key: TestEventTriggerKey::from_u128(1),
        event_trigger: SENSOR_TRIGGER,
    };
    assert_eq!(trigger.cluster(), GENERAL_DIAGNOSTICS);
    assert_eq!(trigger.command_id(), 0x00);

    let enable: ClusterCommand = ClusterCommand::EnableDisableAlarm {
        alarms_to_enable_disable: AlarmModeBitmap::VISUAL,
    };
    assert_eq!(enable.command_id(), 0x01);
    assert_eq!(format!("{enable}"), "EnableDisableAlarm(0b01)");
}

#[test]
fn test_trigger_display_hides_key() {
    let trigger: ClusterCommand = ClusterCommand::TestEventTrigger {
        enable_key: TestEventTriggerKey::from_u128(0xDEAD_BEEF),
        event_trigger: SENSOR_TRIGGER,
    };
    let rendered: String = format!("{trigger}");
    assert_eq!(rendered, "TestEventTrigger(0x0080000000000000)");
    assert!(!rendered.contains("deadbeef"));
}

#[test]
fn test_endpoint_default_is_one() {
    assert_eq!(EndpointId::default(), EndpointId::new(1));
}

#[test]
fn test_command_serializes_with_named_fields() {
    let command: ClusterCommand = ClusterCommand::SuppressAlarm {
        alarms_to_suppress: AlarmModeBitmap::AUDIBLE,
    };
    let json: serde_json::Value = serde_json::to_value(&command).unwrap();
    assert!(json.get("SuppressAlarm").is_some());
}

#[test]
fn test_feature_codes() {
    assert_eq!(Feature::VISUAL.codes(), "VIS");
    assert_eq!((Feature::VISUAL | Feature::AUDIBLE).codes(), "VIS or AUD");
    assert_eq!(Feature::ALARM_SUPPRESS.codes(), "SPRS");
    assert_eq!(Feature::empty().codes(), "");
}
