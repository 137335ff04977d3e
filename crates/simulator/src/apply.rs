// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::ClusterState;
use alarmcert_cluster::{
    AlarmModeBitmap, ClusterCommand, Feature, SENSOR_TRIGGER, SENSOR_UNTRIGGER, Status,
    TestEventTriggerKey,
};

/// Applies a command to the cluster state, producing the new state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `enable_key` - The test-event-trigger key the device was provisioned with
///
/// # Errors
///
/// Returns the interaction-model status the device answers with when the
/// command is rejected:
/// - `UnsupportedCommand` for `SuppressAlarm` without SPRS
/// - `ConstraintError` for alarm channels outside `AlarmsSupported`, or a
///   wrong or unprovisioned test-event-trigger key
/// - `InvalidCommand` for an unknown test event
pub fn apply(
    state: &ClusterState,
    command: &ClusterCommand,
    enable_key: &TestEventTriggerKey,
) -> Result<ClusterState, Status> {
    let mut next: ClusterState = state.clone();

    match command {
        ClusterCommand::EnableDisableAlarm {
            alarms_to_enable_disable,
        } => {
            require_supported(state, *alarms_to_enable_disable)?;
            next.alarms_enabled = *alarms_to_enable_disable;
            // Disabling a channel also clears it from the raised and suppressed sets.
            next.alarms_active &= *alarms_to_enable_disable;
            next.alarms_suppressed &= *alarms_to_enable_disable;
        }
        ClusterCommand::SuppressAlarm { alarms_to_suppress } => {
            if !state.features.contains(Feature::ALARM_SUPPRESS) {
                return Err(Status::UnsupportedCommand);
            }
            require_supported(state, *alarms_to_suppress)?;
            next.alarms_suppressed |= *alarms_to_suppress & state.alarms_active;
        }
        ClusterCommand::TestEventTrigger {
            enable_key: supplied,
            event_trigger,
        } => {
            if enable_key.is_zero() || supplied != enable_key {
                return Err(Status::ConstraintError);
            }
            match *event_trigger {
                SENSOR_TRIGGER => {
                    next.alarms_active = state.alarms_enabled;
                    next.alarms_suppressed &= state.alarms_enabled;
                }
                SENSOR_UNTRIGGER => {
                    next.alarms_active = AlarmModeBitmap::empty();
                    next.alarms_suppressed = AlarmModeBitmap::empty();
                }
                _ => return Err(Status::InvalidCommand),
            }
        }
    }

    Ok(next)
}

fn require_supported(state: &ClusterState, alarms: AlarmModeBitmap) -> Result<(), Status> {
    if state.alarms_supported.contains(alarms) {
        Ok(())
    } else {
        Err(Status::ConstraintError)
    }
}
