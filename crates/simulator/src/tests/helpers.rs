// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClusterState, DeviceProfile, SimulatedDevice};
use alarmcert_cluster::{Feature, TestEventTriggerKey};

pub const TEST_KEY: u128 = 0x0011_2233_4455_6677_8899_AABB_CCDD_EEFF;

pub fn create_test_key() -> TestEventTriggerKey {
    TestEventTriggerKey::from_u128(TEST_KEY)
}

pub fn all_alarm_features() -> Feature {
    Feature::VISUAL | Feature::AUDIBLE | Feature::ALARM_SUPPRESS
}

pub fn create_test_state() -> ClusterState {
    ClusterState::new(all_alarm_features())
}

pub fn create_test_device(features: Feature) -> SimulatedDevice {
    SimulatedDevice::new(DeviceProfile::new(features, create_test_key()))
}
