// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::TcBoolcfg52;
use crate::boolcfg_5_2::TEST_EVENT_TRIGGER_KEY_PARAM;
use alarmcert::{RunReport, SkipReason, StepDisposition, StepId, TestParams, run_test_case};
use alarmcert_cluster::{EndpointId, Feature, TestEventTriggerKey};
use alarmcert_simulator::{DeviceProfile, Fault, SimulatedDevice};

pub const TEST_KEY: u128 = 0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10;

pub fn create_test_params(endpoint: u16, key: u128) -> TestParams {
    let mut params: TestParams = TestParams::new(EndpointId::new(endpoint));
    params.insert_int(TEST_EVENT_TRIGGER_KEY_PARAM, key);
    params
}

pub fn create_test_device(features: Feature, faults: Vec<Fault>) -> SimulatedDevice {
    faults.into_iter().fold(
        SimulatedDevice::new(DeviceProfile::new(
            features,
            TestEventTriggerKey::from_u128(TEST_KEY),
        )),
        SimulatedDevice::with_fault,
    )
}

/// Runs TC-BOOLCFG-5.2 with default parameters against `device`.
pub async fn run_on(device: &SimulatedDevice) -> RunReport {
    let test: TcBoolcfg52 = TcBoolcfg52::from_params(&create_test_params(1, TEST_KEY)).unwrap();
    run_test_case(&test, device).await
}

pub fn labels(report: &RunReport) -> Vec<&str> {
    report.steps.iter().map(|record| record.step.as_str()).collect()
}

pub fn skipped_labels(report: &RunReport) -> Vec<&str> {
    report.skipped().into_iter().map(StepId::as_str).collect()
}

pub fn disposition<'r>(report: &'r RunReport, step: &str) -> &'r StepDisposition {
    &report.record(&StepId::new(step)).unwrap().disposition
}

pub fn skip_reason<'r>(report: &'r RunReport, step: &str) -> &'r SkipReason {
    match disposition(report, step) {
        StepDisposition::Skipped { reason } => reason,
        other => panic!("step {step} was not skipped: {other:?}"),
    }
}

pub const ALL_STEPS: [&str; 13] = [
    "1", "2", "3", "4", "5a", "5b", "5c", "6", "7", "8", "9", "10", "11",
];
