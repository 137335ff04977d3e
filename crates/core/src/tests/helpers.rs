// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DeviceController, InteractionError, Step, TestPlan};
use alarmcert_cluster::{
    AttributeId, AttributeValue, ClusterCommand, ClusterId, EndpointId, Status,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One call observed by [`ScriptedDevice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    Read {
        endpoint: EndpointId,
        attribute: AttributeId,
    },
    Invoke {
        endpoint: EndpointId,
        command: ClusterCommand,
    },
}

/// A device that answers from queued responses and records every call.
///
/// Reads with nothing queued answer `UnsupportedAttribute`; commands with
/// nothing queued succeed.
#[derive(Default)]
pub struct ScriptedDevice {
    reads: Mutex<VecDeque<Result<AttributeValue, InteractionError>>>,
    commands: Mutex<VecDeque<Result<(), InteractionError>>>,
    calls: Mutex<Vec<DeviceCall>>,
}

impl ScriptedDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_read(&self, response: Result<AttributeValue, InteractionError>) {
        self.reads.lock().unwrap().push_back(response);
    }

    pub fn push_command(&self, response: Result<(), InteractionError>) {
        self.commands.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeviceController for ScriptedDevice {
    async fn read_attribute(
        &self,
        endpoint: EndpointId,
        _cluster: ClusterId,
        attribute: AttributeId,
    ) -> Result<AttributeValue, InteractionError> {
        self.calls
            .lock()
            .unwrap()
            .push(DeviceCall::Read { endpoint, attribute });
        self.reads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(InteractionError::Status(Status::UnsupportedAttribute)))
    }

    async fn invoke_command(
        &self,
        endpoint: EndpointId,
        command: ClusterCommand,
    ) -> Result<(), InteractionError> {
        self.calls
            .lock()
            .unwrap()
            .push(DeviceCall::Invoke { endpoint, command });
        self.commands.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// Four steps: commissioning, a read, and two guarded actions.
pub fn create_test_plan() -> TestPlan {
    TestPlan::new(vec![
        Step::commissioning("1", "Commissioning, already done"),
        Step::new("2", "Read FeatureMap attribute"),
        Step::new("3a", "Enable VIS alarm"),
        Step::new("3b", "Enable AUD alarm"),
    ])
    .unwrap()
}
