// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::InteractionError;
use alarmcert_cluster::{
    AttributeId, AttributeValue, ClusterCommand, ClusterId, EndpointId, ROOT_ENDPOINT,
    TestEventTriggerKey,
};
use async_trait::async_trait;

/// Access to one already-commissioned device.
///
/// Commissioning, sessions and the wire encoding are the implementor's
/// business. Every call resolves to a typed result: `Ok` only when the
/// device reported success.
#[async_trait]
pub trait DeviceController: Send + Sync {
    /// Reads a single attribute.
    async fn read_attribute(
        &self,
        endpoint: EndpointId,
        cluster: ClusterId,
        attribute: AttributeId,
    ) -> Result<AttributeValue, InteractionError>;

    /// Invokes a command and waits for its status response.
    async fn invoke_command(
        &self,
        endpoint: EndpointId,
        command: ClusterCommand,
    ) -> Result<(), InteractionError>;

    /// Sends General Diagnostics `TestEventTrigger` to the root endpoint.
    async fn trigger_test_event(
        &self,
        enable_key: TestEventTriggerKey,
        event_trigger: u64,
    ) -> Result<(), InteractionError> {
        self.invoke_command(
            ROOT_ENDPOINT,
            ClusterCommand::TestEventTrigger {
                enable_key,
                event_trigger,
            },
        )
        .await
    }
}
