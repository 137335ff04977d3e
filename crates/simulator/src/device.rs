// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::profile::{DeviceProfile, Fault, FaultTarget};
use crate::state::ClusterState;
use alarmcert::{DeviceController, InteractionError};
use alarmcert_cluster::{
    AttributeId, AttributeValue, BOOLEAN_STATE_CONFIGURATION, BooleanStateConfigurationAttribute,
    ClusterCommand, ClusterId, EndpointId, ROOT_ENDPOINT, Status,
};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// An in-memory device hosting one Boolean State Configuration server.
///
/// The attribute store sits behind a mutex so one instance can be shared by
/// reference; every interaction is applied atomically.
#[derive(Debug)]
pub struct SimulatedDevice {
    profile: DeviceProfile,
    faults: Vec<Fault>,
    state: Mutex<ClusterState>,
    invoked: Mutex<Vec<(EndpointId, ClusterCommand)>>,
}

impl SimulatedDevice {
    /// Creates a device in its power-on state.
    #[must_use]
    pub fn new(profile: DeviceProfile) -> Self {
        info!(
            endpoint = %profile.endpoint,
            features = profile.features.bits(),
            "simulated device provisioned"
        );
        Self {
            profile,
            faults: Vec::new(),
            state: Mutex::new(ClusterState::new(profile.features)),
            invoked: Mutex::new(Vec::new()),
        }
    }

    /// Adds a fault to the device.
    #[must_use]
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.faults.push(fault);
        self
    }

    /// The provisioning profile.
    #[must_use]
    pub const fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Returns a copy of the current attribute store.
    pub async fn snapshot(&self) -> ClusterState {
        self.state.lock().await.clone()
    }

    /// Returns every command invoked so far, accepted or not, in order.
    pub async fn invoked_commands(&self) -> Vec<(EndpointId, ClusterCommand)> {
        self.invoked.lock().await.clone()
    }

    fn injected(&self, target: FaultTarget) -> Option<InteractionError> {
        self.faults
            .iter()
            .find_map(|fault| fault.error_for(target))
            .cloned()
    }

    fn ignores_suppress(&self) -> bool {
        self.faults.contains(&Fault::IgnoreSuppress)
    }

    fn check_endpoint(&self, endpoint: EndpointId, command: &ClusterCommand) -> Result<(), Status> {
        match command {
            ClusterCommand::TestEventTrigger { .. } if endpoint != ROOT_ENDPOINT => {
                Err(Status::UnsupportedCluster)
            }
            ClusterCommand::TestEventTrigger { .. } => Ok(()),
            _ if endpoint != self.profile.endpoint => Err(Status::UnsupportedEndpoint),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DeviceController for SimulatedDevice {
    async fn read_attribute(
        &self,
        endpoint: EndpointId,
        cluster: ClusterId,
        attribute: AttributeId,
    ) -> Result<AttributeValue, InteractionError> {
        if endpoint != self.profile.endpoint {
            return Err(InteractionError::Status(Status::UnsupportedEndpoint));
        }
        if cluster != BOOLEAN_STATE_CONFIGURATION {
            return Err(InteractionError::Status(Status::UnsupportedCluster));
        }
        let attribute: BooleanStateConfigurationAttribute =
            BooleanStateConfigurationAttribute::from_id(attribute)
                .map_err(|_| InteractionError::Status(Status::UnsupportedAttribute))?;
        if let Some(error) = self.injected(FaultTarget::Read(attribute)) {
            warn!(%attribute, %error, "injected read fault");
            return Err(error);
        }

        let value: AttributeValue = self
            .state
            .lock()
            .await
            .read(attribute)
            .map_err(InteractionError::Status)?;
        debug!(%endpoint, %attribute, %value, "attribute read");
        Ok(value)
    }

    async fn invoke_command(
        &self,
        endpoint: EndpointId,
        command: ClusterCommand,
    ) -> Result<(), InteractionError> {
        self.invoked.lock().await.push((endpoint, command.clone()));

        self.check_endpoint(endpoint, &command)
            .map_err(InteractionError::Status)?;
        if let Some(error) = self.injected(FaultTarget::Command(command.name())) {
            warn!(%command, %error, "injected command fault");
            return Err(error);
        }
        if self.ignores_suppress() && matches!(command, ClusterCommand::SuppressAlarm { .. }) {
            warn!(%command, "SuppressAlarm accepted and ignored");
            return Ok(());
        }

        let mut state = self.state.lock().await;
        let outcome: Result<ClusterState, Status> =
            apply(&state, &command, &self.profile.enable_key);
        if let Ok(next) = &outcome {
            state.clone_from(next);
        }
        drop(state);

        match outcome {
            Ok(next) => {
                debug!(
                    %command,
                    active = next.alarms_active.bits(),
                    suppressed = next.alarms_suppressed.bits(),
                    enabled = next.alarms_enabled.bits(),
                    "command applied"
                );
                Ok(())
            }
            Err(status) => {
                debug!(%command, %status, "command rejected");
                Err(InteractionError::Status(status))
            }
        }
    }
}
