// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use alarmcert::InteractionError;
use alarmcert_cluster::{BooleanStateConfigurationAttribute, EndpointId, Feature, TestEventTriggerKey};
use serde::{Deserialize, Serialize};

/// How a simulated device is provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Endpoint hosting the Boolean State Configuration cluster.
    pub endpoint: EndpointId,
    /// Features advertised in `FeatureMap`.
    pub features: Feature,
    /// Key the device accepts on `TestEventTrigger`.
    pub enable_key: TestEventTriggerKey,
}

impl DeviceProfile {
    /// Creates a profile on the default endpoint.
    #[must_use]
    pub fn new(features: Feature, enable_key: TestEventTriggerKey) -> Self {
        Self {
            endpoint: EndpointId::default(),
            features,
            enable_key,
        }
    }

    /// Moves the cluster to another endpoint.
    #[must_use]
    pub const fn with_endpoint(mut self, endpoint: EndpointId) -> Self {
        self.endpoint = endpoint;
        self
    }
}

/// Which interaction a [`Fault`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultTarget {
    /// Reads of one attribute.
    Read(BooleanStateConfigurationAttribute),
    /// Invocations of a command, by name (e.g. `SuppressAlarm`).
    Command(&'static str),
}

/// Behaviour that makes the simulated device deviate from the cluster rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Answer matching interactions with an error instead of handling them.
    Fail {
        /// The interactions to fail.
        target: FaultTarget,
        /// The error returned.
        error: InteractionError,
    },
    /// Accept `SuppressAlarm` without suppressing anything.
    IgnoreSuppress,
}

impl Fault {
    /// Fails every invocation of `command` with `error`.
    #[must_use]
    pub const fn fail_command(command: &'static str, error: InteractionError) -> Self {
        Self::Fail {
            target: FaultTarget::Command(command),
            error,
        }
    }

    /// Fails every read of `attribute` with `error`.
    #[must_use]
    pub const fn fail_read(
        attribute: BooleanStateConfigurationAttribute,
        error: InteractionError,
    ) -> Self {
        Self::Fail {
            target: FaultTarget::Read(attribute),
            error,
        }
    }

    pub(crate) fn error_for(&self, target: FaultTarget) -> Option<&InteractionError> {
        match self {
            Self::Fail { target: t, error } if *t == target => Some(error),
            _ => None,
        }
    }
}
