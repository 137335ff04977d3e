// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use alarmcert_cluster::Status;
use alarmcert_report::StepId;
use thiserror::Error;

/// Failure of a single device interaction, as seen by the caller.
///
/// Every device call returns this uniformly, whether the device answered
/// with an interaction-model status or the call never got an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    /// The device answered with a non-success status.
    #[error("device returned {0}")]
    Status(Status),
    /// The call failed below the interaction model (session, transport).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors that fail a conformance run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConformanceError {
    /// A required parameter is missing or malformed. Raised before step 1.
    #[error("Precondition failed: {message}")]
    Precondition {
        /// What is missing and how to provide it.
        message: String,
    },
    /// A read or command answered with a non-success status.
    #[error("Step {step}: unexpected status {status} from {operation}")]
    RemoteStatus {
        /// The step the call was made in.
        step: StepId,
        /// The operation that failed, e.g. `SuppressAlarm`.
        operation: String,
        /// The status the device returned.
        status: Status,
    },
    /// A read-back attribute did not contain the expected bit.
    #[error("Step {step}: Bit {bit} in {attribute} is not 1 (read 0x{actual:02X})")]
    Verification {
        /// The step that verified the attribute.
        step: StepId,
        /// The attribute that was read back.
        attribute: String,
        /// Index of the bit that should have been set.
        bit: u32,
        /// The value that was read.
        actual: u32,
    },
    /// A device call failed without producing a status.
    #[error("Step {step}: {operation} failed: {message}")]
    Interaction {
        /// The step the call was made in.
        step: StepId,
        /// The operation that failed.
        operation: String,
        /// The transport error.
        message: String,
    },
    /// A returned attribute value could not be interpreted.
    #[error("Step {step}: {message}")]
    UnexpectedValue {
        /// The step that read the value.
        step: StepId,
        /// What was wrong with the value.
        message: String,
    },
    /// A step was entered out of plan order.
    #[error("Step {actual} entered out of order; expected step {expected}")]
    StepOutOfOrder {
        /// The next step declared in the plan.
        expected: StepId,
        /// The step that was entered instead.
        actual: StepId,
    },
    /// A step was entered that the plan does not declare, or after the plan ended.
    #[error("Step {0} is not declared in the test plan")]
    UnknownStep(StepId),
    /// A test plan declares the same step label twice.
    #[error("Step {0} is declared more than once")]
    DuplicateStep(StepId),
    /// A device call was made outside of any step.
    #[error("Device interaction outside of a test step")]
    NoCurrentStep,
    /// The test body finished without entering every declared step.
    #[error("Test finished without reaching steps: {}", join_steps(.0))]
    StepsNotReached(Vec<StepId>),
}

impl ConformanceError {
    /// Returns the step the failure is attributed to, if any.
    #[must_use]
    pub const fn step(&self) -> Option<&StepId> {
        match self {
            Self::RemoteStatus { step, .. }
            | Self::Verification { step, .. }
            | Self::Interaction { step, .. }
            | Self::UnexpectedValue { step, .. } => Some(step),
            Self::StepOutOfOrder { actual, .. } => Some(actual),
            Self::UnknownStep(step) => Some(step),
            Self::Precondition { .. }
            | Self::DuplicateStep(_)
            | Self::NoCurrentStep
            | Self::StepsNotReached(_) => None,
        }
    }

    /// Maps a device-call failure to the conformance error for `step`.
    ///
    /// A `Status::Success` carried in an error is not a failure.
    pub(crate) fn from_interaction(
        step: &StepId,
        operation: &str,
        err: InteractionError,
    ) -> Option<Self> {
        match err {
            InteractionError::Status(status) if status.is_success() => None,
            InteractionError::Status(status) => Some(Self::RemoteStatus {
                step: step.clone(),
                operation: operation.to_string(),
                status,
            }),
            InteractionError::Transport(message) => Some(Self::Interaction {
                step: step.clone(),
                operation: operation.to_string(),
                message,
            }),
        }
    }
}

fn join_steps(steps: &[StepId]) -> String {
    steps
        .iter()
        .map(StepId::as_str)
        .collect::<Vec<&str>>()
        .join(", ")
}
