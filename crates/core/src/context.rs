// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::device::DeviceController;
use crate::error::ConformanceError;
use crate::plan::TestPlan;
use crate::sequencer::Sequencer;
use alarmcert_cluster::{
    AlarmModeBitmap, AttributeValue, BOOLEAN_STATE_CONFIGURATION,
    BooleanStateConfigurationAttribute, Capabilities, ClusterCommand, EndpointId, Feature,
    TestEventTriggerKey,
};
use alarmcert_report::{StepId, StepRecord, Verdict};
use tracing::debug;

/// What a test body works with: the device, the endpoint under test and
/// the sequencer tracking the plan.
///
/// Device helpers attribute every failure to the current step.
pub struct TestContext<'a> {
    device: &'a dyn DeviceController,
    endpoint: EndpointId,
    sequencer: Sequencer<'a>,
}

impl<'a> TestContext<'a> {
    /// Creates a context positioned before the first step of `plan`.
    #[must_use]
    pub fn new(device: &'a dyn DeviceController, endpoint: EndpointId, plan: &'a TestPlan) -> Self {
        Self {
            device,
            endpoint,
            sequencer: Sequencer::new(plan),
        }
    }

    /// The endpoint under test.
    #[must_use]
    pub const fn endpoint(&self) -> EndpointId {
        self.endpoint
    }

    /// Enters the next step. See [`Sequencer::step`].
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not the next declared step.
    pub fn step(&mut self, id: impl Into<StepId>) -> Result<(), ConformanceError> {
        self.sequencer.step(id)
    }

    /// Evaluates a feature guard for the current step. See [`Sequencer::guard`].
    pub fn guard(&mut self, capabilities: &Capabilities, required: Feature) -> bool {
        self.sequencer.guard(capabilities, required)
    }

    /// Ends the run early, recording every remaining step as skipped.
    pub fn skip_remaining(&mut self, reason: &str) {
        self.sequencer.skip_remaining(reason);
    }

    /// Closes the run. See [`Sequencer::finish`].
    #[must_use]
    pub fn finish(self, outcome: Result<(), ConformanceError>) -> (Vec<StepRecord>, Verdict) {
        self.sequencer.finish(outcome)
    }

    fn current_step(&self) -> Result<StepId, ConformanceError> {
        self.sequencer
            .current_step()
            .cloned()
            .ok_or(ConformanceError::NoCurrentStep)
    }

    /// Reads a Boolean State Configuration attribute on the endpoint under test.
    ///
    /// # Errors
    ///
    /// Returns an error naming the current step if the read does not succeed.
    pub async fn read_attribute(
        &self,
        attribute: BooleanStateConfigurationAttribute,
    ) -> Result<AttributeValue, ConformanceError> {
        let step: StepId = self.current_step()?;
        debug!(step = %step, endpoint = %self.endpoint, %attribute, "reading attribute");
        let result = self
            .device
            .read_attribute(self.endpoint, BOOLEAN_STATE_CONFIGURATION, attribute.id())
            .await;
        match result {
            Ok(value) => {
                debug!(step = %step, %attribute, %value, "attribute read");
                Ok(value)
            }
            Err(err) => match ConformanceError::from_interaction(
                &step,
                &format!("read {attribute}"),
                err,
            ) {
                Some(failure) => Err(failure),
                // A "success" error carries no value, so there is nothing to return.
                None => Err(ConformanceError::UnexpectedValue {
                    step,
                    message: format!("read of {attribute} returned no value"),
                }),
            },
        }
    }

    /// Reads a bitmap attribute and requires `expected` to be set in it.
    ///
    /// # Errors
    ///
    /// Returns a verification error if the bit is clear, or the read error.
    pub async fn verify_alarm_bit(
        &self,
        attribute: BooleanStateConfigurationAttribute,
        expected: AlarmModeBitmap,
    ) -> Result<(), ConformanceError> {
        let value: AttributeValue = self.read_attribute(attribute).await?;
        let step: StepId = self.current_step()?;
        let modes: AlarmModeBitmap =
            value
                .as_alarm_modes()
                .map_err(|err| ConformanceError::UnexpectedValue {
                    step: step.clone(),
                    message: err.to_string(),
                })?;

        if !modes.intersects(expected) {
            return Err(ConformanceError::Verification {
                step,
                attribute: attribute.to_string(),
                bit: u32::from(expected.bits()).trailing_zeros(),
                actual: u32::from(modes.bits()),
            });
        }
        Ok(())
    }

    /// Invokes a command on the endpoint under test and requires success.
    ///
    /// # Errors
    ///
    /// Returns an error naming the current step for any non-success outcome.
    pub async fn send_command(&self, command: ClusterCommand) -> Result<(), ConformanceError> {
        let step: StepId = self.current_step()?;
        debug!(step = %step, endpoint = %self.endpoint, %command, "invoking command");
        let operation: &'static str = command.name();
        let result = self.device.invoke_command(self.endpoint, command).await;
        Self::expect_success(&step, operation, result)
    }

    /// Sends a test-event trigger to the root endpoint and requires success.
    ///
    /// # Errors
    ///
    /// Returns an error naming the current step for any non-success outcome.
    pub async fn trigger_test_event(
        &self,
        enable_key: TestEventTriggerKey,
        event_trigger: u64,
    ) -> Result<(), ConformanceError> {
        let step: StepId = self.current_step()?;
        debug!(step = %step, event_trigger = format_args!("0x{event_trigger:016X}"), "sending test event trigger");
        let result = self
            .device
            .trigger_test_event(enable_key, event_trigger)
            .await;
        Self::expect_success(&step, "TestEventTrigger", result)
    }

    fn expect_success(
        step: &StepId,
        operation: &str,
        result: Result<(), crate::error::InteractionError>,
    ) -> Result<(), ConformanceError> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => ConformanceError::from_interaction(step, operation, err).map_or(Ok(()), Err),
        }
    }
}
