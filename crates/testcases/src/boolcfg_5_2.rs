// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! TC-BOOLCFG-5.2: `SuppressAlarm` functionality for active alarms with the
//! device as server.
//!
//! Enables every alarm the device advertises, raises them with a sensor test
//! event, suppresses each one and reads `AlarmsSuppressed` back. Devices
//! without the SPRS feature skip everything after step 3.

use alarmcert::{
    ConformanceError, ConformanceTest, Step, StepId, TestContext, TestIdentity, TestParams,
    TestPlan,
};
use alarmcert_cluster::{
    AlarmModeBitmap, AttributeValue, BooleanStateConfigurationAttribute, Capabilities,
    ClusterCommand, EndpointId, Feature, SENSOR_TRIGGER, SENSOR_UNTRIGGER, TestEventTriggerKey,
};
use async_trait::async_trait;
use tracing::info;

/// Test case id.
pub const ID: &str = "TC_BOOLCFG_5_2";

/// Test case description.
pub const DESCRIPTION: &str =
    "[TC-BOOLCFG-5.2] SuppressAlarm functionality for active alarms with DUT as Server";

/// PICS codes the device must declare for this test case to apply.
pub const PICS: &[&str] = &["BOOLCFG.S"];

/// Integer parameter carrying the test-event-trigger key.
pub const TEST_EVENT_TRIGGER_KEY_PARAM: &str = "PIXIT.BOOLCFG.TEST_EVENT_TRIGGER_KEY";

const STEPS: [(&str, &str); 13] = [
    ("1", "Commissioning, already done"),
    ("2", "Read FeatureMap attribute"),
    ("3", "Verify SPRS feature is supported"),
    ("4", "Create enabledAlarms and set to 0"),
    ("5a", "Enable VIS alarm in enabledAlarms"),
    ("5b", "Enable AUD alarm in enabledAlarms"),
    (
        "5c",
        "Set AlarmsEnabled attribute to value of enabledAlarms using AlarmsToEnableDisable command",
    ),
    ("6", "Send TestEventTrigger with SensorTrigger event"),
    ("7", "Suppress VIS alarm using SuppressAlarm command"),
    ("8", "Read AlarmsSuppressed attribute"),
    ("9", "Suppress AUD alarm using SuppressAlarm command"),
    ("10", "Read AlarmsActive attribute"),
    ("11", "Send TestEventTrigger with SensorUntrigger event"),
];

/// Validated configuration of one TC-BOOLCFG-5.2 run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolcfg52Config {
    /// Endpoint hosting the Boolean State Configuration cluster.
    pub endpoint: EndpointId,
    /// Key for General Diagnostics `TestEventTrigger`.
    pub enable_key: TestEventTriggerKey,
}

impl Boolcfg52Config {
    /// Builds the configuration from harness parameters.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the trigger key is missing or was not
    /// passed as an integer.
    pub fn from_params(params: &TestParams) -> Result<Self, ConformanceError> {
        let key: u128 = params.require_int(TEST_EVENT_TRIGGER_KEY_PARAM)?;
        Ok(Self {
            endpoint: params.endpoint(),
            enable_key: TestEventTriggerKey::from_u128(key),
        })
    }
}

/// The TC-BOOLCFG-5.2 test case.
#[derive(Debug, Clone)]
pub struct TcBoolcfg52 {
    config: Boolcfg52Config,
    plan: TestPlan,
}

impl TcBoolcfg52 {
    /// Creates the test case for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the step list declares a label twice.
    pub fn new(config: Boolcfg52Config) -> Result<Self, ConformanceError> {
        let plan: TestPlan = TestPlan::new(steps()).map_err(ConformanceError::DuplicateStep)?;
        Ok(Self { config, plan })
    }

    /// Validates `params` and creates the test case.
    ///
    /// # Errors
    ///
    /// See [`Boolcfg52Config::from_params`].
    pub fn from_params(params: &TestParams) -> Result<Self, ConformanceError> {
        Self::new(Boolcfg52Config::from_params(params)?)
    }

    /// The configuration the test case runs with.
    #[must_use]
    pub const fn config(&self) -> &Boolcfg52Config {
        &self.config
    }

    async fn suppress(
        ctx: &TestContext<'_>,
        alarms_to_suppress: AlarmModeBitmap,
    ) -> Result<(), ConformanceError> {
        ctx.send_command(ClusterCommand::SuppressAlarm { alarms_to_suppress })
            .await
    }
}

/// Returns the TC-BOOLCFG-5.2 steps in execution order.
#[must_use]
pub fn steps() -> Vec<Step> {
    STEPS
        .iter()
        .map(|(id, description)| {
            if *id == "1" {
                Step::commissioning(id, description)
            } else {
                Step::new(id, description)
            }
        })
        .collect()
}

#[async_trait]
impl ConformanceTest for TcBoolcfg52 {
    fn identity(&self) -> TestIdentity {
        TestIdentity::new(ID, DESCRIPTION, PICS)
    }

    fn plan(&self) -> TestPlan {
        self.plan.clone()
    }

    fn endpoint(&self) -> EndpointId {
        self.config.endpoint
    }

    async fn run(&self, ctx: &mut TestContext<'_>) -> Result<(), ConformanceError> {
        let key: TestEventTriggerKey = self.config.enable_key;
        let either_alarm: Feature = Feature::VISUAL | Feature::AUDIBLE;

        ctx.step("1")?;

        ctx.step("2")?;
        let feature_map: AttributeValue = ctx
            .read_attribute(BooleanStateConfigurationAttribute::FeatureMap)
            .await?;
        let capabilities: Capabilities =
            Capabilities::from_feature_map(feature_map.as_feature_map().map_err(|err| {
                ConformanceError::UnexpectedValue {
                    step: StepId::new("2"),
                    message: err.to_string(),
                }
            })?);
        info!(%capabilities, "FeatureMap read");

        ctx.step("3")?;
        if !capabilities.alarm_suppress() {
            info!("AlarmSuppress feature not supported skipping test case");
            ctx.skip_remaining("AlarmSuppress feature not supported");
            return Ok(());
        }

        ctx.step("4")?;
        let mut enabled_alarms: AlarmModeBitmap = AlarmModeBitmap::empty();

        ctx.step("5a")?;
        if ctx.guard(&capabilities, Feature::VISUAL) {
            enabled_alarms |= AlarmModeBitmap::VISUAL;
        }

        ctx.step("5b")?;
        if ctx.guard(&capabilities, Feature::AUDIBLE) {
            enabled_alarms |= AlarmModeBitmap::AUDIBLE;
        }

        ctx.step("5c")?;
        ctx.send_command(ClusterCommand::EnableDisableAlarm {
            alarms_to_enable_disable: enabled_alarms,
        })
        .await?;

        ctx.step("6")?;
        if ctx.guard(&capabilities, either_alarm) {
            ctx.trigger_test_event(key, SENSOR_TRIGGER).await?;
        }

        ctx.step("7")?;
        if ctx.guard(&capabilities, Feature::VISUAL) {
            Self::suppress(ctx, AlarmModeBitmap::VISUAL).await?;
        }

        ctx.step("8")?;
        if ctx.guard(&capabilities, Feature::VISUAL) {
            ctx.verify_alarm_bit(
                BooleanStateConfigurationAttribute::AlarmsSuppressed,
                AlarmModeBitmap::VISUAL,
            )
            .await?;
        }

        ctx.step("9")?;
        if ctx.guard(&capabilities, Feature::AUDIBLE) {
            Self::suppress(ctx, AlarmModeBitmap::AUDIBLE).await?;
        }

        // Titled after AlarmsActive, but the suppression it checks lives in AlarmsSuppressed.
        ctx.step("10")?;
        if ctx.guard(&capabilities, Feature::AUDIBLE) {
            ctx.verify_alarm_bit(
                BooleanStateConfigurationAttribute::AlarmsSuppressed,
                AlarmModeBitmap::AUDIBLE,
            )
            .await?;
        }

        ctx.step("11")?;
        if ctx.guard(&capabilities, either_alarm) {
            ctx.trigger_test_event(key, SENSOR_UNTRIGGER).await?;
        }

        Ok(())
    }
}
