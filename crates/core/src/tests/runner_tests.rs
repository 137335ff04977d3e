// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ConformanceError, ConformanceTest, InteractionError, RunReport, SkipReason, StepDisposition,
    StepId, TestContext, TestIdentity, TestPlan, Verdict, run_test_case,
};
use alarmcert_cluster::{
    AlarmModeBitmap, AttributeValue, BooleanStateConfigurationAttribute, Capabilities,
    ClusterCommand, EndpointId, Feature, Status,
};
use async_trait::async_trait;

use super::helpers::{ScriptedDevice, create_test_plan};

/// Reads the feature map, then enables each alarm the device supports.
struct EnableAlarms;

#[async_trait]
impl ConformanceTest for EnableAlarms {
    fn identity(&self) -> TestIdentity {
        TestIdentity::new("TC_DEMO", "[TC-DEMO] enable supported alarms", &["DEMO.S"])
    }

    fn plan(&self) -> TestPlan {
        create_test_plan()
    }

    fn endpoint(&self) -> EndpointId {
        EndpointId::new(2)
    }

    async fn run(&self, ctx: &mut TestContext<'_>) -> Result<(), ConformanceError> {
        ctx.step("1")?;

        ctx.step("2")?;
        let feature_map: AttributeValue = ctx
            .read_attribute(BooleanStateConfigurationAttribute::FeatureMap)
            .await?;
        let capabilities: Capabilities = Capabilities::from_feature_map(
            feature_map
                .as_feature_map()
                .map_err(|err| ConformanceError::UnexpectedValue {
                    step: StepId::new("2"),
                    message: err.to_string(),
                })?,
        );

        ctx.step("3a")?;
        if ctx.guard(&capabilities, Feature::VISUAL) {
            ctx.send_command(ClusterCommand::EnableDisableAlarm {
                alarms_to_enable_disable: AlarmModeBitmap::VISUAL,
            })
            .await?;
        }

        ctx.step("3b")?;
        if ctx.guard(&capabilities, Feature::AUDIBLE) {
            ctx.send_command(ClusterCommand::EnableDisableAlarm {
                alarms_to_enable_disable: AlarmModeBitmap::AUDIBLE,
            })
            .await?;
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_run_report_carries_identity_and_endpoint() {
    let device: ScriptedDevice = ScriptedDevice::new();
    device.push_read(Ok(AttributeValue::Bitmap32(0b0011)));

    let report: RunReport = run_test_case(&EnableAlarms, &device).await;

    assert_eq!(report.test.id, "TC_DEMO");
    assert_eq!(report.test.pics, vec![String::from("DEMO.S")]);
    assert_eq!(report.endpoint, 2);
    assert_eq!(report.verdict, Verdict::Passed);
    assert_eq!(report.executed().len(), 4);
    assert!(report.started_at <= report.finished_at);
}

#[tokio::test]
async fn test_run_skips_unsupported_feature() {
    let device: ScriptedDevice = ScriptedDevice::new();
    device.push_read(Ok(AttributeValue::Bitmap32(0b0001)));

    let report: RunReport = run_test_case(&EnableAlarms, &device).await;

    assert!(report.verdict.is_pass());
    assert_eq!(report.skipped(), vec![&StepId::new("3b")]);
    // The FeatureMap read and one command.
    assert_eq!(device.calls().len(), 2);
}

#[tokio::test]
async fn test_run_failure_is_attributed_to_step() {
    let device: ScriptedDevice = ScriptedDevice::new();
    device.push_read(Ok(AttributeValue::Bitmap32(0b0011)));
    device.push_command(Err(InteractionError::Status(Status::ConstraintError)));

    let report: RunReport = run_test_case(&EnableAlarms, &device).await;

    assert!(matches!(
        &report.verdict,
        Verdict::Failed { step: Some(step), .. } if step.as_str() == "3a"
    ));
    assert_eq!(report.steps.len(), 4);
    assert!(matches!(
        report.record(&StepId::new("3a")).unwrap().disposition,
        StepDisposition::Failed { .. }
    ));
    assert_eq!(
        report.record(&StepId::new("3b")).unwrap().disposition,
        StepDisposition::Skipped {
            reason: SkipReason::PriorFailure {
                at: StepId::new("3a"),
            },
        }
    );
}
