// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::TestContext;
use crate::device::DeviceController;
use crate::error::ConformanceError;
use crate::plan::TestPlan;
use alarmcert_cluster::EndpointId;
use alarmcert_report::{RunReport, StepRecord, TestIdentity, Verdict};
use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::{info, warn};

/// A conformance test case.
///
/// Implementors declare their step plan up front and drive it from
/// [`ConformanceTest::run`] through the supplied [`TestContext`].
#[async_trait]
pub trait ConformanceTest: Send + Sync {
    /// Id, description and PICS of the test case.
    fn identity(&self) -> TestIdentity;

    /// The ordered step plan.
    fn plan(&self) -> TestPlan;

    /// The endpoint the cluster under test lives on.
    fn endpoint(&self) -> EndpointId;

    /// Runs the step bodies.
    ///
    /// # Errors
    ///
    /// Returns the first failure; the remaining steps are then recorded as
    /// skipped by the runner.
    async fn run(&self, ctx: &mut TestContext<'_>) -> Result<(), ConformanceError>;
}

/// Runs `test` against `device` and returns the full step report.
///
/// The report holds one record per declared step, in plan order, whatever
/// the outcome.
pub async fn run_test_case(test: &dyn ConformanceTest, device: &dyn DeviceController) -> RunReport {
    let identity: TestIdentity = test.identity();
    let plan: TestPlan = test.plan();
    let endpoint: EndpointId = test.endpoint();

    info!(test = %identity.id, %endpoint, "{}", identity.description);
    let started_at: OffsetDateTime = OffsetDateTime::now_utc();

    let mut ctx: TestContext<'_> = TestContext::new(device, endpoint, &plan);
    let outcome: Result<(), ConformanceError> = test.run(&mut ctx).await;
    let (steps, verdict): (Vec<StepRecord>, Verdict) = ctx.finish(outcome);

    match &verdict {
        Verdict::Passed => info!(test = %identity.id, "test passed"),
        Verdict::Failed { message, .. } => warn!(test = %identity.id, "test failed: {message}"),
    }

    RunReport {
        test: identity,
        endpoint: endpoint.value(),
        steps,
        verdict,
        started_at,
        finished_at: OffsetDateTime::now_utc(),
    }
}
