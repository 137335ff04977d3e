// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Feature-gated, stepwise conformance sequencing.
//!
//! A test case declares an ordered [`TestPlan`], then drives it through a
//! [`TestContext`]: enter each step, check its feature guard, perform the
//! step's device interaction. [`run_test_case`] turns the outcome into a
//! [`RunReport`] that accounts for every declared step.

mod context;
mod device;
mod error;
mod params;
mod plan;
mod runner;
mod sequencer;

#[cfg(test)]
mod tests;

pub use context::TestContext;
pub use device::DeviceController;
pub use error::{ConformanceError, InteractionError};
pub use params::{ParamValue, TestParams};
pub use plan::{Step, TestPlan};
pub use runner::{ConformanceTest, run_test_case};
pub use sequencer::Sequencer;

pub use alarmcert_report::{
    RunReport, SkipReason, StepDisposition, StepId, StepRecord, TestIdentity, Verdict,
};
