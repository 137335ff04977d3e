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
    clippy::all
)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifies a step within a test plan.
///
/// Test plans label steps with plain numbers (`2`) or numbers with a
/// letter suffix (`5a`). The label is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Creates a new step identifier.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self(label.to_string())
    }

    /// Returns the label as written in the test plan.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for StepId {
    fn from(number: u32) -> Self {
        Self(number.to_string())
    }
}

impl From<&str> for StepId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<&Self> for StepId {
    fn from(id: &Self) -> Self {
        id.clone()
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a step body was not performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// None of the features the step requires is advertised by the device.
    FeatureNotSupported {
        /// Human-readable list of the required features.
        required: String,
    },
    /// The run ended early at `at` and this step was never reached.
    EarlyExit {
        /// The step that ended the run.
        at: StepId,
        /// Why the run ended.
        reason: String,
    },
    /// A previous step failed, so this step was never reached.
    PriorFailure {
        /// The step that failed.
        at: StepId,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FeatureNotSupported { required } => {
                write!(f, "requires {required}, not supported by the device")
            }
            Self::EarlyExit { at, reason } => write!(f, "run ended at step {at}: {reason}"),
            Self::PriorFailure { at } => write!(f, "step {at} failed"),
        }
    }
}

/// The final outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepDisposition {
    /// The step body ran to completion.
    Executed,
    /// The step body was not performed.
    Skipped {
        /// Why the step was skipped.
        reason: SkipReason,
    },
    /// The step body ran and an assertion failed.
    Failed {
        /// The failure message.
        message: String,
    },
}

impl StepDisposition {
    /// Returns true for `Skipped`.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// An immutable record of one declared step.
///
/// A finished report holds exactly one record per declared step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The step label.
    pub step: StepId,
    /// The step description from the test plan.
    pub description: String,
    /// Whether the step stands for commissioning done by the harness.
    pub is_commissioning: bool,
    /// What happened to the step.
    pub disposition: StepDisposition,
    /// When the step was entered. `None` for steps recorded without entering.
    #[serde(with = "time::serde::rfc3339::option")]
    pub entered_at: Option<OffsetDateTime>,
}

impl StepRecord {
    /// Creates a new `StepRecord`.
    ///
    /// # Arguments
    ///
    /// * `step` - The step label
    /// * `description` - The step description
    /// * `is_commissioning` - Whether this is the commissioning step
    /// * `disposition` - The step outcome
    /// * `entered_at` - When the step was entered, if it was
    #[must_use]
    pub const fn new(
        step: StepId,
        description: String,
        is_commissioning: bool,
        disposition: StepDisposition,
        entered_at: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            step,
            description,
            is_commissioning,
            disposition,
            entered_at,
        }
    }
}

/// Overall verdict of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Every performed step passed. Skipped steps do not fail a run.
    Passed,
    /// The run failed.
    Failed {
        /// The step the failure is attributed to. `None` for failures
        /// detected before step 1.
        step: Option<StepId>,
        /// The failure message.
        message: String,
    },
}

impl Verdict {
    /// Returns true for `Passed`.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Identity of the test case a report belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestIdentity {
    /// Test case id, e.g. `TC_BOOLCFG_5_2`.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// PICS codes the test case applies to.
    pub pics: Vec<String>,
}

impl TestIdentity {
    /// Creates a new `TestIdentity`.
    #[must_use]
    pub fn new(id: &str, description: &str, pics: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            pics: pics.iter().map(ToString::to_string).collect(),
        }
    }
}

/// The complete step report of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Which test case ran.
    pub test: TestIdentity,
    /// The endpoint under test.
    pub endpoint: u16,
    /// One record per declared step, in plan order.
    pub steps: Vec<StepRecord>,
    /// The outcome of the run.
    pub verdict: Verdict,
    /// When the run started.
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    /// When the run finished.
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
}

impl RunReport {
    /// Returns the record for a step, if the report has one.
    #[must_use]
    pub fn record(&self, step: &StepId) -> Option<&StepRecord> {
        self.steps.iter().find(|record| &record.step == step)
    }

    /// Returns the labels of all executed steps, in order.
    #[must_use]
    pub fn executed(&self) -> Vec<&StepId> {
        self.steps
            .iter()
            .filter(|record| record.disposition == StepDisposition::Executed)
            .map(|record| &record.step)
            .collect()
    }

    /// Returns the labels of all skipped steps, in order.
    #[must_use]
    pub fn skipped(&self) -> Vec<&StepId> {
        self.steps
            .iter()
            .filter(|record| record.disposition.is_skipped())
            .map(|record| &record.step)
            .collect()
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
