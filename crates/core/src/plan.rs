// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use alarmcert_report::StepId;

/// A declared test step.
///
/// Steps are immutable once defined; the order of a plan is fixed at
/// test-definition time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The step label, e.g. `5a`.
    pub id: StepId,
    /// What the step does.
    pub description: String,
    /// Whether the step stands for commissioning performed by the harness.
    pub is_commissioning: bool,
}

impl Step {
    /// Creates a regular step.
    #[must_use]
    pub fn new(id: &str, description: &str) -> Self {
        Self {
            id: StepId::new(id),
            description: description.to_string(),
            is_commissioning: false,
        }
    }

    /// Creates the commissioning step.
    #[must_use]
    pub fn commissioning(id: &str, description: &str) -> Self {
        Self {
            is_commissioning: true,
            ..Self::new(id, description)
        }
    }
}

/// The ordered list of steps of a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPlan {
    steps: Vec<Step>,
}

impl TestPlan {
    /// Creates a plan from steps in execution order.
    ///
    /// # Errors
    ///
    /// Returns the first duplicated step id if labels are not unique.
    pub fn new(steps: Vec<Step>) -> Result<Self, StepId> {
        for (index, step) in steps.iter().enumerate() {
            if steps[..index].iter().any(|earlier| earlier.id == step.id) {
                return Err(step.id.clone());
            }
        }
        Ok(Self { steps })
    }

    /// Returns the steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the step at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Returns the position of a step in the plan.
    #[must_use]
    pub fn position(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|step| &step.id == id)
    }

    /// Number of declared steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the plan declares no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
