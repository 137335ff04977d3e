// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stepwise execution of a test plan.
//!
//! The sequencer owns the run state: which declared step is current and what
//! happened to every step entered so far. Test bodies call [`Sequencer::step`]
//! in plan order, consult [`Sequencer::guard`] before feature-dependent
//! actions, and hand their final result to [`Sequencer::finish`], which
//! accounts for every declared step exactly once.

use crate::error::ConformanceError;
use crate::plan::TestPlan;
use alarmcert_cluster::{Capabilities, Feature};
use alarmcert_report::{SkipReason, StepDisposition, StepId, StepRecord, Verdict};
use time::OffsetDateTime;
use tracing::{error, info, warn};

#[derive(Debug)]
struct EnteredStep {
    index: usize,
    entered_at: OffsetDateTime,
    skipped: Option<SkipReason>,
}

/// Run state of one test plan.
#[derive(Debug)]
pub struct Sequencer<'p> {
    plan: &'p TestPlan,
    /// Index of the next declared step.
    cursor: usize,
    current: Option<EnteredStep>,
    records: Vec<StepRecord>,
}

impl<'p> Sequencer<'p> {
    /// Creates a sequencer positioned before the first step of `plan`.
    #[must_use]
    pub fn new(plan: &'p TestPlan) -> Self {
        Self {
            plan,
            cursor: 0,
            current: None,
            records: Vec::with_capacity(plan.len()),
        }
    }

    /// Returns the id of the step currently entered.
    #[must_use]
    pub fn current_step(&self) -> Option<&StepId> {
        self.current
            .as_ref()
            .and_then(|entered| self.plan.get(entered.index))
            .map(|step| &step.id)
    }

    /// Returns the ids of the declared steps not yet entered.
    #[must_use]
    pub fn remaining(&self) -> Vec<&StepId> {
        self.plan.steps()[self.cursor..]
            .iter()
            .map(|step| &step.id)
            .collect()
    }

    /// Enters the step `id`, closing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not the next declared step.
    pub fn step(&mut self, id: impl Into<StepId>) -> Result<(), ConformanceError> {
        let id: StepId = id.into();
        let plan: &'p TestPlan = self.plan;
        let Some(next) = plan.get(self.cursor) else {
            return Err(ConformanceError::UnknownStep(id));
        };
        if next.id != id {
            if plan.position(&id).is_none() {
                return Err(ConformanceError::UnknownStep(id));
            }
            return Err(ConformanceError::StepOutOfOrder {
                expected: next.id.clone(),
                actual: id,
            });
        }

        self.close_current();
        info!(step = %next.id, "***** Test Step {} : {}", next.id, next.description);
        self.current = Some(EnteredStep {
            index: self.cursor,
            entered_at: OffsetDateTime::now_utc(),
            skipped: None,
        });
        self.cursor += 1;
        Ok(())
    }

    /// Evaluates a feature guard for the current step.
    ///
    /// Returns true if the device advertises at least one of `required` (an
    /// empty requirement always passes). Otherwise the current step is
    /// recorded as skipped and false is returned; the caller must not perform
    /// the step's action.
    pub fn guard(&mut self, capabilities: &Capabilities, required: Feature) -> bool {
        if capabilities.supports_any(required) {
            return true;
        }
        self.skip(SkipReason::FeatureNotSupported {
            required: required.codes(),
        });
        false
    }

    /// Records the current step as skipped.
    pub fn skip(&mut self, reason: SkipReason) {
        if let Some(entered) = self.current.as_mut() {
            info!("Test step skipped");
            entered.skipped = Some(reason);
        } else {
            warn!("skip requested outside of a test step");
        }
    }

    /// Ends the run early: every declared step after the current one is
    /// entered and recorded as skipped.
    pub fn skip_remaining(&mut self, reason: &str) {
        let at: StepId = self
            .current_step()
            .cloned()
            .unwrap_or_else(|| StepId::new("0"));
        info!(step = %at, "{reason}; skipping remaining steps");

        while self.cursor < self.plan.len() {
            let Some(next) = self.plan.get(self.cursor) else {
                break;
            };
            let next_id: StepId = next.id.clone();
            // The loop follows plan order, so entering cannot fail.
            if self.step(next_id).is_err() {
                break;
            }
            self.skip(SkipReason::EarlyExit {
                at: at.clone(),
                reason: reason.to_string(),
            });
        }
    }

    /// Closes the run and accounts for every declared step.
    ///
    /// On success the current step is recorded as executed (or skipped). On
    /// failure it is recorded as failed and every later step is recorded as
    /// skipped because of the failure. Steps a successful body never reached
    /// turn the verdict into a failure.
    #[must_use]
    pub fn finish(mut self, outcome: Result<(), ConformanceError>) -> (Vec<StepRecord>, Verdict) {
        let verdict: Verdict = match outcome {
            Ok(()) => {
                self.close_current();
                let not_reached: Vec<StepId> =
                    self.remaining().into_iter().cloned().collect();
                if not_reached.is_empty() {
                    Verdict::Passed
                } else {
                    let err = ConformanceError::StepsNotReached(not_reached);
                    warn!("{err}");
                    let at: StepId = self
                        .records
                        .last()
                        .map_or_else(|| StepId::new("0"), |record| record.step.clone());
                    self.record_rest(&SkipReason::PriorFailure { at });
                    Verdict::Failed {
                        step: None,
                        message: err.to_string(),
                    }
                }
            }
            Err(err) => {
                let message: String = err.to_string();
                error!("{message}");
                let failed_at: Option<StepId> = self.fail_current(&message);
                let step: Option<StepId> = err.step().cloned().or_else(|| failed_at.clone());
                let at: StepId = failed_at
                    .or_else(|| step.clone())
                    .unwrap_or_else(|| StepId::new("0"));
                self.record_rest(&SkipReason::PriorFailure { at });
                Verdict::Failed { step, message }
            }
        };
        (self.records, verdict)
    }

    fn close_current(&mut self) {
        if let Some(entered) = self.current.take() {
            let disposition: StepDisposition = entered
                .skipped
                .map_or(StepDisposition::Executed, |reason| StepDisposition::Skipped {
                    reason,
                });
            self.push_record(entered.index, disposition, Some(entered.entered_at));
        }
    }

    fn fail_current(&mut self, message: &str) -> Option<StepId> {
        let entered: EnteredStep = self.current.take()?;
        let id: StepId = self.plan.get(entered.index)?.id.clone();
        self.push_record(
            entered.index,
            StepDisposition::Failed {
                message: message.to_string(),
            },
            Some(entered.entered_at),
        );
        Some(id)
    }

    fn record_rest(&mut self, reason: &SkipReason) {
        while self.cursor < self.plan.len() {
            self.push_record(
                self.cursor,
                StepDisposition::Skipped {
                    reason: reason.clone(),
                },
                None,
            );
            self.cursor += 1;
        }
    }

    fn push_record(
        &mut self,
        index: usize,
        disposition: StepDisposition,
        entered_at: Option<OffsetDateTime>,
    ) {
        let plan: &'p TestPlan = self.plan;
        if let Some(step) = plan.get(index) {
            self.records.push(StepRecord::new(
                step.id.clone(),
                step.description.clone(),
                step.is_commissioning,
                disposition,
                entered_at,
            ));
        }
    }
}
