// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use alarmcert::{RunReport, StepDisposition, StepRecord, Verdict};
use alarmcert_testcases::TestCaseEntry;
use std::fmt::Write;

/// Renders the step report as a plain-text table.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let mut out: String = String::new();
    let width: usize = report
        .steps
        .iter()
        .map(|record| record.step.as_str().len())
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{} (endpoint {})",
        report.test.description, report.endpoint
    );
    for record in &report.steps {
        let _ = writeln!(out, "  {}", render_step(record, width));
    }

    let verdict: &str = match &report.verdict {
        Verdict::Passed => "PASSED",
        Verdict::Failed { .. } => "FAILED",
    };
    let _ = writeln!(
        out,
        "{} {verdict}: {} executed, {} skipped",
        report.test.id,
        report.executed().len(),
        report.skipped().len()
    );
    if let Verdict::Failed { message, .. } = &report.verdict {
        let _ = writeln!(out, "  {message}");
    }
    out
}

fn render_step(record: &StepRecord, width: usize) -> String {
    let label: &str = record.step.as_str();
    match &record.disposition {
        StepDisposition::Executed => format!("DONE  {label:<width$}  {}", record.description),
        StepDisposition::Skipped { reason } => {
            format!("SKIP  {label:<width$}  {} ({reason})", record.description)
        }
        StepDisposition::Failed { message } => {
            format!("FAIL  {label:<width$}  {}: {message}", record.description)
        }
    }
}

/// Renders the registered test cases, one per line.
#[must_use]
pub fn render_test_list(entries: &[TestCaseEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {}  [PICS: {}]\n",
                entry.id,
                entry.description,
                entry.pics.join(", ")
            )
        })
        .collect()
}
