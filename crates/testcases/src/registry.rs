// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::boolcfg_5_2::{self, TcBoolcfg52};
use alarmcert::{ConformanceError, ConformanceTest, TestParams};

/// Builds a test case from harness parameters.
pub type BuildFn = fn(&TestParams) -> Result<Box<dyn ConformanceTest>, ConformanceError>;

/// A test case known to the runner.
#[derive(Debug, Clone, Copy)]
pub struct TestCaseEntry {
    /// Test case id, e.g. `TC_BOOLCFG_5_2`.
    pub id: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// PICS codes the test case applies to.
    pub pics: &'static [&'static str],
    build: BuildFn,
}

impl TestCaseEntry {
    /// Validates `params` and builds the test case.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if a required parameter is missing.
    pub fn build(&self, params: &TestParams) -> Result<Box<dyn ConformanceTest>, ConformanceError> {
        (self.build)(params)
    }
}

/// Id run when none is requested.
pub const DEFAULT_TEST_ID: &str = boolcfg_5_2::ID;

const TEST_CASES: &[TestCaseEntry] = &[TestCaseEntry {
    id: boolcfg_5_2::ID,
    description: boolcfg_5_2::DESCRIPTION,
    pics: boolcfg_5_2::PICS,
    build: build_boolcfg_5_2,
}];

fn build_boolcfg_5_2(params: &TestParams) -> Result<Box<dyn ConformanceTest>, ConformanceError> {
    Ok(Box::new(TcBoolcfg52::from_params(params)?))
}

/// Returns every registered test case.
#[must_use]
pub const fn test_cases() -> &'static [TestCaseEntry] {
    TEST_CASES
}

/// Looks up a test case by id.
///
/// Ids match case-insensitively, and `-`/`.` are accepted in place of `_`,
/// so `TC-BOOLCFG-5.2` finds `TC_BOOLCFG_5_2`.
#[must_use]
pub fn find_test_case(id: &str) -> Option<&'static TestCaseEntry> {
    let wanted: String = normalize(id);
    TEST_CASES.iter().find(|entry| normalize(entry.id) == wanted)
}

fn normalize(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
