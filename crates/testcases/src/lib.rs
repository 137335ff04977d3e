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

//! Boolean State Configuration certification test cases.

pub mod boolcfg_5_2;
mod registry;

#[cfg(test)]
mod tests;

pub use boolcfg_5_2::{Boolcfg52Config, TcBoolcfg52};
pub use registry::{BuildFn, DEFAULT_TEST_ID, TestCaseEntry, find_test_case, test_cases};
