// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_TEST_ID, TestCaseEntry, find_test_case, test_cases};
use alarmcert::{ConformanceError, ConformanceTest, TestParams};
use alarmcert_cluster::EndpointId;

use super::helpers::{TEST_KEY, create_test_params};

#[test]
fn test_default_test_is_registered() {
    let entry: &TestCaseEntry = find_test_case(DEFAULT_TEST_ID).unwrap();

    assert_eq!(entry.id, "TC_BOOLCFG_5_2");
    assert_eq!(entry.pics, &["BOOLCFG.S"]);
    assert_eq!(test_cases().len(), 1);
}

#[test]
fn test_lookup_accepts_dotted_form() {
    assert!(find_test_case("TC-BOOLCFG-5.2").is_some());
    assert!(find_test_case("tc_boolcfg_5_2").is_some());
    assert!(find_test_case("TC_BOOLCFG_5_1").is_none());
}

#[test]
fn test_build_validates_params() {
    let entry: &TestCaseEntry = find_test_case(DEFAULT_TEST_ID).unwrap();

    let missing = entry.build(&TestParams::new(EndpointId::new(1)));
    let built: Box<dyn ConformanceTest> = entry.build(&create_test_params(2, TEST_KEY)).unwrap();

    assert!(matches!(
        missing.err(),
        Some(ConformanceError::Precondition { .. })
    ));
    assert_eq!(built.endpoint(), EndpointId::new(2));
    assert_eq!(built.plan().len(), 13);
}
