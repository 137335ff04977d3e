// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use alarmcert::TestParams;
use alarmcert_cluster::{EndpointId, Feature, TestEventTriggerKey};
use alarmcert_simulator::DeviceProfile;
use alarmcert_testcases::DEFAULT_TEST_ID;
use alarmcert_testcases::boolcfg_5_2::TEST_EVENT_TRIGGER_KEY_PARAM;
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Features the simulated device advertises unless told otherwise.
pub const DEFAULT_DUT_FEATURES: Feature = Feature::VISUAL
    .union(Feature::AUDIBLE)
    .union(Feature::ALARM_SUPPRESS);

/// Run settings as written in a `--config` JSON file.
///
/// Every field is optional; command-line flags override file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Test case id.
    pub test: Option<String>,
    /// Endpoint of the cluster under test.
    pub endpoint: Option<u16>,
    /// Integer parameters as `NAME:VALUE`.
    pub int_args: Vec<String>,
    /// String parameters as `NAME:VALUE`.
    pub string_args: Vec<String>,
    /// Features of the simulated device: a bitmap or codes like `VIS,SPRS`.
    pub dut_features: Option<String>,
    /// Trigger key the simulated device is provisioned with.
    pub dut_key: Option<String>,
    /// Where to write the JSON run report.
    pub report: Option<PathBuf>,
}

impl FileConfig {
    /// Reads a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Overlays `overrides` on top of `self`.
    ///
    /// Scalar values from `overrides` win; parameter lists are concatenated so
    /// a later `NAME:VALUE` replaces an earlier one.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            test: overrides.test.or(self.test),
            endpoint: overrides.endpoint.or(self.endpoint),
            int_args: [self.int_args, overrides.int_args].concat(),
            string_args: [self.string_args, overrides.string_args].concat(),
            dut_features: overrides.dut_features.or(self.dut_features),
            dut_key: overrides.dut_key.or(self.dut_key),
            report: overrides.report.or(self.report),
        }
    }
}

/// Fully resolved settings of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Test case id.
    pub test_id: String,
    /// Parameters handed to the test case.
    pub params: TestParams,
    /// Provisioning of the simulated device.
    pub dut: DeviceProfile,
    /// Where to write the JSON run report.
    pub report: Option<PathBuf>,
}

impl RunConfig {
    /// Validates a merged config.
    ///
    /// The simulated device is provisioned with `dut_key` when given, and
    /// with the harness trigger key otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter, the feature list or the key is malformed.
    pub fn resolve(config: FileConfig) -> Result<Self> {
        let endpoint: EndpointId = config.endpoint.map_or_else(EndpointId::default, EndpointId::new);

        let mut params: TestParams = TestParams::new(endpoint);
        for pair in &config.int_args {
            params.parse_int_arg(pair)?;
        }
        for pair in &config.string_args {
            params.parse_string_arg(pair)?;
        }

        let features: Feature = match config.dut_features.as_deref() {
            Some(text) => parse_features(text)?,
            None => DEFAULT_DUT_FEATURES,
        };
        let enable_key: TestEventTriggerKey = match config.dut_key.as_deref() {
            Some(text) => text
                .parse::<TestEventTriggerKey>()
                .wrap_err("Invalid --dut-key for the simulated device")?,
            None => TestEventTriggerKey::from_u128(
                params.int(TEST_EVENT_TRIGGER_KEY_PARAM).unwrap_or_default(),
            ),
        };

        Ok(Self {
            test_id: config.test.unwrap_or_else(|| DEFAULT_TEST_ID.to_string()),
            params,
            dut: DeviceProfile::new(features, enable_key).with_endpoint(endpoint),
            report: config.report,
        })
    }
}

/// Parses a feature set from a bitmap (`7`, `0x5`) or feature codes
/// (`VIS,AUD,SPRS`, `vis|sprs`).
///
/// # Errors
///
/// Returns an error naming the first code that is not recognised.
pub fn parse_features(text: &str) -> Result<Feature> {
    let trimmed: &str = text.trim();
    let numeric: Option<u32> = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .map_or_else(
            || trimmed.parse::<u32>().ok(),
            |hex| u32::from_str_radix(hex, 16).ok(),
        );
    if let Some(bits) = numeric {
        return Ok(Feature::from_bits_retain(bits));
    }

    trimmed
        .split([',', '|'])
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .try_fold(Feature::empty(), |features, code| {
            let flag: Feature = match code.to_ascii_uppercase().as_str() {
                "VIS" => Feature::VISUAL,
                "AUD" => Feature::AUDIBLE,
                "SPRS" => Feature::ALARM_SUPPRESS,
                "SENSLVL" => Feature::SENSITIVITY_LEVEL,
                _ => return Err(eyre!("Unknown feature '{code}' in '{text}'")),
            };
            Ok(features | flag)
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    fn create_test_file_config() -> FileConfig {
        FileConfig {
            test: Some(String::from("TC-BOOLCFG-5.2")),
            endpoint: Some(2),
            int_args: vec![format!("{TEST_EVENT_TRIGGER_KEY_PARAM}:0x10")],
            string_args: Vec::new(),
            dut_features: Some(String::from("VIS,SPRS")),
            dut_key: None,
            report: None,
        }
    }

    #[test]
    fn test_parse_features_bitmap_and_codes() {
        assert_eq!(parse_features("7").unwrap(), DEFAULT_DUT_FEATURES);
        assert_eq!(
            parse_features("0x5").unwrap(),
            Feature::VISUAL | Feature::ALARM_SUPPRESS
        );
        assert_eq!(
            parse_features("aud | sprs").unwrap(),
            Feature::AUDIBLE | Feature::ALARM_SUPPRESS
        );
        assert_eq!(parse_features("").unwrap(), Feature::empty());
        assert!(parse_features("VIS,LOUD").is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let config: RunConfig = RunConfig::resolve(FileConfig::default()).unwrap();

        assert_eq!(config.test_id, DEFAULT_TEST_ID);
        assert_eq!(config.params.endpoint(), EndpointId::new(1));
        assert_eq!(config.dut.features, DEFAULT_DUT_FEATURES);
        assert!(config.dut.enable_key.is_zero());
    }

    #[test]
    fn test_resolve_provisions_dut_with_harness_key() {
        let config: RunConfig = RunConfig::resolve(create_test_file_config()).unwrap();

        assert_eq!(config.params.int(TEST_EVENT_TRIGGER_KEY_PARAM), Some(0x10));
        assert_eq!(config.dut.enable_key, TestEventTriggerKey::from_u128(0x10));
        assert_eq!(config.dut.endpoint, EndpointId::new(2));
        assert_eq!(config.dut.features, Feature::VISUAL | Feature::ALARM_SUPPRESS);
    }

    #[test]
    fn test_explicit_dut_key_wins() {
        let mut file: FileConfig = create_test_file_config();
        file.dut_key = Some(String::from("99"));

        let config: RunConfig = RunConfig::resolve(file).unwrap();

        assert_eq!(config.dut.enable_key, TestEventTriggerKey::from_u128(99));
    }

    #[test]
    fn test_merge_prefers_overrides_and_appends_args() {
        let overrides: FileConfig = FileConfig {
            endpoint: Some(5),
            int_args: vec![format!("{TEST_EVENT_TRIGGER_KEY_PARAM}:0x20")],
            ..FileConfig::default()
        };

        let merged: FileConfig = create_test_file_config().merge(overrides);
        let config: RunConfig = RunConfig::resolve(merged).unwrap();

        assert_eq!(config.test_id, "TC-BOOLCFG-5.2");
        assert_eq!(config.params.endpoint(), EndpointId::new(5));
        assert_eq!(config.params.int(TEST_EVENT_TRIGGER_KEY_PARAM), Some(0x20));
    }

    #[test]
    fn test_file_config_from_json() {
        let json: &str = r#"{
            "endpoint": 3,
            "int_args": ["PIXIT.BOOLCFG.TEST_EVENT_TRIGGER_KEY:1"],
            "dut_features": "0x3"
        }"#;

        let file: FileConfig = serde_json::from_str(json).unwrap();

        assert_eq!(file.endpoint, Some(3));
        assert_eq!(file.int_args.len(), 1);
        assert!(file.test.is_none());
    }

    #[test]
    fn test_file_config_rejects_unknown_fields() {
        let result = serde_json::from_str::<FileConfig>(r#"{ "endpoints": 3 }"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_int_arg_is_an_error() {
        let file: FileConfig = FileConfig {
            int_args: vec![String::from("NO_SEPARATOR")],
            ..FileConfig::default()
        };

        assert!(RunConfig::resolve(file).is_err());
    }
}
