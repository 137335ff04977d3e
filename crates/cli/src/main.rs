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
#![allow(clippy::multiple_crate_versions)]

mod config;
mod render;

use alarmcert::{ConformanceTest, RunReport, run_test_case};
use alarmcert_simulator::SimulatedDevice;
use alarmcert_testcases::{TestCaseEntry, find_test_case, test_cases};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use config::{FileConfig, RunConfig};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// alarmcert - run Boolean State Configuration conformance tests against a
/// simulated device
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Test case to run (see --list)
    #[arg(short, long)]
    test: Option<String>,

    /// Endpoint hosting the cluster under test [default: 1]
    #[arg(short, long)]
    endpoint: Option<u16>,

    /// Integer test parameter, NAME:VALUE (decimal or 0x hex). Repeatable.
    #[arg(long = "int-arg", value_name = "NAME:VALUE")]
    int_args: Vec<String>,

    /// String test parameter, NAME:VALUE. Repeatable.
    #[arg(long = "string-arg", value_name = "NAME:VALUE")]
    string_args: Vec<String>,

    /// Features of the simulated device, as a bitmap or codes (VIS,AUD,SPRS,SENSLVL)
    #[arg(long, value_name = "FEATURES")]
    dut_features: Option<String>,

    /// Test-event-trigger key of the simulated device [default: the
    /// PIXIT.BOOLCFG.TEST_EVENT_TRIGGER_KEY parameter]
    #[arg(long, value_name = "KEY")]
    dut_key: Option<String>,

    /// JSON file with the same settings; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON run report to this file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// List available test cases and exit
    #[arg(long)]
    list: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            test: self.test.clone(),
            endpoint: self.endpoint,
            int_args: self.int_args.clone(),
            string_args: self.string_args.clone(),
            dut_features: self.dut_features.clone(),
            dut_key: self.dut_key.clone(),
            report: self.report.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.verbosity.log_level_filter().as_trace().into())
                .from_env_lossy(),
        )
        .init();

    if args.list {
        print!("{}", render::render_test_list(test_cases()));
        return Ok(());
    }

    let file: FileConfig = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config: RunConfig = RunConfig::resolve(file.merge(args.overrides()))?;

    let entry: &TestCaseEntry = find_test_case(&config.test_id)
        .ok_or_else(|| eyre!("Unknown test case '{}'; see --list", config.test_id))?;
    let test: Box<dyn ConformanceTest> = entry.build(&config.params)?;

    let device: SimulatedDevice = SimulatedDevice::new(config.dut);
    let report: RunReport = run_test_case(&*test, &device).await;
    print!("{}", render::render_report(&report));

    if let Some(path) = &config.report {
        let json: String = report.to_json().wrap_err("Failed to serialize run report")?;
        std::fs::write(path, json)
            .wrap_err_with(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    if !report.verdict.is_pass() {
        error!("{} failed", report.test.id);
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_repeated_int_args_are_collected() {
        let args: Args = Args::try_parse_from([
            "alarmcert",
            "--int-arg",
            "PIXIT.BOOLCFG.TEST_EVENT_TRIGGER_KEY:0x1234",
            "--int-arg",
            "OTHER:5",
            "--endpoint",
            "2",
            "--dut-features",
            "VIS,SPRS",
        ])
        .unwrap();

        let overrides: FileConfig = args.overrides();

        assert_eq!(overrides.int_args.len(), 2);
        assert_eq!(overrides.endpoint, Some(2));
        assert_eq!(overrides.dut_features.as_deref(), Some("VIS,SPRS"));
        assert!(overrides.test.is_none());
    }

    #[tokio::test]
    async fn test_default_run_passes_against_simulator() {
        let args: Args = Args::try_parse_from([
            "alarmcert",
            "--int-arg",
            "PIXIT.BOOLCFG.TEST_EVENT_TRIGGER_KEY:0x00112233445566778899aabbccddeeff",
        ])
        .unwrap();
        let config: RunConfig = RunConfig::resolve(args.overrides()).unwrap();
        let test: Box<dyn ConformanceTest> = find_test_case(&config.test_id)
            .unwrap()
            .build(&config.params)
            .unwrap();
        let device: SimulatedDevice = SimulatedDevice::new(config.dut);

        let report: RunReport = run_test_case(&*test, &device).await;

        assert!(report.verdict.is_pass());
        assert_eq!(report.steps.len(), 13);
    }

    #[test]
    fn test_missing_key_is_rejected_before_running() {
        let args: Args = Args::try_parse_from(["alarmcert"]).unwrap();
        let config: RunConfig = RunConfig::resolve(args.overrides()).unwrap();

        let result = find_test_case(&config.test_id)
            .unwrap()
            .build(&config.params);

        assert!(result.is_err());
    }
}
