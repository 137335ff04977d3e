// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Out-of-band test parameters.
//!
//! Harnesses pass PIXIT values on the command line as `NAME:VALUE` pairs.
//! `TestParams` collects them once; each test case turns the bag into its
//! own validated configuration before any step runs.

use crate::error::ConformanceError;
use alarmcert_cluster::EndpointId;
use std::collections::BTreeMap;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// An integer argument (`--int-arg`).
    Int(u128),
    /// A string argument (`--string-arg`).
    Str(String),
}

/// Keyed parameters plus the endpoint under test.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestParams {
    endpoint: EndpointId,
    values: BTreeMap<String, ParamValue>,
}

impl TestParams {
    /// Creates an empty parameter set targeting `endpoint`.
    #[must_use]
    pub const fn new(endpoint: EndpointId) -> Self {
        Self {
            endpoint,
            values: BTreeMap::new(),
        }
    }

    /// The endpoint under test.
    #[must_use]
    pub const fn endpoint(&self) -> EndpointId {
        self.endpoint
    }

    /// Sets an integer parameter, replacing any earlier value.
    pub fn insert_int(&mut self, name: &str, value: u128) {
        self.values.insert(name.to_string(), ParamValue::Int(value));
    }

    /// Sets a string parameter, replacing any earlier value.
    pub fn insert_string(&mut self, name: &str, value: &str) {
        self.values
            .insert(name.to_string(), ParamValue::Str(value.to_string()));
    }

    /// Parses and stores an `--int-arg` pair (`NAME:VALUE`, decimal or `0x` hex).
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the pair or the integer is malformed.
    pub fn parse_int_arg(&mut self, pair: &str) -> Result<(), ConformanceError> {
        let (name, value) = split_pair(pair, "--int-arg")?;
        let parsed: u128 = parse_int(value).ok_or_else(|| ConformanceError::Precondition {
            message: format!("{name}: '{value}' is not an unsigned integer of at most 128 bits"),
        })?;
        self.insert_int(name, parsed);
        Ok(())
    }

    /// Parses and stores a `--string-arg` pair (`NAME:VALUE`).
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the pair is malformed.
    pub fn parse_string_arg(&mut self, pair: &str) -> Result<(), ConformanceError> {
        let (name, value) = split_pair(pair, "--string-arg")?;
        self.insert_string(name, value);
        Ok(())
    }

    /// Returns true if a parameter with this name was supplied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns an integer parameter.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<u128> {
        match self.values.get(name) {
            Some(ParamValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a string parameter.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParamValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a required integer parameter.
    ///
    /// # Errors
    ///
    /// Returns a precondition error naming how to supply the parameter.
    pub fn require_int(&self, name: &str) -> Result<u128, ConformanceError> {
        match self.values.get(name) {
            Some(ParamValue::Int(value)) => Ok(*value),
            Some(ParamValue::Str(_)) => Err(ConformanceError::Precondition {
                message: format!("{name} must be passed with --int-arg, not --string-arg"),
            }),
            None => Err(ConformanceError::Precondition {
                message: format!(
                    "{name} must be included on the command line in the --int-arg flag as {name}:<key>"
                ),
            }),
        }
    }
}

fn split_pair<'a>(pair: &'a str, flag: &str) -> Result<(&'a str, &'a str), ConformanceError> {
    match pair.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(ConformanceError::Precondition {
            message: format!("{flag} expects NAME:VALUE, got '{pair}'"),
        }),
    }
}

fn parse_int(value: &str) -> Option<u128> {
    let cleaned: String = value.replace('_', "");
    if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        return u128::from_str_radix(hex, 16).ok();
    }
    cleaned.parse::<u128>().ok()
}
