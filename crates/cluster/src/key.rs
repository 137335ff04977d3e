// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClusterError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Length in bytes of a test-event-trigger enable key.
pub const TEST_EVENT_TRIGGER_KEY_LEN: usize = 16;

/// Shared secret that unlocks a device's test-event-injection mode.
///
/// Harnesses pass the key as an integer; on the wire it is the 16-byte
/// big-endian encoding of that integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestEventTriggerKey([u8; TEST_EVENT_TRIGGER_KEY_LEN]);

impl TestEventTriggerKey {
    /// Wraps raw key bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; TEST_EVENT_TRIGGER_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Encodes an integer key as 16 big-endian bytes.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns the key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; TEST_EVENT_TRIGGER_KEY_LEN] {
        &self.0
    }

    /// An all-zero key never enables test events.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }
}

impl FromStr for TestEventTriggerKey {
    type Err = ClusterError;

    /// Parses a decimal or `0x`-prefixed hexadecimal integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let (digits, radix) = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16),
            None => (trimmed, 10),
        };
        let digits: String = digits.replace('_', "");
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(ClusterError::InvalidKey(s.to_string()));
        }

        u128::from_str_radix(&digits, radix)
            .map(Self::from_u128)
            .map_err(|_| ClusterError::KeyTooLarge(s.to_string()))
    }
}

impl std::fmt::Display for TestEventTriggerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
