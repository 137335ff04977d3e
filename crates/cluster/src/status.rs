// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Interaction-model status returned by a device for a read or an invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Success,
    Failure,
    InvalidSubscription,
    UnsupportedAccess,
    UnsupportedEndpoint,
    InvalidAction,
    UnsupportedCommand,
    InvalidCommand,
    UnsupportedAttribute,
    ConstraintError,
    UnsupportedWrite,
    ResourceExhausted,
    NotFound,
    Timeout,
    Busy,
    UnsupportedCluster,
    InvalidInState,
    /// A code this crate does not name.
    Other(u8),
}

impl Status {
    /// Returns the wire code of this status.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Success => 0x00,
            Self::Failure => 0x01,
            Self::InvalidSubscription => 0x7D,
            Self::UnsupportedAccess => 0x7E,
            Self::UnsupportedEndpoint => 0x7F,
            Self::InvalidAction => 0x80,
            Self::UnsupportedCommand => 0x81,
            Self::InvalidCommand => 0x85,
            Self::UnsupportedAttribute => 0x86,
            Self::ConstraintError => 0x87,
            Self::UnsupportedWrite => 0x88,
            Self::ResourceExhausted => 0x89,
            Self::NotFound => 0x8B,
            Self::Timeout => 0x94,
            Self::Busy => 0x9C,
            Self::UnsupportedCluster => 0xC3,
            Self::InvalidInState => 0xCB,
            Self::Other(code) => *code,
        }
    }

    /// Decodes a wire status code. Unknown codes are kept as `Other`.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::Success,
            0x01 => Self::Failure,
            0x7D => Self::InvalidSubscription,
            0x7E => Self::UnsupportedAccess,
            0x7F => Self::UnsupportedEndpoint,
            0x80 => Self::InvalidAction,
            0x81 => Self::UnsupportedCommand,
            0x85 => Self::InvalidCommand,
            0x86 => Self::UnsupportedAttribute,
            0x87 => Self::ConstraintError,
            0x88 => Self::UnsupportedWrite,
            0x89 => Self::ResourceExhausted,
            0x8B => Self::NotFound,
            0x94 => Self::Timeout,
            0x9C => Self::Busy,
            0xC3 => Self::UnsupportedCluster,
            0xCB => Self::InvalidInState,
            other => Self::Other(other),
        }
    }

    /// Returns true only for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::InvalidSubscription => "INVALID_SUBSCRIPTION",
            Self::UnsupportedAccess => "UNSUPPORTED_ACCESS",
            Self::UnsupportedEndpoint => "UNSUPPORTED_ENDPOINT",
            Self::InvalidAction => "INVALID_ACTION",
            Self::UnsupportedCommand => "UNSUPPORTED_COMMAND",
            Self::InvalidCommand => "INVALID_COMMAND",
            Self::UnsupportedAttribute => "UNSUPPORTED_ATTRIBUTE",
            Self::ConstraintError => "CONSTRAINT_ERROR",
            Self::UnsupportedWrite => "UNSUPPORTED_WRITE",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::NotFound => "NOT_FOUND",
            Self::Timeout => "TIMEOUT",
            Self::Busy => "BUSY",
            Self::UnsupportedCluster => "UNSUPPORTED_CLUSTER",
            Self::InvalidInState => "INVALID_IN_STATE",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.code())
    }
}
