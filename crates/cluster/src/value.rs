// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bitmaps::AlarmModeBitmap;
use crate::error::ClusterError;
use serde::{Deserialize, Serialize};

/// A decoded attribute value as returned by a device read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum AttributeValue {
    /// An 8-bit bitmap (alarm modes, sensor fault).
    Bitmap8(u8),
    /// A 32-bit bitmap (feature map).
    Bitmap32(u32),
    /// An unsigned 8-bit integer (sensitivity levels).
    U8(u8),
    /// An unsigned 16-bit integer (cluster revision).
    U16(u16),
}

impl AttributeValue {
    const fn type_name(&self) -> &'static str {
        match self {
            Self::Bitmap8(_) => "bitmap8",
            Self::Bitmap32(_) => "bitmap32",
            Self::U8(_) => "uint8",
            Self::U16(_) => "uint16",
        }
    }

    /// Returns the value as a 32-bit feature map.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a 32-bit bitmap.
    pub const fn as_feature_map(&self) -> Result<u32, ClusterError> {
        match self {
            Self::Bitmap32(bits) => Ok(*bits),
            other => Err(ClusterError::UnexpectedValueType {
                expected: "bitmap32",
                actual: other.type_name(),
            }),
        }
    }

    /// Returns the value as an alarm-mode bitmap, keeping unknown bits.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an 8-bit bitmap.
    pub const fn as_alarm_modes(&self) -> Result<AlarmModeBitmap, ClusterError> {
        match self {
            Self::Bitmap8(bits) => Ok(AlarmModeBitmap::from_bits_retain(*bits)),
            other => Err(ClusterError::UnexpectedValueType {
                expected: "bitmap8",
                actual: other.type_name(),
            }),
        }
    }

    /// Returns the raw value widened to 32 bits, for masking and reports.
    #[must_use]
    pub fn raw(&self) -> u32 {
        match self {
            Self::Bitmap8(v) | Self::U8(v) => u32::from(*v),
            Self::Bitmap32(v) => *v,
            Self::U16(v) => u32::from(*v),
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bitmap8(v) => write!(f, "0b{v:08b}"),
            Self::Bitmap32(v) => write!(f, "0x{v:08X}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
        }
    }
}
