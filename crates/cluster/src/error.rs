// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while building or interpreting cluster values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// The attribute id is not part of the Boolean State Configuration cluster.
    UnknownAttribute(u32),
    /// The attribute name is not part of the Boolean State Configuration cluster.
    UnknownAttributeName(String),
    /// A trigger key value needs more than 16 bytes.
    KeyTooLarge(String),
    /// A trigger key could not be parsed as an integer.
    InvalidKey(String),
    /// An attribute value had a different type than expected.
    UnexpectedValueType {
        /// The type the caller asked for.
        expected: &'static str,
        /// The type the value actually holds.
        actual: &'static str,
    },
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAttribute(id) => write!(f, "Unknown attribute id 0x{id:04X}"),
            Self::UnknownAttributeName(name) => write!(f, "Unknown attribute '{name}'"),
            Self::KeyTooLarge(value) => {
                write!(f, "Test event trigger key {value} does not fit in 16 bytes")
            }
            Self::InvalidKey(value) => {
                write!(f, "Test event trigger key '{value}' is not an integer")
            }
            Self::UnexpectedValueType { expected, actual } => {
                write!(f, "Expected a {expected} attribute value, got {actual}")
            }
        }
    }
}

impl std::error::Error for ClusterError {}
