// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed model of the Boolean State Configuration cluster.
//!
//! Everything the conformance tests need to talk about a device lives here:
//! cluster, attribute and command identifiers, the feature and alarm-mode
//! bitmaps, interaction-model status codes, attribute values and the
//! test-event-trigger key. Nothing in this crate performs I/O.

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

mod bitmaps;
mod capabilities;
mod command;
mod error;
mod ids;
mod key;
mod status;
mod value;

#[cfg(test)]
mod tests;

pub use bitmaps::{AlarmModeBitmap, Feature};
pub use capabilities::Capabilities;
pub use command::{ClusterCommand, SENSOR_TRIGGER, SENSOR_UNTRIGGER};
pub use error::ClusterError;
pub use ids::{
    AttributeId, BOOLEAN_STATE_CONFIGURATION, BooleanStateConfigurationAttribute, ClusterId,
    EndpointId, GENERAL_DIAGNOSTICS, ROOT_ENDPOINT,
};
pub use key::{TEST_EVENT_TRIGGER_KEY_LEN, TestEventTriggerKey};
pub use status::Status;
pub use value::AttributeValue;
