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

//! A simulated Boolean State Configuration server.
//!
//! Stands in for a commissioned device so conformance tests can run end to
//! end without a network. Cluster behaviour lives in the pure [`apply`]
//! function; [`SimulatedDevice`] wraps it behind the `DeviceController` trait.

mod apply;
mod device;
mod profile;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use device::SimulatedDevice;
pub use profile::{DeviceProfile, Fault, FaultTarget};
pub use state::{CLUSTER_REVISION, ClusterState, SUPPORTED_SENSITIVITY_LEVELS};
