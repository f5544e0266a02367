// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Loadstone workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifies the structural family of a plugin.
///
/// Every plugin belongs to exactly one base. The base name is what the
/// `--plugin-base` CLI filter compares against, using the `Display` form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum PluginBase {
    /// A workload definition executed against a platform.
    Scenario,
    /// A load generation strategy driving scenario iterations.
    Runner,
    /// An environment preparation step wrapped around a scenario run.
    Context,
    /// A one-shot action triggered at a point inside a run.
    Hook,
}
