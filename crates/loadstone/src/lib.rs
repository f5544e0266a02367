// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Library surface of the `loadstone` binary.
//!
//! The query engine and presenter live here so integration tests can drive
//! them directly; `main.rs` only parses arguments and dispatches.

pub mod plugin;
pub mod table;
