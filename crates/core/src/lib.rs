// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure decision logic for the Kestrel dashboard.
//!
//! Nothing in this crate performs I/O. Callers hand in the identity, the
//! rows they read, and the current date; the crate answers who may do what,
//! what the derived statistics are, and which single store mutation a
//! request translates to.

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

mod aggregation;
mod attendance;
mod command;
mod error;
mod policy;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregation::{
    AttendanceRoster, ProjectStats, RECENT_WINDOW_DAYS, is_recent, member_count, project_stats,
    recent_log_count, recent_window_start,
};
pub use attendance::{AttendanceState, AttendanceTransition, plan_toggle};
pub use command::Mutation;
pub use error::CoreError;
pub use policy::{
    AccessDenied, Action, EntityKind, Identity, IdentityState, authorize, authorize_mutation,
    can_perform,
};
