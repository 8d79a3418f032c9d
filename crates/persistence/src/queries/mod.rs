// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! ## Module Organization
//!
//! - `profiles`: Profile directory lookups
//! - `projects`: Project listings and membership counts
//! - `logs`: Project log listings and recent-activity counts
//! - `inventory`: Inventory listings
//! - `attendance`: Attendance rows per date

pub mod attendance;
pub mod inventory;
pub mod logs;
pub mod profiles;
pub mod projects;
