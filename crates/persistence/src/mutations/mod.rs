// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for persistence layer.
//!
//! Every function here issues exactly one write statement. Deletes report
//! the number of rows removed; removing a missing row is not an error.

pub mod attendance;
pub mod inventory;
pub mod logs;
pub mod profiles;
pub mod projects;
