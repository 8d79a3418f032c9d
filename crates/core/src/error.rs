// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kestrel_domain::DomainError;
use thiserror::Error;

use crate::policy::AccessDenied;

/// Errors raised by core decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The access policy denied the operation.
    #[error("Access denied: {0}")]
    AccessDenied(#[from] AccessDenied),
}
