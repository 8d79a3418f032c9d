// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required text field is empty after trimming whitespace.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// The name of the offending field.
        field: &'static str,
    },
    /// A role string did not name a known role.
    #[error("Invalid role: '{0}'. Must be 'admin' or 'member'")]
    InvalidRole(String),
    /// A calendar date could not be parsed.
    #[error("Failed to parse date '{value}': {error}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// The parser's explanation.
        error: String,
    },
}
