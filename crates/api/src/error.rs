// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use kestrel::{AccessDenied, CoreError};
use kestrel_domain::DomainError;
use kestrel_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The caller's identity is not resolved.
    #[error("Authentication required: {reason}")]
    AuthenticationRequired {
        /// Why the identity is not usable yet.
        reason: String,
    },
    /// Authorization failed - the identity does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role}")]
    Unauthorized {
        /// The operation that was attempted.
        action: String,
        /// Who may perform it (`admin`, `author` or `nobody`).
        required_role: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A destructive operation was requested without confirmation.
    #[error("'{action}' requires explicit confirmation")]
    ConfirmationRequired {
        /// The operation awaiting confirmation.
        action: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The store rejected a write because of a uniqueness or reference
    /// constraint.
    #[error("Conflict: {message}")]
    Conflict {
        /// The store's description of the violated constraint.
        message: String,
    },
    /// The store failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the failure.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::EmptyField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("must not be empty"),
        },
        DomainError::InvalidRole(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("'{value}' is not a role; expected 'admin' or 'member'"),
        },
        DomainError::InvalidDate { value, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{value}': {error}"),
        },
    }
}

/// Translates a policy denial into an API error.
///
/// # Arguments
///
/// * `err` - The denial
/// * `operation` - The name of the attempted operation
#[must_use]
pub fn translate_access_denied(err: AccessDenied, operation: &str) -> ApiError {
    let required_role: &str = match &err {
        AccessDenied::IdentityLoading | AccessDenied::SignedOut => {
            return ApiError::AuthenticationRequired {
                reason: err.to_string(),
            };
        }
        AccessDenied::RequiresAdmin { .. } => "admin",
        AccessDenied::NotOwner { .. } => "author",
        AccessDenied::NotPermitted { .. } => "nobody",
    };
    ApiError::Unauthorized {
        action: operation.to_string(),
        required_role: required_role.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError, operation: &str) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::AccessDenied(denied) => translate_access_denied(denied, operation),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ConstraintViolation(message) => ApiError::Conflict { message },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        other => ApiError::Store {
            message: other.to_string(),
        },
    }
}
