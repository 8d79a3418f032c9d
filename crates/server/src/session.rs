// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller resolution at the server boundary.
//!
//! The caller presents a profile identifier in the `x-profile-id` header.
//! The role is always read from the stored profile.

use axum::{extract::FromRequestParts, http::request::Parts};
use kestrel_api::ProfileSession;
use kestrel_domain::ProfileId;
use tracing::{debug, warn};

use crate::{AppState, HttpError};

/// Header carrying the caller's profile identifier.
pub const PROFILE_HEADER: &str = "x-profile-id";

/// Extractor for the caller's session.
///
/// Extraction never rejects an unknown or absent caller: the session is
/// signed out and the operation itself refuses the request. Only a failed
/// profile lookup rejects, with HTTP 500.
pub struct SessionProfile(pub ProfileSession);

impl FromRequestParts<AppState> for SessionProfile {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claimed: Option<ProfileId> = match parts.headers.get(PROFILE_HEADER) {
            None => None,
            Some(value) => match value.to_str() {
                Ok(raw) if !raw.trim().is_empty() => Some(ProfileId::from(raw.trim())),
                Ok(_) => None,
                Err(_) => {
                    warn!("Ignoring {PROFILE_HEADER} header with invalid encoding");
                    None
                }
            },
        };

        let mut persistence = state.persistence.lock().await;
        let session: ProfileSession = ProfileSession::resolve(&mut *persistence, claimed.as_ref())?;
        drop(persistence);

        debug!(
            profile_id = ?session.profile().map(|profile| profile.id.as_str()),
            "Session resolved"
        );
        Ok(Self(session))
    }
}
