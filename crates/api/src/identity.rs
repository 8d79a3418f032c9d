// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity resolution.
//!
//! The role used for every decision is the one stored on the caller's
//! profile. A caller only ever supplies a profile identifier.

use kestrel::{Identity, IdentityState};
use kestrel_domain::{Profile, ProfileId};
use kestrel_persistence::DashboardStore;
use tracing::{debug, info};

use crate::error::{ApiError, translate_persistence_error};

/// Source of the current caller's identity.
pub trait IdentityResolver {
    /// Returns what is currently known about the caller.
    fn state(&self) -> &IdentityState;

    /// Forgets the caller; subsequent operations are denied.
    fn sign_out(&mut self);
}

/// A session bound to a stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileSession {
    state: IdentityState,
    profile: Option<Profile>,
}

impl ProfileSession {
    /// Creates a session whose resolution has not finished.
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    /// Creates a session with no caller.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            state: IdentityState::SignedOut,
            profile: None,
        }
    }

    /// Resolves a session from a claimed profile identifier.
    ///
    /// A missing claim or an unknown profile yields a signed-out session.
    ///
    /// # Arguments
    ///
    /// * `store` - The store holding profiles
    /// * `profile_id` - The identifier the caller presented, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the profile lookup fails.
    pub fn resolve<S: DashboardStore>(
        store: &mut S,
        profile_id: Option<&ProfileId>,
    ) -> Result<Self, ApiError> {
        let Some(profile_id) = profile_id else {
            debug!("No profile presented; session is signed out");
            return Ok(Self::signed_out());
        };

        match store
            .get_profile(profile_id)
            .map_err(translate_persistence_error)?
        {
            Some(profile) => {
                debug!(profile_id = %profile.id, role = %profile.role, "Resolved session");
                Ok(Self::from_profile(profile))
            }
            None => {
                info!(profile_id = %profile_id, "Unknown profile presented; session is signed out");
                Ok(Self::signed_out())
            }
        }
    }

    /// Creates a resolved session from a stored profile.
    #[must_use]
    pub fn from_profile(profile: Profile) -> Self {
        let identity: Identity = Identity::new(profile.id.clone(), profile.role);
        Self {
            state: IdentityState::Resolved(identity),
            profile: Some(profile),
        }
    }

    /// Returns the signed-in profile, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}

impl IdentityResolver for ProfileSession {
    fn state(&self) -> &IdentityState {
        &self.state
    }

    fn sign_out(&mut self) {
        if let Some(profile) = self.profile.take() {
            info!(profile_id = %profile.id, "Signed out");
        }
        self.state = IdentityState::SignedOut;
    }
}
