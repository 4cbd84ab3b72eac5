//! Shared pet control state: the enable flag and the gear override lease.
use std::time::Duration;

use bevy::prelude::*;

use super::{components::GearId, errors::GearNotEquippedError, status::PetStatus};

/// A pending gear override, stamped with the time of the last refresh.
#[derive(Debug, Clone, Copy)]
struct GearRequest {
    gear: GearId,
    refreshed_at: Duration,
}

impl GearRequest {
    fn lapsed(&self, now: Duration, grace_period: Duration) -> bool {
        now.saturating_sub(self.refreshed_at) > grace_period
    }
}

/// Session-scoped control state shared by all behavior modules.
///
/// There is exactly one of these per host run and no per-module isolation:
/// the enable flag is last-writer-wins, and every module is expected to call
/// [`set_enabled`](Self::set_enabled) each cycle it runs, otherwise it
/// inherits whatever the previous module left behind.
///
/// The gear override is a soft-state lease. A request stays valid only while
/// it keeps being refreshed; once the grace period elapses without a refresh
/// the next read clears it and control reverts to the user's own choice, so
/// a module that stops running cannot leave the pet misconfigured. Expiry is
/// evaluated inline at read time; there is no background timer.
#[derive(Resource, Debug)]
pub struct PetControl {
    enabled: bool,
    gear_request: Option<GearRequest>,
    grace_period: Duration,
}

impl PetControl {
    pub fn new(grace_period: Duration) -> Self {
        Self {
            enabled: false,
            gear_request: None,
            grace_period,
        }
    }

    /// Last value written via [`set_enabled`](Self::set_enabled).
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Unconditionally overwrites the shared enable flag. Last caller wins.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// Requests a gear override, or relinquishes it with `None`.
    ///
    /// A `Some` request is validated against the hero's currently equipped
    /// gear; on failure the prior override is left exactly as it was. On
    /// success the request is stored and its lease stamped with `now`, so
    /// calling this every cycle keeps the override alive.
    ///
    /// `None` clears the override immediately, distinct from passive expiry.
    pub fn request_gear(
        &mut self,
        gear: Option<GearId>,
        status: &PetStatus,
        now: Duration,
    ) -> Result<(), GearNotEquippedError> {
        match gear {
            Some(gear) => {
                if !status.has_gear(gear) {
                    return Err(GearNotEquippedError::new(gear));
                }
                self.gear_request = Some(GearRequest {
                    gear,
                    refreshed_at: now,
                });
                Ok(())
            }
            None => {
                self.gear_request = None;
                Ok(())
            }
        }
    }

    /// The gear currently requested by a module, if the lease is still live.
    /// Does not mutate state; a lapsed lease simply reads as `None`.
    pub fn requested_gear(&self, now: Duration) -> Option<GearId> {
        self.gear_request
            .filter(|request| !request.lapsed(now, self.grace_period))
            .map(|request| request.gear)
    }

    /// True if a stored request exists but its lease has lapsed.
    pub fn override_lapsed(&self, now: Duration) -> bool {
        self.gear_request
            .is_some_and(|request| request.lapsed(now, self.grace_period))
    }

    /// Resolves the gear the pet should be using right now.
    ///
    /// This is the read that drives lazy expiry: a lapsed request is cleared
    /// in the same call that observes it, then resolution falls back to the
    /// user's configured gear. `None` means "leave the pet on whatever the
    /// user set in game".
    pub fn effective_gear(&mut self, now: Duration, user_gear: Option<GearId>) -> Option<GearId> {
        if self.override_lapsed(now) {
            self.gear_request = None;
        }
        self.gear_request.map(|request| request.gear).or(user_gear)
    }
}
