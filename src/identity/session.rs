use std::sync::Arc;

use tracing::debug;

use super::principal::{Portal, Principal};
use crate::storage::LocalStore;
use crate::tprintln;

#[derive(Debug, Clone)]
struct SessionState {
    principal: Principal,
    token: String,
}

/// Outcome of recording a login. Role mismatch is the only modeled failure;
/// it is a value, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl LoginOutcome {
    fn ok() -> Self {
        Self { success: true, message: None }
    }

    fn denied(portal: Portal) -> Self {
        Self {
            success: false,
            message: Some(format!(
                "Access denied. This account is not a {} account.",
                portal.required_role().as_str()
            )),
        }
    }
}

/// Per-portal holder of the current principal and bearer token, backed by the
/// persisted local store. Constructed explicitly per portal; there are no
/// ambient singletons, so two stores never share state by accident.
///
/// Invariant: `principal` and `token` are set or cleared together, both in
/// memory and on disk.
#[derive(Clone)]
pub struct SessionStore {
    portal: Portal,
    store: LocalStore,
    state: Arc<parking_lot::RwLock<Option<SessionState>>>,
}

impl SessionStore {
    pub fn new(portal: Portal, store: LocalStore) -> Self {
        Self { portal, store, state: Arc::new(parking_lot::RwLock::new(None)) }
    }

    pub fn portal(&self) -> Portal {
        self.portal
    }

    /// The persisted store this session writes through. The guard layer uses
    /// it for the intended-destination handoff.
    pub fn backing_store(&self) -> LocalStore {
        self.store.clone()
    }

    /// Restore a persisted session, if any. A persisted principal whose role
    /// does not match this portal is purged on the spot, as is any entry the
    /// store cannot deserialize (the store handles that itself). Idempotent;
    /// side effect only.
    pub fn initialize(&self) {
        let principal = self.store.get::<Principal>(self.portal.user_key());
        let token = self.store.get::<String>(self.portal.token_key());
        match (principal, token) {
            (Some(principal), Some(token)) => {
                if principal.role == self.portal.required_role() {
                    debug!(target: "railbite::session", "restored {} session for {}", principal.role.as_str(), principal.email);
                    *self.state.write() = Some(SessionState { principal, token });
                } else {
                    tprintln!("session.initialize purge: role {} does not fit portal {:?}", principal.role.as_str(), self.portal);
                    self.purge_persisted();
                    *self.state.write() = None;
                }
            }
            // One half without the other violates the set-together invariant;
            // drop whichever half exists.
            _ => {
                self.purge_persisted();
                *self.state.write() = None;
            }
        }
    }

    /// Record a successful backend login. The principal's role must match
    /// this portal; a mismatch returns a failure outcome without touching
    /// memory or storage.
    pub fn record_login_success(&self, principal: Principal, token: String) -> LoginOutcome {
        if principal.role != self.portal.required_role() {
            return LoginOutcome::denied(self.portal);
        }
        self.store.set(self.portal.user_key(), &principal);
        self.store.set(self.portal.token_key(), &token);
        debug!(target: "railbite::session", "login recorded for {} on {:?}", principal.email, self.portal);
        *self.state.write() = Some(SessionState { principal, token });
        LoginOutcome::ok()
    }

    /// Clear persisted credentials and in-memory state. No network call,
    /// always succeeds.
    pub fn logout(&self) {
        self.purge_persisted();
        *self.state.write() = None;
        debug!(target: "railbite::session", "logged out of {:?}", self.portal);
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_some()
    }

    pub fn principal(&self) -> Option<Principal> {
        self.state.read().as_ref().map(|s| s.principal.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.token.clone())
    }

    fn purge_persisted(&self) {
        self.store.remove(self.portal.user_key());
        self.store.remove(self.portal.token_key());
    }
}
