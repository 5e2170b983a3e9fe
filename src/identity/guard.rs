//! Route guards for the three portals.
//!
//! A guard is a pure decision: given the portal's session store and the
//! requested path it resolves to render / redirect-to-login / redirect-home.
//! Guards never navigate themselves; the embedding routing layer owns side
//! effects, which keeps the decision re-evaluable on every render and on any
//! session change (e.g. logout while a protected page is mounted).

use super::principal::Portal;
use super::session::SessionStore;
use crate::storage::keys;

pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Authenticated with the required role: render the wrapped page as-is.
    Render,
    /// Not authenticated: go to this portal's login page.
    RedirectToLogin(&'static str),
    /// Authenticated but with the wrong role: silently go home.
    RedirectHome,
}

pub struct RouteGuard {
    portal: Portal,
}

impl RouteGuard {
    pub fn new(portal: Portal) -> Self {
        Self { portal }
    }

    /// Evaluate the gate for `requested_path`. Checked in order:
    /// unauthenticated, wrong role, pass-through. The customer portal
    /// additionally remembers the requested path so a later login can return
    /// the user to it.
    pub fn evaluate(&self, session: &SessionStore, requested_path: &str) -> GuardDecision {
        let Some(principal) = session.principal() else {
            if self.portal == Portal::Customer {
                // Written through the session's backing store so the
                // destination survives a reload between redirect and login.
                session.backing_store().set(keys::INTENDED_DESTINATION, &requested_path.to_string());
            }
            return GuardDecision::RedirectToLogin(self.portal.login_path());
        };
        if principal.role != self.portal.required_role() {
            return GuardDecision::RedirectHome;
        }
        GuardDecision::Render
    }

    /// Consume the remembered destination, if one was captured. Customer
    /// portal only; other portals never record one.
    pub fn take_intended_destination(&self, session: &SessionStore) -> Option<String> {
        session.backing_store().take::<String>(keys::INTENDED_DESTINATION)
    }
}
