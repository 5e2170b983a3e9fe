//! Central identity and session management for the three RailBite portals.
//! Keep the public surface thin and split implementation across sub-modules.

mod guard;
mod principal;
mod session;

pub use guard::{GuardDecision, RouteGuard, HOME_PATH};
pub use principal::{Portal, Principal, Role};
pub use session::{LoginOutcome, SessionStore};
