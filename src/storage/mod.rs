//!
//! railbite storage module
//! -----------------------
//! This module implements the persisted local key/value store the client
//! keeps its session credentials and cached UI state in. Layout is one JSON
//! file per key under a configured root folder, with a write-through
//! in-memory map in front. All callers are single-threaded UI-style code;
//! the handle's own lock is the only coordination needed.
//!
//! Key responsibilities:
//! - Durable set/get/remove of JSON-serializable values.
//! - Treating unreadable or unparsable entries as absent (and purging them)
//!   so a corrupt file can never poison startup.
//! - Disjoint key namespaces per portal (see `keys`).

pub mod keys;
mod kv;
mod local_state;

pub use kv::LocalStore;
pub use local_state::{BookingDetails, CachedNotifications, CartItem, Notification};
