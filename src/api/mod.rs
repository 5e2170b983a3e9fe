//! REST client for the RailBite backend.
//!
//! One async method per backend endpoint, grouped by domain sub-module. All
//! methods return the backend's response envelope unchanged apart from
//! image-URL resolution; transport and non-2xx failures come back as
//! `AppError` so every caller branches on kind instead of digging through a
//! raw transport exception.

mod auth;
mod client;
mod contact;
mod delivery;
mod menu;
mod notifications;
mod orders;
pub mod payment;
mod reports;
mod reviews;
mod users;

pub use auth::{AuthEnvelope, ForgotPasswordResponse};
pub use client::{Ack, ApiClient, Envelope};
pub use contact::ContactMessage;
pub use delivery::StaffMember;
pub use menu::{MenuItem, MenuItemUpsert};
pub use notifications::UnreadCount;
pub use orders::{Order, OrderLine, PlaceOrderRequest};
pub use reports::{PopularItem, SalesSummary};
pub use reviews::Review;
