//! Persisted key names, unified per portal.
//!
//! Each portal owns a disjoint `<portal>_token` / `<portal>_user` pair; the
//! remaining keys hold non-auth client state.

pub const CUSTOMER_TOKEN: &str = "customer_token";
pub const CUSTOMER_USER: &str = "customer_user";
pub const ADMIN_TOKEN: &str = "admin_token";
pub const ADMIN_USER: &str = "admin_user";
pub const DELIVERY_TOKEN: &str = "delivery_token";
pub const DELIVERY_USER: &str = "delivery_user";

pub const CART: &str = "cart";
pub const ORDER_TYPE: &str = "order_type";
pub const BOOKING_DETAILS: &str = "booking_details";
pub const LAST_ORDER: &str = "last_order";
pub const NOTIFICATIONS_CACHE: &str = "notifications_cache";
pub const INTENDED_DESTINATION: &str = "intended_destination";
