//! Typed non-auth client state persisted in the local store.
//!
//! These are plain flat records consumed and displayed as-is; the backend is
//! the source of truth for everything here except the cart and booking form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{keys, LocalStore};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Where on the train the order should go.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingDetails {
    #[serde(default)]
    pub train_number: Option<String>,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub seat: Option<String>,
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub delivery_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Last fetched notification list, kept so the UI has something to show
/// while the next poll is in flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedNotifications {
    pub items: Vec<Notification>,
    pub fetched_at: DateTime<Utc>,
}

impl LocalStore {
    pub fn cart(&self) -> Vec<CartItem> {
        self.get::<Vec<CartItem>>(keys::CART).unwrap_or_default()
    }

    pub fn save_cart(&self, items: &[CartItem]) {
        self.set(keys::CART, &items.to_vec());
    }

    pub fn clear_cart(&self) {
        self.remove(keys::CART);
    }

    pub fn order_type(&self) -> Option<String> {
        self.get(keys::ORDER_TYPE)
    }

    pub fn save_order_type(&self, order_type: &str) {
        self.set(keys::ORDER_TYPE, &order_type.to_string());
    }

    pub fn booking_details(&self) -> Option<BookingDetails> {
        self.get(keys::BOOKING_DETAILS)
    }

    pub fn save_booking_details(&self, details: &BookingDetails) {
        self.set(keys::BOOKING_DETAILS, details);
    }

    /// Order id remembered after checkout so the tracking page can resume.
    pub fn last_order(&self) -> Option<String> {
        self.get(keys::LAST_ORDER)
    }

    pub fn save_last_order(&self, order_id: &str) {
        self.set(keys::LAST_ORDER, &order_id.to_string());
    }

    pub fn cached_notifications(&self) -> Option<CachedNotifications> {
        self.get(keys::NOTIFICATIONS_CACHE)
    }

    pub fn cache_notifications(&self, items: Vec<Notification>) {
        let cached = CachedNotifications { items, fetched_at: Utc::now() };
        self.set(keys::NOTIFICATIONS_CACHE, &cached);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cart_roundtrip() {
        let tmp = tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        assert!(store.cart().is_empty());
        let items = vec![CartItem {
            item_id: "m1".into(),
            name: "Veg Thali".into(),
            price: 120.0,
            quantity: 2,
            image_url: None,
        }];
        store.save_cart(&items);
        assert_eq!(store.cart(), items);
        store.clear_cart();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn booking_details_allow_partial_fill() {
        let tmp = tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        let details = BookingDetails { train_number: Some("12951".into()), seat: Some("B3-42".into()), ..Default::default() };
        store.save_booking_details(&details);
        assert_eq!(store.booking_details(), Some(details));
    }

    #[test]
    fn notification_cache_keeps_fetch_time() {
        let tmp = tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        store.cache_notifications(vec![Notification {
            id: "n1".into(),
            title: "Order update".into(),
            message: "Your order is out for delivery".into(),
            read: false,
            created_at: None,
        }]);
        let cached = store.cached_notifications().unwrap();
        assert_eq!(cached.items.len(), 1);
        assert!(cached.fetched_at <= Utc::now());
    }
}
