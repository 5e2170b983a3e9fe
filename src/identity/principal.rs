use serde::{Deserialize, Serialize};

use crate::storage::keys;

/// Closed set of roles the backend issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
    Delivery,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Delivery => "delivery",
        }
    }
}

/// The authenticated identity record returned by the backend on login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One of the three independently gated sections of the application. Each
/// portal has its own login path, required role, and persisted key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    Customer,
    Admin,
    Delivery,
}

impl Portal {
    pub fn required_role(&self) -> Role {
        match self {
            Portal::Customer => Role::Customer,
            Portal::Admin => Role::Admin,
            Portal::Delivery => Role::Delivery,
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Portal::Customer => "/login",
            Portal::Admin => "/admin/login",
            Portal::Delivery => "/delivery/login",
        }
    }

    pub fn token_key(&self) -> &'static str {
        match self {
            Portal::Customer => keys::CUSTOMER_TOKEN,
            Portal::Admin => keys::ADMIN_TOKEN,
            Portal::Delivery => keys::DELIVERY_TOKEN,
        }
    }

    pub fn user_key(&self) -> &'static str {
        match self {
            Portal::Customer => keys::CUSTOMER_USER,
            Portal::Admin => keys::ADMIN_USER,
            Portal::Delivery => keys::DELIVERY_USER,
        }
    }
}
