//! Session store integration tests: login recording, restore-on-reload,
//! role purging and logout across all three portals. Positive and negative
//! paths live together per portal scenario.

use tempfile::tempdir;

use railbite::identity::{Portal, Principal, Role, SessionStore};
use railbite::storage::{keys, LocalStore};

fn principal(role: Role) -> Principal {
    Principal {
        id: "u1".into(),
        name: "Asha Verma".into(),
        email: "asha@example.com".into(),
        role,
        phone: Some("9876543210".into()),
    }
}

fn all_portals() -> [(Portal, Role); 3] {
    [
        (Portal::Customer, Role::Customer),
        (Portal::Admin, Role::Admin),
        (Portal::Delivery, Role::Delivery),
    ]
}

fn wrong_role_for(portal: Portal) -> Role {
    match portal {
        Portal::Customer => Role::Admin,
        Portal::Admin => Role::Delivery,
        Portal::Delivery => Role::Customer,
    }
}

#[test]
fn wrong_role_login_is_rejected_without_touching_state() {
    for (portal, _) in all_portals() {
        let tmp = tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        let session = SessionStore::new(portal, store.clone());

        let outcome = session.record_login_success(principal(wrong_role_for(portal)), "tok-1".into());
        assert!(!outcome.success, "portal {:?} accepted a wrong-role login", portal);
        assert!(outcome.message.unwrap().contains("Access denied"));
        assert!(!session.is_authenticated());
        assert!(store.get_raw(portal.user_key()).is_none());
        assert!(store.get_raw(portal.token_key()).is_none());
    }
}

#[test]
fn matching_role_login_persists_and_survives_reload() {
    for (portal, role) in all_portals() {
        let tmp = tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        let session = SessionStore::new(portal, store.clone());

        let outcome = session.record_login_success(principal(role), "tok-2".into());
        assert!(outcome.success);
        assert!(outcome.message.is_none());
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-2"));

        // fresh store handle + session simulates a reload
        let store2 = LocalStore::open(tmp.path()).unwrap();
        let session2 = SessionStore::new(portal, store2);
        assert!(!session2.is_authenticated());
        session2.initialize();
        assert!(session2.is_authenticated());
        assert_eq!(session2.principal(), Some(principal(role)));
        assert_eq!(session2.token().as_deref(), Some("tok-2"));
    }
}

#[test]
fn persisted_wrong_role_is_purged_at_initialize() {
    for (portal, _) in all_portals() {
        let tmp = tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        store.set(portal.user_key(), &principal(wrong_role_for(portal)));
        store.set(portal.token_key(), &"tok-3".to_string());

        let session = SessionStore::new(portal, store.clone());
        session.initialize();
        assert!(!session.is_authenticated());
        // not just rejected: the persisted credential is deleted
        assert!(store.get_raw(portal.user_key()).is_none());
        assert!(store.get_raw(portal.token_key()).is_none());
    }
}

#[test]
fn logout_clears_memory_and_storage() {
    let tmp = tempdir().unwrap();
    let store = LocalStore::open(tmp.path()).unwrap();
    let session = SessionStore::new(Portal::Customer, store.clone());
    assert!(session.record_login_success(principal(Role::Customer), "tok-4".into()).success);

    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.principal().is_none());
    assert!(session.token().is_none());

    let session2 = SessionStore::new(Portal::Customer, LocalStore::open(tmp.path()).unwrap());
    session2.initialize();
    assert!(!session2.is_authenticated(), "logout left something to restore");
}

#[test]
fn malformed_persisted_user_is_treated_as_absent() {
    let tmp = tempdir().unwrap();
    {
        let store = LocalStore::open(tmp.path()).unwrap();
        // wrong shape under the user key, valid token next to it
        store.set(keys::CUSTOMER_USER, &serde_json::json!({ "unexpected": true }));
        store.set(keys::CUSTOMER_TOKEN, &"tok-5".to_string());
    }
    let store = LocalStore::open(tmp.path()).unwrap();
    let session = SessionStore::new(Portal::Customer, store.clone());
    session.initialize();
    assert!(!session.is_authenticated());
    assert!(store.get_raw(keys::CUSTOMER_USER).is_none());
    // the orphaned token goes too: principal and token are cleared together
    assert!(store.get_raw(keys::CUSTOMER_TOKEN).is_none());
}

#[test]
fn token_without_principal_is_purged() {
    let tmp = tempdir().unwrap();
    let store = LocalStore::open(tmp.path()).unwrap();
    store.set(keys::DELIVERY_TOKEN, &"tok-6".to_string());

    let session = SessionStore::new(Portal::Delivery, store.clone());
    session.initialize();
    assert!(!session.is_authenticated());
    assert!(store.get_raw(keys::DELIVERY_TOKEN).is_none());
}

#[test]
fn portals_use_disjoint_key_namespaces() {
    let tmp = tempdir().unwrap();
    let store = LocalStore::open(tmp.path()).unwrap();
    let customer = SessionStore::new(Portal::Customer, store.clone());
    let admin = SessionStore::new(Portal::Admin, store.clone());

    assert!(customer.record_login_success(principal(Role::Customer), "tok-c".into()).success);
    assert!(admin.record_login_success(principal(Role::Admin), "tok-a".into()).success);

    customer.logout();
    assert!(!customer.is_authenticated());
    assert!(admin.is_authenticated(), "customer logout must not touch the admin session");
    assert_eq!(store.get::<String>(keys::ADMIN_TOKEN).as_deref(), Some("tok-a"));
    assert!(store.get_raw(keys::CUSTOMER_TOKEN).is_none());
}
