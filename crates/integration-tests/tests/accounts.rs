//! Sign-up, login and profile editing against a shared store.

#![allow(clippy::unwrap_used)]

use jeen_integration_tests::memory_site;
use jeen_storefront::db::accounts::AccountRepository;
use jeen_storefront::db::{KeyValueStore, keys};
use jeen_storefront::services::{AuthError, AuthResponse, ProfileUpdate, SignUp};

fn sign_up(email: &str, password: &str) -> SignUp {
    SignUp {
        full_name: "  Ann Lee ".to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================================
// Login
// =============================================================================

#[test]
fn test_login_unknown_account() {
    let site = memory_site();

    let response = AuthResponse::from(site.auth().log_in("a@b.com", "x"));

    assert!(!response.ok);
    assert_eq!(response.code, Some("NOT_FOUND"));
    assert_eq!(
        response.message.as_deref(),
        Some("Account not found. Please sign up.")
    );
}

#[test]
fn test_login_wrong_then_right_password() {
    let site = memory_site();
    let auth = site.auth();
    auth.sign_up(sign_up("a@b.com", "x")).unwrap();
    auth.sign_out().unwrap();

    let wrong = AuthResponse::from(auth.log_in("a@b.com", "y"));
    assert_eq!(wrong.code, Some("WRONG_PASSWORD"));
    assert!(auth.current_user().unwrap().is_none());

    let right = AuthResponse::from(auth.log_in("A@B.com", "x"));
    assert_eq!(right, AuthResponse::ok());

    let user = auth.current_user().unwrap().unwrap();
    assert_eq!(user.full_name, "Ann Lee");
    assert_eq!(user.email.as_str(), "a@b.com");
}

// =============================================================================
// Sign-up
// =============================================================================

#[test]
fn test_sign_up_twice_is_exists() {
    let site = memory_site();
    let auth = site.auth();

    auth.sign_up(sign_up("a@b.com", "x")).unwrap();
    let err = auth.sign_up(sign_up("  A@B.COM ", "z")).unwrap_err();

    assert!(matches!(err, AuthError::Exists));
    assert_eq!(AuthResponse::from(&err).code, Some("EXISTS"));
    assert_eq!(
        AccountRepository::new(site.store()).list().unwrap().len(),
        1
    );
}

#[test]
fn test_sign_up_rejects_malformed_email() {
    let site = memory_site();

    let err = site.auth().sign_up(sign_up("not-an-email", "x")).unwrap_err();

    assert_eq!(err.code(), "INVALID_EMAIL");
    assert!(site.auth().current_user().unwrap().is_none());
}

#[test]
fn test_sign_up_starts_empty_profile() {
    let site = memory_site();
    site.auth().sign_up(sign_up("a@b.com", "x")).unwrap();

    let account = AccountRepository::new(site.store())
        .find("a@b.com")
        .unwrap()
        .unwrap();

    assert_eq!(account.full_name, "Ann Lee");
    assert!(account.profile.phone.is_empty());
    assert!(account.preferences.goal.is_empty());
    assert_eq!(account.bmr, None);
}

#[test]
fn test_odd_records_do_not_cost_the_account_list() {
    let site = memory_site();
    let stored = serde_json::json!([
        { "fullName": "Ann Lee", "email": "ann@example.com", "password": "x", "bmr": 1850.5 },
        { "fullName": "No Email", "password": "y" }
    ]);
    site.store().set(keys::ACCOUNTS, &stored.to_string()).unwrap();

    let auth = site.auth();
    assert_eq!(
        AuthResponse::from(auth.log_in("ann@example.com", "x")),
        AuthResponse::ok()
    );
    auth.sign_out().unwrap();
    let err = auth.sign_up(sign_up("ann@example.com", "z")).unwrap_err();
    assert!(matches!(err, AuthError::Exists));
    auth.sign_up(sign_up("bob@example.com", "b")).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&site.store().get(keys::ACCOUNTS).unwrap().unwrap()).unwrap();
    let raw = raw.as_array().unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[0]["bmr"], serde_json::json!(1850.5));
    assert_eq!(raw[1], stored[1]);
    assert_eq!(raw[2]["email"], "bob@example.com");
}

// =============================================================================
// Profile
// =============================================================================

#[test]
fn test_email_change_moves_account_and_session() {
    let site = memory_site();
    let current = site.auth().sign_up(sign_up("a@b.com", "x")).unwrap();
    let profile = site.profile();

    let update = ProfileUpdate {
        email: "new@b.com".to_owned(),
        phone: " 555-0100 ".to_owned(),
        ..ProfileUpdate::from_account(&profile.load(&current).unwrap())
    };
    let (account, user) = profile.update(&current, update).unwrap();

    assert_eq!(account.profile.phone, "555-0100");
    assert_eq!(user.email.as_str(), "new@b.com");
    assert_eq!(site.auth().current_user().unwrap(), Some(user));

    let accounts = AccountRepository::new(site.store());
    assert!(accounts.find("a@b.com").unwrap().is_none());
    assert_eq!(accounts.list().unwrap().len(), 1);

    site.auth().sign_out().unwrap();
    assert!(site.auth().log_in("new@b.com", "x").is_ok());
}

#[test]
fn test_email_change_to_taken_address_is_refused() {
    let site = memory_site();
    site.auth().sign_up(sign_up("other@b.com", "y")).unwrap();
    let current = site.auth().sign_up(sign_up("a@b.com", "x")).unwrap();
    let before = AccountRepository::new(site.store()).list().unwrap();

    let profile = site.profile();
    let update = ProfileUpdate {
        email: "Other@b.com".to_owned(),
        ..ProfileUpdate::from_account(&profile.load(&current).unwrap())
    };
    let err = profile.update(&current, update).unwrap_err();

    assert_eq!(err.code(), "EXISTS");
    assert_eq!(AccountRepository::new(site.store()).list().unwrap(), before);
    assert_eq!(site.auth().current_user().unwrap(), Some(current));
}
