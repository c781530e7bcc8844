//! Profile editing for the logged-in user.

use rust_decimal::Decimal;
use tracing::instrument;

use jeen_core::{Email, Password};

use super::auth::AuthError;
use crate::db::KeyValueStore;
use crate::db::accounts::AccountRepository;
use crate::models::account::{Account, Profile};
use crate::models::session::CurrentUser;

/// Edits submitted from the profile form.
///
/// Text fields are trimmed before they are stored.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bmr: Option<Decimal>,
}

impl ProfileUpdate {
    /// Prefill the form from an account.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            full_name: account.full_name.clone(),
            email: account.email.to_string(),
            phone: account.profile.phone.clone(),
            location: account.profile.location.clone(),
            bmr: account.bmr,
        }
    }
}

/// Profile page service.
pub struct ProfileService<'a, S: KeyValueStore + ?Sized> {
    accounts: AccountRepository<'a, S>,
}

impl<'a, S: KeyValueStore + ?Sized> ProfileService<'a, S> {
    /// Create a new profile service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            accounts: AccountRepository::new(store),
        }
    }

    /// Load the account behind the session.
    ///
    /// A session whose account has disappeared gets a fresh, empty account so
    /// the profile page always has something to edit.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be read or written.
    pub fn load(&self, current: &CurrentUser) -> Result<Account, AuthError> {
        if let Some(account) = self.accounts.find(current.email.as_str())? {
            return Ok(account);
        }

        tracing::warn!(email = %current.email, "Session has no account; recreating");
        let account = Account::new(
            current.full_name.clone(),
            current.email.clone(),
            Password::default(),
        );
        self.accounts.upsert(account.clone())?;
        Ok(account)
    }

    /// Apply profile edits and refresh the session.
    ///
    /// The email may change. The stored list is rewritten once with the
    /// account replaced in place.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the new email is malformed.
    /// Returns `AuthError::Exists` if the new email belongs to another
    /// account; storage is left untouched.
    #[instrument(skip(self, update), fields(email = %current.email))]
    pub fn update(
        &self,
        current: &CurrentUser,
        update: ProfileUpdate,
    ) -> Result<(Account, CurrentUser), AuthError> {
        let existing = self.load(current)?;
        let email = Email::parse(&update.email)?;

        let updated = Account {
            full_name: update.full_name.trim().to_owned(),
            email,
            profile: Profile {
                phone: update.phone.trim().to_owned(),
                location: update.location.trim().to_owned(),
            },
            bmr: update.bmr,
            ..existing
        };

        self.accounts
            .replace(current.email.as_str(), updated.clone())?;

        let user = CurrentUser::from(&updated);
        self.accounts.set_current_user(&user)?;

        tracing::info!(new_email = %user.email, "Profile saved");
        Ok((updated, user))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::services::auth::{AuthService, SignUp};

    fn signed_up(store: &MemoryStore, name: &str, email: &str) -> CurrentUser {
        AuthService::new(store)
            .sign_up(SignUp {
                full_name: name.to_owned(),
                email: email.to_owned(),
                password: "pw".to_owned(),
            })
            .unwrap()
    }

    #[test]
    fn test_load_recreates_missing_account() {
        let store = MemoryStore::new();
        let user = CurrentUser {
            full_name: "Ghost".to_owned(),
            email: Email::parse("ghost@example.com").unwrap(),
        };

        let account = ProfileService::new(&store).load(&user).unwrap();
        assert_eq!(account.full_name, "Ghost");
        assert!(account.password.is_empty());
        assert!(
            AccountRepository::new(&store)
                .find("ghost@example.com")
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn test_update_changes_email_and_session() {
        let store = MemoryStore::new();
        let user = signed_up(&store, "Ann", "ann@example.com");
        let profiles = ProfileService::new(&store);

        let mut form = ProfileUpdate::from_account(&profiles.load(&user).unwrap());
        form.email = " ann.lee@example.com ".to_owned();
        form.phone = " 555-0100 ".to_owned();
        form.bmr = Some(Decimal::new(18505, 1));

        let (account, session) = profiles.update(&user, form).unwrap();
        assert_eq!(account.email.as_str(), "ann.lee@example.com");
        assert_eq!(account.profile.phone, "555-0100");
        assert!(account.password.matches("pw"));
        assert_eq!(account.bmr, Some(Decimal::new(18505, 1)));
        assert_eq!(session.email.as_str(), "ann.lee@example.com");

        let repo = AccountRepository::new(&store);
        assert_eq!(repo.list().unwrap().len(), 1);
        assert!(repo.find("ann@example.com").unwrap().is_none());
        assert_eq!(repo.current_user().unwrap(), Some(session));
    }

    #[test]
    fn test_update_to_taken_email_fails() {
        let store = MemoryStore::new();
        signed_up(&store, "Sam", "sam@example.com");
        let user = signed_up(&store, "Ann", "ann@example.com");
        let repo = AccountRepository::new(&store);
        let before = repo.list().unwrap();

        let profiles = ProfileService::new(&store);
        let mut form = ProfileUpdate::from_account(&profiles.load(&user).unwrap());
        form.email = "SAM@example.com".to_owned();

        let err = profiles.update(&user, form).unwrap_err();
        assert_eq!(err.code(), "EXISTS");
        assert_eq!(repo.list().unwrap(), before);
        assert_eq!(repo.current_user().unwrap(), Some(user));
    }
}
