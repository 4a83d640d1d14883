//! AccountStore - register, authenticate and current-user lookup over the
//! persisted `users` collection.
//!
//! ## Whole-document updates
//!
//! The store holds no state between calls. Every operation reloads the full
//! collection, and `register` rewrites it in full. `register` runs its
//! read-check-append-write sequence under a store-wide lock, so there is one
//! writer per store. Two stores sharing the same backend are not coordinated.

use crate::{
    AuthOutcome, CurrentUser, FileStorage, KeyValueStorage, Result as StoreErrorResult, StoreError,
};

use chat_core::{AccountCollection, USERS_KEY, UserRecord};

use std::path::PathBuf;

use log::{debug, info, warn};
use tokio::sync::Mutex;

pub struct AccountStore<S> {
    storage: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStorage> AccountStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the persisted collection; nothing stored yet means empty.
    pub async fn load(&self) -> StoreErrorResult<AccountCollection> {
        let Some(json) = self.storage.get_item(USERS_KEY).await? else {
            debug!("No accounts stored yet");
            return Ok(AccountCollection::new());
        };

        let accounts = AccountCollection::from_json(&json).map_err(|e| {
            warn!("Stored accounts could not be decoded: {e}");
            StoreError::corrupted(USERS_KEY, e)
        })?;

        debug!("Loaded {} account(s)", accounts.len());
        Ok(accounts)
    }

    /// Appends `candidate` unless a required field is empty or its email is taken.
    ///
    /// On success the new record becomes the current user.
    pub async fn register(&self, candidate: UserRecord) -> StoreErrorResult<()> {
        candidate.validate().map_err(StoreError::invalid_input)?;

        let _guard = self.write_lock.lock().await;

        let mut accounts = self.load().await?;

        if accounts.contains_email(&candidate.email) {
            warn!("Registration rejected: email already registered");
            return Err(StoreError::duplicate_email(candidate.email));
        }

        accounts.push(candidate);

        let json = accounts.to_json().map_err(StoreError::encode)?;
        self.storage.set_item(USERS_KEY, &json).await?;

        info!("Registered account #{}", accounts.len());
        Ok(())
    }

    /// First account, in registration order, whose email and password both
    /// match exactly. Read-only.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> StoreErrorResult<AuthOutcome> {
        let accounts = self.load().await?;

        let outcome = match accounts.find_by_credentials(email, password) {
            Some(record) => AuthOutcome::Authenticated(record.clone()),
            None => AuthOutcome::NoMatch,
        };

        debug!("Authentication matched: {}", outcome.is_authenticated());
        Ok(outcome)
    }

    /// Last registered account, or `NoUserYet` on an empty store.
    pub async fn current_user(&self) -> StoreErrorResult<CurrentUser> {
        let accounts = self.load().await?;

        Ok(accounts
            .into_records()
            .pop()
            .map_or(CurrentUser::NoUserYet, CurrentUser::Registered))
    }
}

impl AccountStore<FileStorage> {
    /// Moves an undecodable `users` document aside so the store starts empty.
    ///
    /// Returns the backup path, or `None` when the stored accounts decode.
    pub async fn backup_if_corrupted(&self) -> StoreErrorResult<Option<PathBuf>> {
        let _guard = self.write_lock.lock().await;

        match self.load().await {
            Ok(_) => Ok(None),
            Err(StoreError::Corrupted { .. }) => {
                Ok(self.storage.backup_corrupted(USERS_KEY).await?)
            }
            Err(e) => Err(e),
        }
    }
}
