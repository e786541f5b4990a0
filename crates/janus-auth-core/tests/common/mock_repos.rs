//! Mock repositories for testing

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use janus_db::{DbError, DbResult, NewUser, UserRepository, UserRow};

/// In-memory user repository for testing
#[derive(Default)]
pub struct MockUserRepository {
    users: DashMap<String, UserRow>,
    /// When set, every call fails as if the backing store were down
    unavailable: AtomicBool,
    /// When set, `exists` reports false regardless of contents, forcing
    /// registration to race on the insert itself
    blind_exists: AtomicBool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// The stored hash for a username, if any
    #[allow(dead_code)]
    pub fn stored_hash(&self, username: &str) -> Option<String> {
        self.users.get(username).map(|row| row.password_hash.clone())
    }

    /// Simulate the backing store going down
    #[allow(dead_code)]
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    /// Make the existence precheck lie, exposing the insert-time race path
    #[allow(dead_code)]
    pub fn set_blind_exists(&self, blind: bool) {
        self.blind_exists.store(blind, Ordering::SeqCst);
    }

    fn check_up(&self) -> DbResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn exists(&self, username: &str) -> DbResult<bool> {
        self.check_up()?;
        if self.blind_exists.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self.users.contains_key(username))
    }

    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>> {
        self.check_up()?;
        Ok(self.users.get(username).map(|row| row.value().clone()))
    }

    async fn insert_if_absent(&self, user: NewUser) -> DbResult<bool> {
        self.check_up()?;
        match self.users.entry(user.username.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => Ok(false),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(UserRow {
                    username: user.username,
                    password_hash: user.password_hash,
                    created_at: Utc::now(),
                });
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_if_absent_is_first_writer_wins() {
        let repo = MockUserRepository::new();

        let first = repo
            .insert_if_absent(NewUser {
                username: "alice".to_string(),
                password_hash: "hash-one".to_string(),
            })
            .await
            .unwrap();
        assert!(first);

        let second = repo
            .insert_if_absent(NewUser {
                username: "alice".to_string(),
                password_hash: "hash-two".to_string(),
            })
            .await
            .unwrap();
        assert!(!second);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.stored_hash("alice").unwrap(), "hash-one");
    }

    #[tokio::test]
    async fn test_unavailable_repo_errors() {
        let repo = MockUserRepository::new();
        repo.set_unavailable(true);
        assert!(repo.exists("alice").await.is_err());
        assert!(repo.find_by_username("alice").await.is_err());
    }
}
