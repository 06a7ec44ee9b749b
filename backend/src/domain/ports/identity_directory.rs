//! Port for reading user identities.

use async_trait::async_trait;

use crate::domain::{User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity directory adapters.
    pub enum IdentityDirectoryError {
        /// Directory connection could not be established.
        Connection { message: String } =>
            "identity directory connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } =>
            "identity directory query failed: {message}",
    }
}

/// Port for looking up registered users.
///
/// Services consult the directory before creating relations that reference
/// another user, so a missing target surfaces as a domain-level not-found
/// instead of a foreign key violation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Find a user by stable identifier.
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>, IdentityDirectoryError>;

    /// Find a user by unique username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, IdentityDirectoryError>;
}

/// Fixture implementation for tests that do not exercise identity lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityDirectory;

#[async_trait]
impl IdentityDirectory for FixtureIdentityDirectory {
    async fn find_by_id(&self, _user_id: &UserId) -> Result<Option<User>, IdentityDirectoryError> {
        Ok(None)
    }

    async fn find_by_username(
        &self,
        _username: &Username,
    ) -> Result<Option<User>, IdentityDirectoryError> {
        Ok(None)
    }
}
