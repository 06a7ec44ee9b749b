//! PostgreSQL-backed `IdentityDirectory` implementation using Diesel ORM.
//!
//! This adapter resolves user identities by id or username. Rows pass through
//! the validated domain constructors, so a stored username that no longer
//! satisfies the handle rules surfaces as a query error.

use async_trait::async_trait;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{IdentityDirectory, IdentityDirectoryError};
use crate::domain::{User, UserId, Username};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the identity directory port.
#[derive(Clone)]
pub struct DieselIdentityDirectory {
    pool: DbPool,
}

impl DieselIdentityDirectory {
    /// Create a new directory with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to identity directory errors.
fn map_pool_error(error: PoolError) -> IdentityDirectoryError {
    map_basic_pool_error(error, |message| IdentityDirectoryError::connection(message))
}

/// Map Diesel errors to identity directory errors.
fn map_diesel_error(error: diesel::result::Error) -> IdentityDirectoryError {
    map_basic_diesel_error(
        error,
        IdentityDirectoryError::query,
        IdentityDirectoryError::connection,
    )
}

/// Convert a database row into a validated domain user.
fn row_to_user(row: UserRow) -> Result<User, IdentityDirectoryError> {
    let username =
        Username::new(row.username).map_err(|err| IdentityDirectoryError::query(err.to_string()))?;

    Ok(User::new(UserId::from_uuid(row.id), username))
}

#[async_trait]
impl IdentityDirectory for DieselIdentityDirectory {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>, IdentityDirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::id.eq(user_id.as_uuid()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, IdentityDirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}
