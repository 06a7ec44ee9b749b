//! PostgreSQL-backed `FollowStore` implementation using Diesel ORM.
//!
//! This adapter persists follow edges and answers relationship and count
//! queries. Duplicate inserts surface from the composite primary key rather
//! than from a read-then-write check, so concurrent followers race on the
//! constraint.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{FollowStore, FollowStoreError};
use crate::domain::{FollowEdge, UserId};

use super::diesel_basic_error_mapping::{count_to_u64, map_basic_diesel_error, map_basic_pool_error};
use super::models::NewFollowRow;
use super::pool::{DbPool, PoolError};
use super::schema::follows;

/// Diesel-backed implementation of the follow store port.
#[derive(Clone)]
pub struct DieselFollowStore {
    pool: DbPool,
}

impl DieselFollowStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to follow store errors.
fn map_pool_error(error: PoolError) -> FollowStoreError {
    map_basic_pool_error(error, |message| FollowStoreError::connection(message))
}

/// Map Diesel errors to follow store errors.
fn map_diesel_error(error: diesel::result::Error) -> FollowStoreError {
    map_basic_diesel_error(
        error,
        FollowStoreError::query,
        FollowStoreError::connection,
    )
}

/// Map an insert failure, promoting unique violations to the duplicate variant.
fn map_insert_error(error: diesel::result::Error, edge: &FollowEdge) -> FollowStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) = error {
        return FollowStoreError::duplicate_edge(
            edge.follower().to_string(),
            edge.following().to_string(),
        );
    }
    map_diesel_error(error)
}

#[async_trait]
impl FollowStore for DieselFollowStore {
    async fn insert(&self, edge: &FollowEdge) -> Result<(), FollowStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewFollowRow {
            follower_id: *edge.follower().as_uuid(),
            following_id: *edge.following().as_uuid(),
            created_at: edge.created_at(),
        };

        diesel::insert_into(follows::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, edge))
    }

    async fn delete(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<bool, FollowStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            follows::table.filter(
                follows::follower_id
                    .eq(follower.as_uuid())
                    .and(follows::following_id.eq(following.as_uuid())),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn exists(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<bool, FollowStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = follows::table
            .filter(
                follows::follower_id
                    .eq(follower.as_uuid())
                    .and(follows::following_id.eq(following.as_uuid())),
            )
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count > 0)
    }

    async fn following_ids(&self, follower: &UserId) -> Result<Vec<UserId>, FollowStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let ids: Vec<Uuid> = follows::table
            .filter(follows::follower_id.eq(follower.as_uuid()))
            .select(follows::following_id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(ids.into_iter().map(UserId::from_uuid).collect())
    }

    async fn follower_count(&self, user: &UserId) -> Result<u64, FollowStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = follows::table
            .filter(follows::following_id.eq(user.as_uuid()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count_to_u64(count))
    }

    async fn following_count(&self, user: &UserId) -> Result<u64, FollowStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = follows::table
            .filter(follows::follower_id.eq(user.as_uuid()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count_to_u64(count))
    }
}
