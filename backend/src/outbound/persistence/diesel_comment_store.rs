//! PostgreSQL-backed `CommentStore` implementation using Diesel ORM.
//!
//! This adapter persists comments and serves the oldest-first per-post
//! listings. Rows pass through the validated domain constructors on the way
//! out.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CommentStore, CommentStoreError};
use crate::domain::{Comment, CommentBody, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::{DbPool, PoolError};
use super::schema::comments;

/// Diesel-backed implementation of the comment store port.
#[derive(Clone)]
pub struct DieselCommentStore {
    pool: DbPool,
}

impl DieselCommentStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to comment store errors.
fn map_pool_error(error: PoolError) -> CommentStoreError {
    map_basic_pool_error(error, |message| CommentStoreError::connection(message))
}

/// Map Diesel errors to comment store errors.
fn map_diesel_error(error: diesel::result::Error) -> CommentStoreError {
    map_basic_diesel_error(
        error,
        CommentStoreError::query,
        CommentStoreError::connection,
    )
}

/// Convert a database row into a validated domain comment.
fn row_to_comment(row: CommentRow) -> Result<Comment, CommentStoreError> {
    let body =
        CommentBody::new(row.body).map_err(|err| CommentStoreError::query(err.to_string()))?;

    Ok(Comment::new(
        row.id,
        row.post_id,
        UserId::from_uuid(row.user_id),
        body,
        row.created_at,
    ))
}

#[async_trait]
impl CommentStore for DieselCommentStore {
    async fn insert(&self, comment: &Comment) -> Result<(), CommentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCommentRow {
            id: comment.id(),
            post_id: comment.post_id(),
            user_id: *comment.author().as_uuid(),
            body: comment.body().as_ref(),
            created_at: comment.created_at(),
        };

        diesel::insert_into(comments::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, comment_id: &Uuid) -> Result<Option<Comment>, CommentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = comments::table
            .filter(comments::id.eq(comment_id))
            .select(CommentRow::as_select())
            .first::<CommentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_comment).transpose()
    }

    async fn comments_for_post(&self, post_id: &Uuid) -> Result<Vec<Comment>, CommentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comments::table
            .filter(comments::post_id.eq(post_id))
            .order((comments::created_at.asc(), comments::id.asc()))
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_comment).collect()
    }

    async fn delete(&self, comment_id: &Uuid) -> Result<bool, CommentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(comments::table.filter(comments::id.eq(comment_id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
