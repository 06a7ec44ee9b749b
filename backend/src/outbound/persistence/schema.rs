//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// User accounts table.
    ///
    /// Stores registered users. The `id` column is the primary key (UUID v4)
    /// and `username` carries a unique constraint.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique handle (letters, digits, underscores).
        username -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Follow edges table.
    ///
    /// One row per directed follow relationship. The composite primary key
    /// makes the (follower, following) pair unique by construction; secondary
    /// indexes on each column back the enumeration and count queries.
    follows (follower_id, following_id) {
        /// User who follows.
        follower_id -> Uuid,
        /// User being followed.
        following_id -> Uuid,
        /// When the edge was created.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Posts table.
    ///
    /// Indexed on `user_id` for author timelines and feed candidate reads.
    posts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Authoring user.
        user_id -> Uuid,
        /// Post text (max 500 characters after trimming).
        body -> Text,
        /// When the post was created.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Likes table.
    ///
    /// The composite primary key makes the (user, post) pair unique by
    /// construction.
    likes (user_id, post_id) {
        /// User who liked the post.
        user_id -> Uuid,
        /// Liked post.
        post_id -> Uuid,
        /// When the like was recorded.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Comments table.
    ///
    /// Indexed on `post_id` for per-post listings.
    comments (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Commented post.
        post_id -> Uuid,
        /// Authoring user.
        user_id -> Uuid,
        /// Comment text (max 500 characters after trimming).
        body -> Text,
        /// When the comment was created.
        created_at -> Timestamptz,
    }
}
