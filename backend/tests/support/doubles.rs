//! In-memory store implementations backing the HTTP behaviour suites.
//!
//! Each store keeps its rows in an `Arc<Mutex<Vec<_>>>` shared between the
//! running server and the test world, so scenarios can seed state directly
//! and the real domain services operate on it end to end. Uniqueness rules
//! mirror the database adapters: duplicate follow edges and likes surface as
//! the dedicated port error variants.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use backend::domain::ports::{
    CommentStore, CommentStoreError, FollowStore, FollowStoreError, IdentityDirectory,
    IdentityDirectoryError, LikeStore, LikeStoreError, PostStore, PostStoreError,
};
use backend::domain::{Comment, FollowEdge, Post, User, UserId, Username};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use uuid::Uuid;

/// Test clock advanced manually so seeded posts and comments get strictly
/// increasing timestamps.
pub(crate) struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub(crate) fn advance_seconds(&self, seconds: i64) {
        let mut guard = self.0.lock().expect("clock mutex");
        *guard += TimeDelta::seconds(seconds);
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().expect("clock mutex")
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryIdentityDirectory {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryIdentityDirectory {
    pub(crate) fn register(&self, user: User) {
        self.users.lock().expect("users lock").push(user);
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>, IdentityDirectoryError> {
        Ok(self
            .users
            .lock()
            .expect("users lock")
            .iter()
            .find(|user| user.id() == user_id)
            .cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, IdentityDirectoryError> {
        Ok(self
            .users
            .lock()
            .expect("users lock")
            .iter()
            .find(|user| user.username() == username)
            .cloned())
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryFollowStore {
    edges: Arc<Mutex<Vec<FollowEdge>>>,
}

#[async_trait]
impl FollowStore for InMemoryFollowStore {
    async fn insert(&self, edge: &FollowEdge) -> Result<(), FollowStoreError> {
        let mut edges = self.edges.lock().expect("follow edges lock");
        if edges.iter().any(|existing| {
            existing.follower() == edge.follower() && existing.following() == edge.following()
        }) {
            return Err(FollowStoreError::duplicate_edge(
                edge.follower().to_string(),
                edge.following().to_string(),
            ));
        }
        edges.push(edge.clone());
        Ok(())
    }

    async fn delete(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<bool, FollowStoreError> {
        let mut edges = self.edges.lock().expect("follow edges lock");
        let before = edges.len();
        edges.retain(|edge| !(edge.follower() == follower && edge.following() == following));
        Ok(edges.len() < before)
    }

    async fn exists(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<bool, FollowStoreError> {
        Ok(self
            .edges
            .lock()
            .expect("follow edges lock")
            .iter()
            .any(|edge| edge.follower() == follower && edge.following() == following))
    }

    async fn following_ids(&self, follower: &UserId) -> Result<Vec<UserId>, FollowStoreError> {
        Ok(self
            .edges
            .lock()
            .expect("follow edges lock")
            .iter()
            .filter(|edge| edge.follower() == follower)
            .map(|edge| edge.following().clone())
            .collect())
    }

    async fn follower_count(&self, user: &UserId) -> Result<u64, FollowStoreError> {
        let count = self
            .edges
            .lock()
            .expect("follow edges lock")
            .iter()
            .filter(|edge| edge.following() == user)
            .count();
        Ok(count as u64)
    }

    async fn following_count(&self, user: &UserId) -> Result<u64, FollowStoreError> {
        let count = self
            .edges
            .lock()
            .expect("follow edges lock")
            .iter()
            .filter(|edge| edge.follower() == user)
            .count();
        Ok(count as u64)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryPostStore {
    posts: Arc<Mutex<Vec<Post>>>,
}

impl InMemoryPostStore {
    pub(crate) fn seed(&self, post: Post) {
        self.posts.lock().expect("posts lock").push(post);
    }
}

fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: &Post) -> Result<(), PostStoreError> {
        self.posts.lock().expect("posts lock").push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &Uuid) -> Result<Option<Post>, PostStoreError> {
        Ok(self
            .posts
            .lock()
            .expect("posts lock")
            .iter()
            .find(|post| post.id() == *post_id)
            .cloned())
    }

    async fn posts_by_author(&self, author: &UserId) -> Result<Vec<Post>, PostStoreError> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .expect("posts lock")
            .iter()
            .filter(|post| post.author() == author)
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts)
    }

    async fn posts_by_authors(&self, authors: &[UserId]) -> Result<Vec<Post>, PostStoreError> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .expect("posts lock")
            .iter()
            .filter(|post| authors.contains(post.author()))
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts)
    }

    async fn delete(&self, post_id: &Uuid) -> Result<bool, PostStoreError> {
        let mut posts = self.posts.lock().expect("posts lock");
        let before = posts.len();
        posts.retain(|post| post.id() != *post_id);
        Ok(posts.len() < before)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryLikeStore {
    likes: Arc<Mutex<Vec<(UserId, Uuid)>>>,
}

#[async_trait]
impl LikeStore for InMemoryLikeStore {
    async fn insert(&self, user: &UserId, post_id: &Uuid) -> Result<(), LikeStoreError> {
        let mut likes = self.likes.lock().expect("likes lock");
        if likes
            .iter()
            .any(|(liker, post)| liker == user && post == post_id)
        {
            return Err(LikeStoreError::duplicate_like(
                user.to_string(),
                post_id.to_string(),
            ));
        }
        likes.push((user.clone(), *post_id));
        Ok(())
    }

    async fn delete(&self, user: &UserId, post_id: &Uuid) -> Result<bool, LikeStoreError> {
        let mut likes = self.likes.lock().expect("likes lock");
        let before = likes.len();
        likes.retain(|(liker, post)| !(liker == user && post == post_id));
        Ok(likes.len() < before)
    }

    async fn exists(&self, user: &UserId, post_id: &Uuid) -> Result<bool, LikeStoreError> {
        Ok(self
            .likes
            .lock()
            .expect("likes lock")
            .iter()
            .any(|(liker, post)| liker == user && post == post_id))
    }

    async fn count_for_post(&self, post_id: &Uuid) -> Result<u64, LikeStoreError> {
        let count = self
            .likes
            .lock()
            .expect("likes lock")
            .iter()
            .filter(|(_, post)| post == post_id)
            .count();
        Ok(count as u64)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryCommentStore {
    comments: Arc<Mutex<Vec<Comment>>>,
}

impl InMemoryCommentStore {
    pub(crate) fn seed(&self, comment: Comment) {
        self.comments.lock().expect("comments lock").push(comment);
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn insert(&self, comment: &Comment) -> Result<(), CommentStoreError> {
        self.comments
            .lock()
            .expect("comments lock")
            .push(comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, comment_id: &Uuid) -> Result<Option<Comment>, CommentStoreError> {
        Ok(self
            .comments
            .lock()
            .expect("comments lock")
            .iter()
            .find(|comment| comment.id() == *comment_id)
            .cloned())
    }

    async fn comments_for_post(&self, post_id: &Uuid) -> Result<Vec<Comment>, CommentStoreError> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .expect("comments lock")
            .iter()
            .filter(|comment| comment.post_id() == *post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(comments)
    }

    async fn delete(&self, comment_id: &Uuid) -> Result<bool, CommentStoreError> {
        let mut comments = self.comments.lock().expect("comments lock");
        let before = comments.len();
        comments.retain(|comment| comment.id() != *comment_id);
        Ok(comments.len() < before)
    }
}
