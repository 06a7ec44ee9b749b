//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod comment_store;
mod current_user_query;
mod engagement_command;
mod engagement_query;
mod feed_query;
mod follow_command;
mod follow_query;
mod follow_store;
mod identity_directory;
mod like_store;
mod login_service;
mod post_command;
mod post_query;
mod post_store;
mod profile_query;

#[cfg(test)]
pub use comment_store::MockCommentStore;
pub use comment_store::{CommentStore, CommentStoreError, FixtureCommentStore};
#[cfg(test)]
pub use current_user_query::MockCurrentUserQuery;
pub use current_user_query::{CurrentUserQuery, FixtureCurrentUserQuery};
#[cfg(test)]
pub use engagement_command::MockEngagementCommand;
pub use engagement_command::{
    AddCommentRequest, AddCommentResponse, CommentPayload, DeleteCommentRequest,
    DeleteCommentResponse, EngagementCommand, FixtureEngagementCommand, LikePostRequest,
    LikePostResponse, UnlikePostRequest, UnlikePostResponse,
};
#[cfg(test)]
pub use engagement_query::MockEngagementQuery;
pub use engagement_query::{
    EngagementQuery, FixtureEngagementQuery, LikeSummaryRequest, LikeSummaryResponse,
    PostCommentsRequest, PostCommentsResponse,
};
#[cfg(test)]
pub use feed_query::MockFeedQuery;
pub use feed_query::{FeedQuery, FixtureFeedQuery, HomeFeedRequest, HomeFeedResponse};
#[cfg(test)]
pub use follow_command::MockFollowCommand;
pub use follow_command::{
    FixtureFollowCommand, FollowCommand, FollowUserRequest, FollowUserResponse,
    UnfollowUserRequest, UnfollowUserResponse,
};
#[cfg(test)]
pub use follow_query::MockFollowQuery;
pub use follow_query::{
    FixtureFollowQuery, FollowQuery, FollowRelationshipRequest, FollowRelationshipResponse,
};
#[cfg(test)]
pub use follow_store::MockFollowStore;
pub use follow_store::{FixtureFollowStore, FollowStore, FollowStoreError};
#[cfg(test)]
pub use identity_directory::MockIdentityDirectory;
pub use identity_directory::{FixtureIdentityDirectory, IdentityDirectory, IdentityDirectoryError};
#[cfg(test)]
pub use like_store::MockLikeStore;
pub use like_store::{FixtureLikeStore, LikeStore, LikeStoreError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_LOGIN_PASSWORD, FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME, FixtureLoginService,
    LoginService,
};
#[cfg(test)]
pub use post_command::MockPostCommand;
pub use post_command::{
    CreatePostRequest, CreatePostResponse, DeletePostRequest, DeletePostResponse,
    FixturePostCommand, PostCommand, PostPayload,
};
#[cfg(test)]
pub use post_query::MockPostQuery;
pub use post_query::{AuthorPostsRequest, AuthorPostsResponse, FixturePostQuery, PostQuery};
#[cfg(test)]
pub use post_store::MockPostStore;
pub use post_store::{FixturePostStore, PostStore, PostStoreError};
#[cfg(test)]
pub use profile_query::MockProfileQuery;
pub use profile_query::{
    FixtureProfileQuery, ProfilePayload, ProfileQuery, ProfileRequest, ProfileResponse,
};
