use kgotla_db_schema::{
  enums::PostKind,
  newtypes::{GroupId, PostId},
  source::post::Post,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePost {
  pub group_id: GroupId,
  pub title: String,
  pub kind: Option<PostKind>,
  /// An optional body in markdown.
  pub body: Option<String>,
  /// Required for image posts.
  pub url: Option<String>,
  /// Required for poll posts, at least two choices.
  pub poll_options: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post: Post,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GetPost {
  pub id: PostId,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditPost {
  pub post_id: PostId,
  pub title: Option<String>,
  pub body: Option<String>,
  pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct DeletePost {
  pub post_id: PostId,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct ListPosts {
  pub group_id: Option<GroupId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListPostsResponse {
  pub posts: Vec<Post>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct BookmarkPost {
  pub post_id: PostId,
  /// true saves the bookmark, false removes it.
  pub save: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct BookmarkPostResponse {
  pub post_id: PostId,
  pub bookmarked: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct LockPost {
  pub post_id: PostId,
  pub locked: bool,
}
