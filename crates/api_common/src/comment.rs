use kgotla_db_schema::{
  newtypes::{CommentId, PostId},
  source::comment::Comment,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateComment {
  pub post_id: PostId,
  pub content: String,
  pub parent_id: Option<CommentId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment: Comment,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditComment {
  pub comment_id: CommentId,
  pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct DeleteComment {
  pub comment_id: CommentId,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ListComments {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListCommentsResponse {
  pub comments: Vec<Comment>,
}
