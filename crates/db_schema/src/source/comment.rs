use crate::{
  newtypes::{CommentId, PersonId, PostId},
  schema::comment,
  source::post::Post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = comment)]
#[diesel(belongs_to(Post))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
  pub id: CommentId,
  pub creator_id: PersonId,
  pub post_id: PostId,
  /// None for top-level comments, otherwise the comment being replied to.
  pub parent_id: Option<CommentId>,
  pub content: String,
  pub deleted: bool,
  /// Denormalized count of vote rows with score +1. Only the vote ledger
  /// writes this.
  pub upvotes: i64,
  /// Denormalized count of vote rows with score -1. Only the vote ledger
  /// writes this.
  pub downvotes: i64,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub creator_id: PersonId,
  pub post_id: PostId,
  pub content: String,
  pub parent_id: Option<CommentId>,
}

impl CommentInsertForm {
  pub fn new(creator_id: PersonId, post_id: PostId, content: String) -> Self {
    CommentInsertForm {
      creator_id,
      post_id,
      content,
      parent_id: None,
    }
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = comment)]
pub struct CommentUpdateForm {
  pub content: Option<String>,
  pub deleted: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
