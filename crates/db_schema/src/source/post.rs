use crate::{
  enums::PostKind,
  newtypes::{GroupId, PersonId, PostId},
  schema::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Post {
  pub id: PostId,
  pub creator_id: PersonId,
  pub group_id: GroupId,
  pub kind: PostKind,
  pub title: String,
  pub body: Option<String>,
  /// Image location for `image` posts.
  pub url: Option<String>,
  /// Answer choices for `poll` posts.
  pub poll_options: Option<serde_json::Value>,
  pub deleted: bool,
  /// A locked post rejects new comments, but still accepts votes.
  pub locked: bool,
  /// Denormalized count of vote rows with score +1. Only the vote ledger
  /// writes this.
  pub upvotes: i64,
  /// Denormalized count of vote rows with score -1. Only the vote ledger
  /// writes this.
  pub downvotes: i64,
  pub comment_count: i64,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub creator_id: PersonId,
  pub group_id: GroupId,
  pub title: String,
  pub kind: Option<PostKind>,
  pub body: Option<String>,
  pub url: Option<String>,
  pub poll_options: Option<serde_json::Value>,
}

impl PostInsertForm {
  pub fn new(creator_id: PersonId, group_id: GroupId, title: String) -> Self {
    PostInsertForm {
      creator_id,
      group_id,
      title,
      kind: None,
      body: None,
      url: None,
      poll_options: None,
    }
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub title: Option<String>,
  pub body: Option<Option<String>>,
  pub url: Option<Option<String>>,
  pub poll_options: Option<Option<serde_json::Value>>,
  pub deleted: Option<bool>,
  pub locked: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
