use crate::{
  newtypes::{BookmarkId, PersonId, PostId},
  schema::bookmark,
  source::post::Post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = bookmark)]
#[diesel(belongs_to(Post))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Bookmark {
  pub id: BookmarkId,
  pub person_id: PersonId,
  pub post_id: PostId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = bookmark)]
pub struct BookmarkForm {
  pub person_id: PersonId,
  pub post_id: PostId,
}
