use crate::{
  newtypes::{GroupId, GroupMemberId, PersonId},
  schema::{group_member, groups},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A discussion group.
pub struct Group {
  pub id: GroupId,
  pub name: String,
  pub title: String,
  pub description: Option<String>,
  pub nsfw: bool,
  /// Denormalized count of group_member rows. Only Joinable::join/leave
  /// write this.
  pub member_count: i64,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = groups)]
pub struct GroupInsertForm {
  pub name: String,
  pub title: String,
  pub description: Option<String>,
  pub nsfw: Option<bool>,
}

impl GroupInsertForm {
  pub fn new(name: String, title: String) -> Self {
    GroupInsertForm {
      name,
      title,
      description: None,
      nsfw: None,
    }
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = groups)]
pub struct GroupUpdateForm {
  pub title: Option<String>,
  pub description: Option<Option<String>>,
  pub nsfw: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = group_member)]
#[diesel(belongs_to(Group))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GroupMember {
  pub id: GroupMemberId,
  pub group_id: GroupId,
  pub person_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = group_member)]
pub struct GroupMemberForm {
  pub group_id: GroupId,
  pub person_id: PersonId,
}
