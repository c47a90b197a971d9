use kgotla_db_schema::{newtypes::GroupId, source::group::Group};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateGroup {
  /// Unique short name, used in urls.
  pub name: String,
  pub title: String,
  pub description: Option<String>,
  pub nsfw: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupResponse {
  pub group: Group,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GetGroup {
  pub id: GroupId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListGroupsResponse {
  pub groups: Vec<Group>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct JoinGroup {
  pub group_id: GroupId,
  /// true joins the group, false leaves it.
  pub join: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JoinGroupResponse {
  pub group: Group,
  pub joined: bool,
}
