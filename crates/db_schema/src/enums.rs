use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
#[derive(DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::PostKindEnum"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[DbValueStyle = "snake_case"]
/// The kind of content a post carries.
pub enum PostKind {
  #[default]
  Text,
  Image,
  Poll,
  Question,
}

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash,
)]
#[derive(DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::VoteTargetTypeEnum"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[DbValueStyle = "snake_case"]
/// Which table a vote row points into.
pub enum VoteTargetType {
  Post,
  Comment,
}

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash,
)]
#[derive(DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::NotificationKindEnum"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[DbValueStyle = "snake_case"]
pub enum NotificationKind {
  Reply,
  Tip,
}
