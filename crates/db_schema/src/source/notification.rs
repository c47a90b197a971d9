use crate::{
  enums::NotificationKind,
  newtypes::{CommentId, NotificationId, PersonId, TipId},
  schema::notification,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = notification)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Notification {
  pub id: NotificationId,
  pub recipient_id: PersonId,
  pub kind: NotificationKind,
  /// Set for `reply` notifications.
  pub comment_id: Option<CommentId>,
  /// Set for `tip` notifications.
  pub tip_id: Option<TipId>,
  pub read: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notification)]
pub struct NotificationInsertForm {
  pub recipient_id: PersonId,
  pub kind: NotificationKind,
  pub comment_id: Option<CommentId>,
  pub tip_id: Option<TipId>,
}

impl NotificationInsertForm {
  pub fn new_reply(recipient_id: PersonId, comment_id: CommentId) -> Self {
    NotificationInsertForm {
      recipient_id,
      kind: NotificationKind::Reply,
      comment_id: Some(comment_id),
      tip_id: None,
    }
  }

  pub fn new_tip(recipient_id: PersonId, tip_id: TipId) -> Self {
    NotificationInsertForm {
      recipient_id,
      kind: NotificationKind::Tip,
      comment_id: None,
      tip_id: Some(tip_id),
    }
  }
}
