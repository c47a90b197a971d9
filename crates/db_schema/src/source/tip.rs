use crate::{
  newtypes::{PersonId, TipId},
  schema::tip,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = tip)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A wisdom point transfer between two persons.
pub struct Tip {
  pub id: TipId,
  pub sender_id: PersonId,
  pub recipient_id: PersonId,
  pub amount: i64,
  pub note: Option<String>,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tip)]
pub struct TipInsertForm {
  pub sender_id: PersonId,
  pub recipient_id: PersonId,
  pub amount: i64,
  pub note: Option<String>,
}
