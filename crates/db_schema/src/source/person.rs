use crate::{newtypes::PersonId, schema::person};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A registered user. Identity is issued by the external identity provider;
/// `external_id` is the provider's subject claim.
pub struct Person {
  pub id: PersonId,
  pub name: String,
  pub display_name: Option<String>,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
  #[serde(skip)]
  pub external_id: String,
  /// Points received through tips. Only the tip ledger writes this.
  pub wisdom_points: i64,
  pub banned: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub name: String,
  pub external_id: String,
  pub display_name: Option<String>,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
  pub wisdom_points: Option<i64>,
  pub banned: Option<bool>,
}

impl PersonInsertForm {
  pub fn new(name: String, external_id: String) -> Self {
    PersonInsertForm {
      name,
      external_id,
      display_name: None,
      bio: None,
      avatar_url: None,
      wisdom_points: None,
      banned: None,
    }
  }

  pub fn test_form(name: &str) -> Self {
    Self::new(name.to_owned(), format!("test-subject-{name}"))
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonUpdateForm {
  pub display_name: Option<Option<String>>,
  pub bio: Option<Option<String>>,
  pub avatar_url: Option<Option<String>>,
  pub banned: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
