use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use kgotla_db_schema::{
  newtypes::PersonId,
  source::{notification::Notification, person::Person, tip::Tip},
};
use kgotla_utils::error::{KgotlaError, KgotlaErrorType};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::future::{ready, Ready};

/// The authenticated caller, resolved by the session middleware and stored
/// in the request extensions.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LocalPersonView {
  pub person: Person,
}

impl FromRequest for LocalPersonView {
  type Error = KgotlaError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<LocalPersonView>() {
      Some(view) => Ok(view.clone()),
      None => Err(KgotlaErrorType::NotLoggedIn.into()),
    })
  }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PersonResponse {
  pub person: Person,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateProfile {
  pub display_name: Option<String>,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct ListNotifications {
  pub unread_only: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListNotificationsResponse {
  pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarkAllReadResponse {
  pub marked: usize,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SendTip {
  pub recipient_id: PersonId,
  pub amount: i64,
  pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TipResponse {
  pub tip: Tip,
  /// The sender's balance after the transfer.
  pub wisdom_points: i64,
}
