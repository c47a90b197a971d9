use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::Display;

pub type KgotlaResult<T> = Result<T, KgotlaError>;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum KgotlaErrorType {
  NotFound,
  NotLoggedIn,
  Banned,
  Deleted,
  InvalidVoteDirection,
  InvalidVoteTarget,
  CouldntCastVote,
  CouldntCreatePost,
  CouldntUpdatePost,
  CouldntCreateComment,
  CouldntUpdateComment,
  CouldntCreateGroup,
  CouldntUpdateGroup,
  CouldntJoinGroup,
  CouldntBookmarkPost,
  CouldntCreateNotification,
  CouldntUpdateNotifications,
  CouldntCreateTip,
  CouldntUpdatePerson,
  NotYourPost,
  NotYourComment,
  PostLocked,
  GroupNameAlreadyExists,
  ImageUrlRequired,
  PollOptionsRequired,
  InvalidPostTitle,
  CannotTipYourself,
  InvalidTipAmount,
  NotEnoughWisdomPoints,
  Unknown(String),
}

pub struct KgotlaError {
  pub error_type: KgotlaErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for KgotlaError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => KgotlaErrorType::NotFound,
      _ => KgotlaErrorType::Unknown(format!("{}", &cause)),
    };
    KgotlaError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for KgotlaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("KgotlaError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for KgotlaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for KgotlaError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    match self.error_type {
      KgotlaErrorType::NotLoggedIn | KgotlaErrorType::Banned => {
        actix_web::http::StatusCode::UNAUTHORIZED
      }
      KgotlaErrorType::NotFound => actix_web::http::StatusCode::NOT_FOUND,
      _ => actix_web::http::StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<KgotlaErrorType> for KgotlaError {
  fn from(error_type: KgotlaErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    KgotlaError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait KgotlaErrorExt<T, E: Into<anyhow::Error>> {
  fn with_kgotla_type(self, error_type: KgotlaErrorType) -> KgotlaResult<T>;
}

impl<T, E: Into<anyhow::Error>> KgotlaErrorExt<T, E> for Result<T, E> {
  fn with_kgotla_type(self, error_type: KgotlaErrorType) -> KgotlaResult<T> {
    self.map_err(|error| KgotlaError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait KgotlaErrorExt2<T> {
  fn with_kgotla_type(self, error_type: KgotlaErrorType) -> KgotlaResult<T>;
}

impl<T> KgotlaErrorExt2<T> for KgotlaResult<T> {
  fn with_kgotla_type(self, error_type: KgotlaErrorType) -> KgotlaResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use actix_web::error::ResponseError;
  use actix_web::http::StatusCode;
  use pretty_assertions::assert_eq;

  #[test]
  fn deserializes_no_message() {
    let err = KgotlaError::from(KgotlaErrorType::Banned).error_type;
    let json = "{\"error\":\"banned\"}".to_string();
    assert_eq!(&serde_json::to_string(&err).unwrap(), &json);
  }

  #[test]
  fn deserializes_with_message() {
    let reg_banned = KgotlaError::from(KgotlaErrorType::Unknown(String::from("reason"))).error_type;
    let json = "{\"error\":\"unknown\",\"message\":\"reason\"}".to_string();
    assert_eq!(&serde_json::to_string(&reg_banned).unwrap(), &json);
  }

  #[test]
  fn http_status_mapping() {
    assert_eq!(
      KgotlaError::from(KgotlaErrorType::NotLoggedIn).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      KgotlaError::from(KgotlaErrorType::Banned).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      KgotlaError::from(KgotlaErrorType::NotFound).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      KgotlaError::from(KgotlaErrorType::InvalidVoteDirection).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      KgotlaError::from(KgotlaErrorType::InvalidVoteTarget).status_code(),
      StatusCode::BAD_REQUEST
    );
  }

  #[test]
  fn diesel_not_found_maps_to_not_found() {
    let err = KgotlaError::from(diesel::NotFound);
    assert_eq!(err.error_type, KgotlaErrorType::NotFound);
  }
}
