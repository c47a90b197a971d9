use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::AUTHORIZATION,
  Error,
  HttpMessage,
};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use kgotla_api_common::{context::KgotlaContext, person::LocalPersonView};
use kgotla_db_schema::{newtypes::PersonId, source::person::Person, traits::Crud};
use kgotla_utils::{
  claims::Claims,
  error::{KgotlaError, KgotlaErrorType},
};
use std::{future::ready, rc::Rc};

/// Resolves the bearer token from the identity provider into a
/// [LocalPersonView] and stores it in the request extensions. Requests
/// without a token pass through anonymously; handlers that extract
/// [LocalPersonView] then fail with NotLoggedIn.
#[derive(Clone)]
pub struct SessionMiddleware {
  context: KgotlaContext,
}

impl SessionMiddleware {
  pub fn new(context: KgotlaContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: KgotlaContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let jwt = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned);

      if let Some(jwt) = jwt {
        // An invalid or banned token fails the request instead of silently
        // degrading to anonymous.
        let local_person_view = local_person_view_from_jwt(&jwt, &context).await?;
        req.extensions_mut().insert(local_person_view);
      }

      svc.call(req).await
    })
  }
}

#[tracing::instrument(skip_all)]
async fn local_person_view_from_jwt(
  jwt: &str,
  context: &KgotlaContext,
) -> Result<LocalPersonView, KgotlaError> {
  let claims = Claims::decode(jwt)?;
  let person = Person::read(&mut context.pool(), PersonId(claims.sub)).await?;
  if person.banned {
    return Err(KgotlaErrorType::Banned.into());
  }
  Ok(LocalPersonView { person })
}

#[cfg(test)]
mod tests {

  use super::*;
  use kgotla_db_schema::{
    source::person::PersonInsertForm,
    utils::build_db_pool_for_tests,
  };
  use kgotla_utils::error::KgotlaResult;
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_banned_person_is_rejected() -> KgotlaResult<()> {
    let actual_pool = build_db_pool_for_tests().await;
    let context = KgotlaContext::create(actual_pool.clone());
    let pool = &mut (&actual_pool).into();

    let form = PersonInsertForm {
      banned: Some(true),
      ..PersonInsertForm::test_form("banned_session")
    };
    let banned = Person::create(pool, &form).await?;

    let jwt = Claims::generate(banned.id.0)?;
    let resolved = local_person_view_from_jwt(&jwt, &context).await;
    assert!(resolved.is_err());

    Person::delete(pool, banned.id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_valid_token_resolves_person() -> KgotlaResult<()> {
    let actual_pool = build_db_pool_for_tests().await;
    let context = KgotlaContext::create(actual_pool.clone());
    let pool = &mut (&actual_pool).into();

    let person = Person::create(pool, &PersonInsertForm::test_form("valid_session")).await?;

    let jwt = Claims::generate(person.id.0)?;
    let resolved = local_person_view_from_jwt(&jwt, &context).await?;
    assert_eq!(person.id, resolved.person.id);

    let garbage = local_person_view_from_jwt("not.a.token", &context).await;
    assert!(garbage.is_err());

    Person::delete(pool, person.id).await?;
    Ok(())
  }
}
