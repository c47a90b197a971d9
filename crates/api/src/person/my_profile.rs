use actix_web::web::{Data, Json};
use kgotla_api_common::{
  context::KgotlaContext,
  person::{LocalPersonView, PersonResponse, UpdateProfile},
};
use kgotla_db_schema::{
  source::person::{Person, PersonUpdateForm},
  traits::Crud,
  utils::now_utc,
};
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn get_my_profile(
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<PersonResponse>> {
  let person = Person::read(&mut context.pool(), local_person_view.person.id).await?;
  Ok(Json(PersonResponse { person }))
}

/// Updates the caller's own profile. Fields left out of the request are
/// untouched.
#[tracing::instrument(skip(context))]
pub async fn update_my_profile(
  data: Json<UpdateProfile>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<PersonResponse>> {
  let form = PersonUpdateForm {
    display_name: data.display_name.clone().map(Some),
    bio: data.bio.clone().map(Some),
    avatar_url: data.avatar_url.clone().map(Some),
    updated: Some(Some(now_utc())),
    ..Default::default()
  };
  let person = Person::update(&mut context.pool(), local_person_view.person.id, &form).await?;
  Ok(Json(PersonResponse { person }))
}
