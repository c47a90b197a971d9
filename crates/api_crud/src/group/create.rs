use actix_web::web::{Data, Json};
use kgotla_api_common::{
  build_response::build_group_response,
  context::KgotlaContext,
  group::{CreateGroup, GroupResponse},
  person::LocalPersonView,
};
use kgotla_db_schema::{
  source::group::{Group, GroupInsertForm, GroupMember, GroupMemberForm},
  traits::{Crud, Joinable},
};
use kgotla_utils::error::{KgotlaErrorType, KgotlaResult};

#[tracing::instrument(skip(context))]
pub async fn create_group(
  data: Json<CreateGroup>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<GroupResponse>> {
  if Group::read_by_name(&mut context.pool(), &data.name)
    .await?
    .is_some()
  {
    return Err(KgotlaErrorType::GroupNameAlreadyExists.into());
  }

  let form = GroupInsertForm {
    description: data.description.clone(),
    nsfw: data.nsfw,
    ..GroupInsertForm::new(data.name.clone(), data.title.clone())
  };
  let group = Group::create(&mut context.pool(), &form).await?;

  // the creator becomes the first member
  GroupMember::join(
    &mut context.pool(),
    &GroupMemberForm {
      group_id: group.id,
      person_id: local_person_view.person.id,
    },
  )
  .await?;

  Ok(Json(build_group_response(&context, group.id).await?))
}
