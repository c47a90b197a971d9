use actix_web::web::{Data, Json};
use kgotla_api_common::{
  context::KgotlaContext,
  group::{JoinGroup, JoinGroupResponse},
  person::LocalPersonView,
};
use kgotla_db_schema::{
  source::group::{Group, GroupMember, GroupMemberForm},
  traits::{Crud, Joinable},
};
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn join_group(
  data: Json<JoinGroup>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<JoinGroupResponse>> {
  let group = Group::read(&mut context.pool(), data.group_id).await?;

  let form = GroupMemberForm {
    group_id: group.id,
    person_id: local_person_view.person.id,
  };
  if data.join {
    GroupMember::join(&mut context.pool(), &form).await?;
  } else {
    GroupMember::leave(&mut context.pool(), &form).await?;
  }

  // re-read for the updated member_count
  let group = Group::read(&mut context.pool(), group.id).await?;

  Ok(Json(JoinGroupResponse {
    group,
    joined: data.join,
  }))
}
