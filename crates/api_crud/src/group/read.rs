use actix_web::web::{Data, Json, Query};
use kgotla_api_common::{
  context::KgotlaContext,
  group::{GetGroup, GroupResponse},
};
use kgotla_db_schema::{source::group::Group, traits::Crud};
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn get_group(
  data: Query<GetGroup>,
  context: Data<KgotlaContext>,
) -> KgotlaResult<Json<GroupResponse>> {
  let group = Group::read(&mut context.pool(), data.id).await?;
  Ok(Json(GroupResponse { group }))
}
