use actix_web::web::{Data, Json};
use kgotla_api_common::{context::KgotlaContext, group::ListGroupsResponse};
use kgotla_db_schema::source::group::Group;
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn list_groups(context: Data<KgotlaContext>) -> KgotlaResult<Json<ListGroupsResponse>> {
  let groups = Group::list(&mut context.pool()).await?;
  Ok(Json(ListGroupsResponse { groups }))
}
