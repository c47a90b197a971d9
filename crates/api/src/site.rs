use actix_web::web::{Data, Json};
use kgotla_api_common::{context::KgotlaContext, site::GetSiteResponse};
use kgotla_db_schema::source::site::SiteCounts;
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn get_site(context: Data<KgotlaContext>) -> KgotlaResult<Json<GetSiteResponse>> {
  let counts = SiteCounts::read(&mut context.pool()).await?;
  Ok(Json(GetSiteResponse {
    name: context.settings().instance_name.clone(),
    counts,
  }))
}
