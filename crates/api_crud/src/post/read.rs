use actix_web::web::{Data, Json, Query};
use kgotla_api_common::{
  context::KgotlaContext,
  post::{GetPost, PostResponse},
};
use kgotla_db_schema::source::post::Post;
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn get_post(
  data: Query<GetPost>,
  context: Data<KgotlaContext>,
) -> KgotlaResult<Json<PostResponse>> {
  let post = Post::read_visible(&mut context.pool(), data.id).await?;
  Ok(Json(PostResponse { post }))
}
