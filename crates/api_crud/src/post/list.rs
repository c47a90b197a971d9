use actix_web::web::{Data, Json, Query};
use kgotla_api_common::{
  context::KgotlaContext,
  post::{ListPosts, ListPostsResponse},
};
use kgotla_db_schema::source::post::Post;
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn list_posts(
  data: Query<ListPosts>,
  context: Data<KgotlaContext>,
) -> KgotlaResult<Json<ListPostsResponse>> {
  let posts = Post::list(&mut context.pool(), data.group_id, data.page, data.limit).await?;
  Ok(Json(ListPostsResponse { posts }))
}
