use actix_web::web::{Data, Json};
use kgotla_api_common::{
  context::KgotlaContext,
  person::LocalPersonView,
  post::{DeletePost, PostResponse},
  utils::check_post_creator,
};
use kgotla_db_schema::source::post::Post;
use kgotla_utils::error::KgotlaResult;

/// Soft-deletes a post. The row keeps its counters but disappears from reads,
/// listings and the vote ledger.
#[tracing::instrument(skip(context))]
pub async fn delete_post(
  data: Json<DeletePost>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<PostResponse>> {
  let post = Post::read_visible(&mut context.pool(), data.post_id).await?;
  check_post_creator(&post, &local_person_view.person)?;

  let post = Post::soft_delete(&mut context.pool(), post.id).await?;

  Ok(Json(PostResponse { post }))
}
