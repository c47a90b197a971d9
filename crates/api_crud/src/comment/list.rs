use actix_web::web::{Data, Json, Query};
use kgotla_api_common::{
  comment::{ListComments, ListCommentsResponse},
  context::KgotlaContext,
};
use kgotla_db_schema::source::{comment::Comment, post::Post};
use kgotla_utils::error::KgotlaResult;

/// All comments of a post, parents before children.
#[tracing::instrument(skip(context))]
pub async fn list_comments(
  data: Query<ListComments>,
  context: Data<KgotlaContext>,
) -> KgotlaResult<Json<ListCommentsResponse>> {
  let post = Post::read_visible(&mut context.pool(), data.post_id).await?;
  let comments = Comment::list_for_post(&mut context.pool(), post.id).await?;
  Ok(Json(ListCommentsResponse { comments }))
}
