use actix_web::web::{Data, Json};
use kgotla_api_common::{
  comment::{CommentResponse, DeleteComment},
  context::KgotlaContext,
  person::LocalPersonView,
  utils::check_comment_creator,
};
use kgotla_db_schema::source::comment::Comment;
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn delete_comment(
  data: Json<DeleteComment>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<CommentResponse>> {
  let comment = Comment::read_visible(&mut context.pool(), data.comment_id).await?;
  check_comment_creator(&comment, &local_person_view.person)?;

  let comment = Comment::soft_delete(&mut context.pool(), comment.id).await?;

  Ok(Json(CommentResponse { comment }))
}
