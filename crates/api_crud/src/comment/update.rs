use actix_web::web::{Data, Json};
use kgotla_api_common::{
  build_response::build_comment_response,
  comment::{CommentResponse, EditComment},
  context::KgotlaContext,
  person::LocalPersonView,
  utils::check_comment_creator,
};
use kgotla_db_schema::{
  source::comment::{Comment, CommentUpdateForm},
  traits::Crud,
  utils::now_utc,
};
use kgotla_utils::error::{KgotlaErrorType, KgotlaResult};

#[tracing::instrument(skip(context))]
pub async fn update_comment(
  data: Json<EditComment>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<CommentResponse>> {
  let comment = Comment::read_visible(&mut context.pool(), data.comment_id).await?;
  check_comment_creator(&comment, &local_person_view.person)?;

  if data.content.trim().is_empty() {
    return Err(KgotlaErrorType::CouldntUpdateComment.into());
  }

  let form = CommentUpdateForm {
    content: Some(data.content.clone()),
    updated: Some(Some(now_utc())),
    ..Default::default()
  };
  Comment::update(&mut context.pool(), comment.id, &form).await?;

  Ok(Json(build_comment_response(&context, comment.id).await?))
}
