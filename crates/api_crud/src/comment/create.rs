use actix_web::web::{Data, Json};
use kgotla_api_common::{
  build_response::build_comment_response,
  comment::{CommentResponse, CreateComment},
  context::KgotlaContext,
  person::LocalPersonView,
  utils::check_post_accepts_comments,
};
use kgotla_db_schema::{
  source::{
    comment::{Comment, CommentInsertForm},
    notification::{Notification, NotificationInsertForm},
    post::Post,
  },
  traits::Crud,
};
use kgotla_utils::error::{KgotlaErrorType, KgotlaResult};

#[tracing::instrument(skip(context))]
pub async fn create_comment(
  data: Json<CreateComment>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<CommentResponse>> {
  let post = Post::read_visible(&mut context.pool(), data.post_id).await?;
  check_post_accepts_comments(&post)?;

  if data.content.trim().is_empty() {
    return Err(KgotlaErrorType::CouldntCreateComment.into());
  }

  // replies must point at a live comment under the same post
  let parent = match data.parent_id {
    Some(parent_id) => {
      let parent = Comment::read_visible(&mut context.pool(), parent_id).await?;
      if parent.post_id != post.id {
        return Err(KgotlaErrorType::CouldntCreateComment.into());
      }
      Some(parent)
    }
    None => None,
  };

  let form = CommentInsertForm {
    parent_id: data.parent_id,
    ..CommentInsertForm::new(local_person_view.person.id, post.id, data.content.clone())
  };
  let comment = Comment::create(&mut context.pool(), &form).await?;

  // notify whoever was replied to, unless they replied to themselves
  let notify_person_id = parent
    .as_ref()
    .map(|parent| parent.creator_id)
    .unwrap_or(post.creator_id);
  if notify_person_id != local_person_view.person.id {
    Notification::create(
      &mut context.pool(),
      &NotificationInsertForm::new_reply(notify_person_id, comment.id),
    )
    .await?;
  }

  Ok(Json(build_comment_response(&context, comment.id).await?))
}
