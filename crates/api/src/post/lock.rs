use actix_web::web::{Data, Json};
use kgotla_api_common::{
  build_response::build_post_response,
  context::KgotlaContext,
  person::LocalPersonView,
  post::{LockPost, PostResponse},
  utils::check_post_creator,
};
use kgotla_db_schema::{
  source::post::{Post, PostUpdateForm},
  traits::Crud,
  utils::now_utc,
};
use kgotla_utils::error::KgotlaResult;

/// Locks or unlocks a post. Only the creator may do this. A locked post
/// rejects new comments but keeps accepting votes.
#[tracing::instrument(skip(context))]
pub async fn lock_post(
  data: Json<LockPost>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<PostResponse>> {
  let post = Post::read_visible(&mut context.pool(), data.post_id).await?;
  check_post_creator(&post, &local_person_view.person)?;

  let form = PostUpdateForm {
    locked: Some(data.locked),
    updated: Some(Some(now_utc())),
    ..Default::default()
  };
  Post::update(&mut context.pool(), post.id, &form).await?;

  Ok(Json(build_post_response(&context, post.id).await?))
}
