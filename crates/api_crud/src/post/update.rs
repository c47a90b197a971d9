use actix_web::web::{Data, Json};
use kgotla_api_common::{
  build_response::build_post_response,
  context::KgotlaContext,
  person::LocalPersonView,
  post::{EditPost, PostResponse},
  utils::{check_post_creator, check_post_title},
};
use kgotla_db_schema::{
  source::post::{Post, PostUpdateForm},
  traits::Crud,
  utils::now_utc,
};
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn update_post(
  data: Json<EditPost>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<PostResponse>> {
  let post = Post::read_visible(&mut context.pool(), data.post_id).await?;
  check_post_creator(&post, &local_person_view.person)?;

  if let Some(title) = &data.title {
    check_post_title(title)?;
  }

  let form = PostUpdateForm {
    title: data.title.clone(),
    body: data.body.clone().map(Some),
    url: data.url.clone().map(Some),
    updated: Some(Some(now_utc())),
    ..Default::default()
  };
  Post::update(&mut context.pool(), post.id, &form).await?;

  Ok(Json(build_post_response(&context, post.id).await?))
}
