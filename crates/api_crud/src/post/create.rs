use actix_web::web::{Data, Json};
use kgotla_api_common::{
  build_response::build_post_response,
  context::KgotlaContext,
  person::LocalPersonView,
  post::{CreatePost, PostResponse},
  utils::{check_post_kind_payload, check_post_title},
};
use kgotla_db_schema::{
  enums::PostKind,
  source::{
    group::Group,
    post::{Post, PostInsertForm},
  },
  traits::Crud,
};
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<PostResponse>> {
  check_post_title(&data.title)?;
  let kind = data.kind.unwrap_or(PostKind::Text);
  check_post_kind_payload(kind, data.url.as_deref(), data.poll_options.as_ref())?;

  // 404 for posts aimed at a missing group
  Group::read(&mut context.pool(), data.group_id).await?;

  let form = PostInsertForm {
    kind: Some(kind),
    body: data.body.clone(),
    url: data.url.clone(),
    poll_options: data
      .poll_options
      .as_ref()
      .map(|options| serde_json::json!(options)),
    ..PostInsertForm::new(
      local_person_view.person.id,
      data.group_id,
      data.title.trim().to_owned(),
    )
  };
  let post = Post::create(&mut context.pool(), &form).await?;

  Ok(Json(build_post_response(&context, post.id).await?))
}
