use actix_web::web::{Data, Json};
use kgotla_api_common::{
  context::KgotlaContext,
  person::LocalPersonView,
  post::{BookmarkPost, BookmarkPostResponse},
};
use kgotla_db_schema::{
  source::{
    bookmark::{Bookmark, BookmarkForm},
    post::Post,
  },
  traits::Saveable,
};
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn bookmark_post(
  data: Json<BookmarkPost>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<BookmarkPostResponse>> {
  // 404 for missing or soft-deleted posts
  let post = Post::read_visible(&mut context.pool(), data.post_id).await?;

  let form = BookmarkForm {
    person_id: local_person_view.person.id,
    post_id: post.id,
  };
  if data.save {
    Bookmark::save(&mut context.pool(), &form).await?;
  } else {
    Bookmark::unsave(&mut context.pool(), &form).await?;
  }

  Ok(Json(BookmarkPostResponse {
    post_id: post.id,
    bookmarked: data.save,
  }))
}
