use crate::{
  newtypes::{CommentId, PostId},
  schema::{comment, post},
  source::comment::{Comment, CommentInsertForm, CommentUpdateForm},
  traits::Crud,
  utils::{functions::coalesce, get_conn, now_utc, DbPool},
};
use async_trait::async_trait;
use diesel::{insert_into, ExpressionMethods, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, RunQueryDsl};
use kgotla_utils::error::{KgotlaErrorExt, KgotlaErrorExt2, KgotlaErrorType, KgotlaResult};

#[async_trait]
impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentUpdateForm;
  type IdType = CommentId;

  /// Inserts the comment and bumps the post's comment_count in one
  /// transaction.
  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let form = form.clone();
    conn
      .run_transaction(|conn| {
        async move {
          let inserted = insert_into(comment::table)
            .values(&form)
            .get_result::<Comment>(conn)
            .await?;

          diesel::update(post::table.find(form.post_id))
            .set(post::comment_count.eq(post::comment_count + 1))
            .execute(conn)
            .await?;

          Ok(inserted)
        }
        .scope_boxed()
      })
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntCreateComment)
  }

  async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .find(comment_id)
      .first(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
    form: &Self::UpdateForm,
  ) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(comment::table.find(comment_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntUpdateComment)
  }

  async fn delete(pool: &mut DbPool<'_>, comment_id: CommentId) -> KgotlaResult<usize> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      diesel::delete(comment::table.find(comment_id))
        .execute(conn)
        .await?,
    )
  }
}

impl Comment {
  /// Reads a comment, treating soft-deleted rows as missing.
  pub async fn read_visible(pool: &mut DbPool<'_>, comment_id: CommentId) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .find(comment_id)
      .filter(comment::deleted.eq(false))
      .first(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }

  /// Marks the comment deleted and decrements the post's comment_count, in
  /// one transaction. Deleting twice only counts once.
  pub async fn soft_delete(pool: &mut DbPool<'_>, comment_id: CommentId) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    conn
      .run_transaction(|conn| {
        async move {
          let updated = diesel::update(
            comment::table
              .find(comment_id)
              .filter(comment::deleted.eq(false)),
          )
          .set((
            comment::deleted.eq(true),
            comment::updated.eq(now_utc()),
          ))
          .get_result::<Comment>(conn)
          .await?;

          diesel::update(post::table.find(updated.post_id))
            .set(post::comment_count.eq(post::comment_count - 1))
            .execute(conn)
            .await?;

          Ok(updated)
        }
        .scope_boxed()
      })
      .await
  }

  /// All comments of a post in thread order: parents before children, then
  /// oldest first.
  pub async fn list_for_post(pool: &mut DbPool<'_>, post_id: PostId) -> KgotlaResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .filter(comment::post_id.eq(post_id))
      .order((coalesce(comment::parent_id, comment::id), comment::published))
      .load::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::{
    source::{
      group::{Group, GroupInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_comment_count_follows_comments() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("kagiso_comments")).await?;
    let group = Group::create(
      pool,
      &GroupInsertForm::new("rains_comments".into(), "Rains".into()),
    )
    .await?;
    let post = Post::create(
      pool,
      &PostInsertForm::new(author.id, group.id, "When do the rains come".into()),
    )
    .await?;

    let top = Comment::create(
      pool,
      &CommentInsertForm::new(author.id, post.id, "Usually November.".into()),
    )
    .await?;
    let reply_form = CommentInsertForm {
      parent_id: Some(top.id),
      ..CommentInsertForm::new(author.id, post.id, "Earlier up north.".into())
    };
    let reply = Comment::create(pool, &reply_form).await?;
    assert_eq!(Some(top.id), reply.parent_id);
    assert_eq!(2, Post::read(pool, post.id).await?.comment_count);

    let threaded = Comment::list_for_post(pool, post.id).await?;
    assert_eq!(vec![top.id, reply.id], threaded.iter().map(|c| c.id).collect::<Vec<_>>());

    let deleted = Comment::soft_delete(pool, reply.id).await?;
    assert!(deleted.deleted);
    assert_eq!(1, Post::read(pool, post.id).await?.comment_count);

    // deleting again must not decrement twice; the row is already deleted so
    // the guarded update finds nothing
    assert!(Comment::soft_delete(pool, reply.id).await.is_err());
    assert_eq!(1, Post::read(pool, post.id).await?.comment_count);

    Post::delete(pool, post.id).await?;
    Group::delete(pool, group.id).await?;
    Person::delete(pool, author.id).await?;
    Ok(())
  }
}
