use crate::{
  newtypes::{GroupId, PostId},
  schema::post,
  source::post::{Post, PostInsertForm, PostUpdateForm},
  traits::Crud,
  utils::{get_conn, now_utc, DbPool},
};
use async_trait::async_trait;
use diesel::{insert_into, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use kgotla_utils::{
  error::{KgotlaErrorExt, KgotlaErrorType, KgotlaResult},
  FETCH_LIMIT_DEFAULT,
  FETCH_LIMIT_MAX,
};

#[async_trait]
impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntCreatePost)
  }

  async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .find(post_id)
      .first(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    form: &Self::UpdateForm,
  ) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntUpdatePost)
  }

  async fn delete(pool: &mut DbPool<'_>, post_id: PostId) -> KgotlaResult<usize> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      diesel::delete(post::table.find(post_id))
        .execute(conn)
        .await?,
    )
  }
}

impl Post {
  /// Reads a post, treating soft-deleted rows as missing.
  pub async fn read_visible(pool: &mut DbPool<'_>, post_id: PostId) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .find(post_id)
      .filter(post::deleted.eq(false))
      .first(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }

  pub async fn soft_delete(pool: &mut DbPool<'_>, post_id: PostId) -> KgotlaResult<Self> {
    let form = PostUpdateForm {
      deleted: Some(true),
      updated: Some(Some(now_utc())),
      ..Default::default()
    };
    Self::update(pool, post_id, &form).await
  }

  pub async fn list(
    pool: &mut DbPool<'_>,
    for_group_id: Option<GroupId>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> KgotlaResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let limit = limit.unwrap_or(FETCH_LIMIT_DEFAULT).clamp(1, FETCH_LIMIT_MAX);
    let offset = limit * (page.unwrap_or(1).max(1) - 1);

    let mut query = post::table
      .filter(post::deleted.eq(false))
      .order(post::published.desc())
      .limit(limit)
      .offset(offset)
      .into_boxed();

    if let Some(for_group_id) = for_group_id {
      query = query.filter(post::group_id.eq(for_group_id));
    }

    query
      .load::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::{
    enums::PostKind,
    source::{
      group::{Group, GroupInsertForm},
      person::{Person, PersonInsertForm},
    },
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_crud() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let creator = Person::create(pool, &PersonInsertForm::test_form("lesego_posts")).await?;
    let group = Group::create(
      pool,
      &GroupInsertForm::new("harvest_posts".into(), "Harvest".into()),
    )
    .await?;

    let form = PostInsertForm {
      kind: Some(PostKind::Question),
      body: Some("Has anyone tried drought-resistant sorghum?".into()),
      ..PostInsertForm::new(creator.id, group.id, "Sorghum advice".into())
    };
    let inserted = Post::create(pool, &form).await?;
    assert_eq!(PostKind::Question, inserted.kind);
    assert_eq!(0, inserted.upvotes);
    assert_eq!(0, inserted.downvotes);
    assert_eq!(0, inserted.comment_count);
    assert!(!inserted.deleted);

    let listed = Post::list(pool, Some(group.id), None, None).await?;
    assert_eq!(1, listed.len());

    let deleted = Post::soft_delete(pool, inserted.id).await?;
    assert!(deleted.deleted);

    // soft-deleted posts disappear from reads and listings
    assert!(Post::read_visible(pool, inserted.id).await.is_err());
    let listed = Post::list(pool, Some(group.id), None, None).await?;
    assert!(listed.is_empty());

    Post::delete(pool, inserted.id).await?;
    Group::delete(pool, group.id).await?;
    Person::delete(pool, creator.id).await?;
    Ok(())
  }
}
