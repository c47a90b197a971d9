use crate::{
  newtypes::PersonId,
  schema::bookmark,
  source::bookmark::{Bookmark, BookmarkForm},
  traits::Saveable,
  utils::{get_conn, DbPool},
};
use async_trait::async_trait;
use diesel::{insert_into, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use kgotla_utils::error::{KgotlaErrorExt, KgotlaErrorType, KgotlaResult};

#[async_trait]
impl Saveable for Bookmark {
  type Form = BookmarkForm;

  async fn save(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(bookmark::table)
      .values(form)
      .on_conflict((bookmark::person_id, bookmark::post_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntBookmarkPost)
  }

  async fn unsave(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      bookmark::table
        .filter(bookmark::person_id.eq(form.person_id))
        .filter(bookmark::post_id.eq(form.post_id)),
    )
    .execute(conn)
    .await
    .with_kgotla_type(KgotlaErrorType::CouldntBookmarkPost)
  }
}

impl Bookmark {
  pub async fn list_for_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> KgotlaResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    bookmark::table
      .filter(bookmark::person_id.eq(person_id))
      .order(bookmark::published.desc())
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
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_save_is_idempotent() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let reader = Person::create(pool, &PersonInsertForm::test_form("boitumelo_marks")).await?;
    let group = Group::create(
      pool,
      &GroupInsertForm::new("recipes_marks".into(), "Recipes".into()),
    )
    .await?;
    let post = Post::create(
      pool,
      &PostInsertForm::new(reader.id, group.id, "Seswaa the slow way".into()),
    )
    .await?;

    let form = BookmarkForm {
      person_id: reader.id,
      post_id: post.id,
    };
    Bookmark::save(pool, &form).await?;
    Bookmark::save(pool, &form).await?;
    assert_eq!(1, Bookmark::list_for_person(pool, reader.id).await?.len());

    let removed = Bookmark::unsave(pool, &form).await?;
    assert_eq!(1, removed);
    assert!(Bookmark::list_for_person(pool, reader.id).await?.is_empty());

    Post::delete(pool, post.id).await?;
    Group::delete(pool, group.id).await?;
    Person::delete(pool, reader.id).await?;
    Ok(())
  }
}
