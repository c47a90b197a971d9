use crate::{
  newtypes::{GroupId, PersonId},
  schema::{group_member, groups},
  source::group::{Group, GroupInsertForm, GroupMember, GroupMemberForm, GroupUpdateForm},
  traits::{Crud, Joinable},
  utils::{get_conn, DbPool},
};
use async_trait::async_trait;
use diesel::{insert_into, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, RunQueryDsl};
use kgotla_utils::{
  error::{KgotlaErrorExt, KgotlaErrorExt2, KgotlaErrorType, KgotlaResult},
  FETCH_LIMIT_MAX,
};

#[async_trait]
impl Crud for Group {
  type InsertForm = GroupInsertForm;
  type UpdateForm = GroupUpdateForm;
  type IdType = GroupId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(groups::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntCreateGroup)
  }

  async fn read(pool: &mut DbPool<'_>, group_id: GroupId) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    groups::table
      .find(group_id)
      .first(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    group_id: GroupId,
    form: &Self::UpdateForm,
  ) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(groups::table.find(group_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntUpdateGroup)
  }

  async fn delete(pool: &mut DbPool<'_>, group_id: GroupId) -> KgotlaResult<usize> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      diesel::delete(groups::table.find(group_id))
        .execute(conn)
        .await?,
    )
  }
}

impl Group {
  pub async fn read_by_name(pool: &mut DbPool<'_>, group_name: &str) -> KgotlaResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      groups::table
        .filter(groups::name.eq(group_name))
        .first(conn)
        .await
        .optional()?,
    )
  }

  pub async fn list(pool: &mut DbPool<'_>) -> KgotlaResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    groups::table
      .order(groups::member_count.desc())
      .then_order_by(groups::published.desc())
      .limit(FETCH_LIMIT_MAX)
      .load::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }
}

#[async_trait]
impl Joinable for GroupMember {
  type Form = GroupMemberForm;

  /// Inserts the membership and bumps the group's member_count in one
  /// transaction. Joining twice is a no-op for the counter.
  async fn join(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let form = form.clone();
    conn
      .run_transaction(|conn| {
        async move {
          let existing = group_member::table
            .filter(group_member::group_id.eq(form.group_id))
            .filter(group_member::person_id.eq(form.person_id))
            .first::<GroupMember>(conn)
            .await
            .optional()?;
          if let Some(existing) = existing {
            return Ok(existing);
          }

          let member = insert_into(group_member::table)
            .values(&form)
            .get_result::<GroupMember>(conn)
            .await?;

          diesel::update(groups::table.find(form.group_id))
            .set(groups::member_count.eq(groups::member_count + 1))
            .execute(conn)
            .await?;

          Ok(member)
        }
        .scope_boxed()
      })
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntJoinGroup)
  }

  async fn leave(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<usize> {
    let conn = &mut get_conn(pool).await?;
    let form = form.clone();
    conn
      .run_transaction(|conn| {
        async move {
          let removed = diesel::delete(
            group_member::table
              .filter(group_member::group_id.eq(form.group_id))
              .filter(group_member::person_id.eq(form.person_id)),
          )
          .execute(conn)
          .await?;

          if removed > 0 {
            diesel::update(groups::table.find(form.group_id))
              .set(groups::member_count.eq(groups::member_count - 1))
              .execute(conn)
              .await?;
          }

          Ok(removed)
        }
        .scope_boxed()
      })
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntJoinGroup)
  }
}

impl GroupMember {
  pub async fn read(
    pool: &mut DbPool<'_>,
    group_id: GroupId,
    person_id: PersonId,
  ) -> KgotlaResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      group_member::table
        .filter(group_member::group_id.eq(group_id))
        .filter(group_member::person_id.eq(person_id))
        .first(conn)
        .await
        .optional()?,
    )
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::{
    source::person::{Person, PersonInsertForm},
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_member_count_follows_memberships() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let thabo = Person::create(pool, &PersonInsertForm::test_form("thabo_groups")).await?;
    let neo = Person::create(pool, &PersonInsertForm::test_form("neo_groups")).await?;

    let group = Group::create(
      pool,
      &GroupInsertForm::new("cattle_talk".into(), "Cattle Talk".into()),
    )
    .await?;
    assert_eq!(0, group.member_count);

    let thabo_form = GroupMemberForm {
      group_id: group.id,
      person_id: thabo.id,
    };
    let neo_form = GroupMemberForm {
      group_id: group.id,
      person_id: neo.id,
    };

    GroupMember::join(pool, &thabo_form).await?;
    GroupMember::join(pool, &neo_form).await?;
    // joining again must not double count
    GroupMember::join(pool, &neo_form).await?;
    assert_eq!(2, Group::read(pool, group.id).await?.member_count);

    GroupMember::leave(pool, &neo_form).await?;
    assert_eq!(1, Group::read(pool, group.id).await?.member_count);

    // leaving when not a member is a no-op
    let removed = GroupMember::leave(pool, &neo_form).await?;
    assert_eq!(0, removed);
    assert_eq!(1, Group::read(pool, group.id).await?.member_count);

    Group::delete(pool, group.id).await?;
    Person::delete(pool, thabo.id).await?;
    Person::delete(pool, neo.id).await?;
    Ok(())
  }
}
