use crate::{
  newtypes::PersonId,
  schema::person,
  source::person::{Person, PersonInsertForm, PersonUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use async_trait::async_trait;
use diesel::{insert_into, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;
use kgotla_utils::error::{KgotlaErrorExt, KgotlaErrorType, KgotlaResult};

#[async_trait]
impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type UpdateForm = PersonUpdateForm;
  type IdType = PersonId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntUpdatePerson)
  }

  async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .find(person_id)
      .first(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    form: &Self::UpdateForm,
  ) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(person::table.find(person_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntUpdatePerson)
  }

  async fn delete(pool: &mut DbPool<'_>, person_id: PersonId) -> KgotlaResult<usize> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      diesel::delete(person::table.find(person_id))
        .execute(conn)
        .await?,
    )
  }
}

impl Person {
  /// Looks up a person by the identity provider's subject claim.
  pub async fn read_by_external_id(
    pool: &mut DbPool<'_>,
    external_id: &str,
  ) -> KgotlaResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      person::table
        .filter(person::external_id.eq(external_id))
        .first(conn)
        .await
        .optional()?,
    )
  }
}
