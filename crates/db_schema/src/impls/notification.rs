use crate::{
  newtypes::PersonId,
  schema::notification,
  source::notification::{Notification, NotificationInsertForm},
  utils::{get_conn, DbPool},
};
use diesel::{insert_into, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use kgotla_utils::{
  error::{KgotlaErrorExt, KgotlaErrorType, KgotlaResult},
  FETCH_LIMIT_MAX,
};

impl Notification {
  pub async fn create(pool: &mut DbPool<'_>, form: &NotificationInsertForm) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(notification::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::CouldntCreateNotification)
  }

  pub async fn list_for_recipient(
    pool: &mut DbPool<'_>,
    recipient_id: PersonId,
    unread_only: bool,
  ) -> KgotlaResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let mut query = notification::table
      .filter(notification::recipient_id.eq(recipient_id))
      .order(notification::published.desc())
      .limit(FETCH_LIMIT_MAX)
      .into_boxed();

    if unread_only {
      query = query.filter(notification::read.eq(false));
    }

    query
      .load::<Self>(conn)
      .await
      .with_kgotla_type(KgotlaErrorType::NotFound)
  }

  pub async fn mark_all_read(pool: &mut DbPool<'_>, recipient_id: PersonId) -> KgotlaResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      notification::table
        .filter(notification::recipient_id.eq(recipient_id))
        .filter(notification::read.eq(false)),
    )
    .set(notification::read.eq(true))
    .execute(conn)
    .await
    .with_kgotla_type(KgotlaErrorType::CouldntUpdateNotifications)
  }
}
