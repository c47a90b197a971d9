use actix_web::web::{Data, Json, Query};
use kgotla_api_common::{
  context::KgotlaContext,
  person::{ListNotifications, ListNotificationsResponse, LocalPersonView, MarkAllReadResponse},
};
use kgotla_db_schema::source::notification::Notification;
use kgotla_utils::error::KgotlaResult;

#[tracing::instrument(skip(context))]
pub async fn list_notifications(
  data: Query<ListNotifications>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<ListNotificationsResponse>> {
  let notifications = Notification::list_for_recipient(
    &mut context.pool(),
    local_person_view.person.id,
    data.unread_only.unwrap_or(false),
  )
  .await?;

  Ok(Json(ListNotificationsResponse { notifications }))
}

#[tracing::instrument(skip(context))]
pub async fn mark_all_notifications_read(
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<MarkAllReadResponse>> {
  let marked =
    Notification::mark_all_read(&mut context.pool(), local_person_view.person.id).await?;
  Ok(Json(MarkAllReadResponse { marked }))
}
