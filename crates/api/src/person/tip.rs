use actix_web::web::{Data, Json};
use kgotla_api_common::{
  context::KgotlaContext,
  person::{LocalPersonView, SendTip, TipResponse},
};
use kgotla_db_schema::{
  source::{
    notification::{Notification, NotificationInsertForm},
    person::Person,
    tip::{Tip, TipInsertForm},
  },
  traits::Crud,
};
use kgotla_utils::error::KgotlaResult;

/// Transfers wisdom points to another person and notifies them.
#[tracing::instrument(skip(context))]
pub async fn send_tip(
  data: Json<SendTip>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<TipResponse>> {
  // 404 before the amount checks if the recipient does not exist
  Person::read(&mut context.pool(), data.recipient_id).await?;

  let tip = Tip::send(
    &mut context.pool(),
    &TipInsertForm {
      sender_id: local_person_view.person.id,
      recipient_id: data.recipient_id,
      amount: data.amount,
      note: data.note.clone(),
    },
  )
  .await?;

  Notification::create(
    &mut context.pool(),
    &NotificationInsertForm::new_tip(tip.recipient_id, tip.id),
  )
  .await?;

  let sender = Person::read(&mut context.pool(), local_person_view.person.id).await?;

  Ok(Json(TipResponse {
    tip,
    wisdom_points: sender.wisdom_points,
  }))
}
