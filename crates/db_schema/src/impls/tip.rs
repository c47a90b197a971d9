use crate::{
  schema::{person, tip},
  source::tip::{Tip, TipInsertForm},
  utils::{get_conn, DbPool},
};
use diesel::{insert_into, ExpressionMethods, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, RunQueryDsl};
use kgotla_utils::error::{KgotlaErrorType, KgotlaResult};

impl Tip {
  /// Transfers wisdom points from sender to recipient and records the tip,
  /// all in one transaction. The sender row is locked first so concurrent
  /// tips cannot overdraw the balance.
  pub async fn send(pool: &mut DbPool<'_>, form: &TipInsertForm) -> KgotlaResult<Self> {
    if form.amount <= 0 {
      return Err(KgotlaErrorType::InvalidTipAmount.into());
    }
    if form.sender_id == form.recipient_id {
      return Err(KgotlaErrorType::CannotTipYourself.into());
    }

    let conn = &mut get_conn(pool).await?;
    let form = form.clone();
    conn
      .run_transaction(|conn| {
        async move {
          let sender_balance = person::table
            .find(form.sender_id)
            .select(person::wisdom_points)
            .for_update()
            .first::<i64>(conn)
            .await?;
          if sender_balance < form.amount {
            return Err(KgotlaErrorType::NotEnoughWisdomPoints.into());
          }

          diesel::update(person::table.find(form.sender_id))
            .set(person::wisdom_points.eq(person::wisdom_points - form.amount))
            .execute(conn)
            .await?;
          diesel::update(person::table.find(form.recipient_id))
            .set(person::wisdom_points.eq(person::wisdom_points + form.amount))
            .execute(conn)
            .await?;

          let sent = insert_into(tip::table)
            .values(&form)
            .get_result::<Tip>(conn)
            .await?;

          Ok(sent)
        }
        .scope_boxed()
      })
      .await
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::{
    source::person::{Person, PersonInsertForm},
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_tip_conserves_points() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let sender_form = PersonInsertForm {
      wisdom_points: Some(100),
      ..PersonInsertForm::test_form("karabo_tips")
    };
    let sender = Person::create(pool, &sender_form).await?;
    let recipient = Person::create(pool, &PersonInsertForm::test_form("tumelo_tips")).await?;

    let sent = Tip::send(
      pool,
      &TipInsertForm {
        sender_id: sender.id,
        recipient_id: recipient.id,
        amount: 30,
        note: Some("good advice".into()),
      },
    )
    .await?;
    assert_eq!(30, sent.amount);

    let sender = Person::read(pool, sender.id).await?;
    let recipient = Person::read(pool, recipient.id).await?;
    assert_eq!(70, sender.wisdom_points);
    assert_eq!(30, recipient.wisdom_points);
    assert_eq!(100, sender.wisdom_points + recipient.wisdom_points);

    // overdraw is rejected and leaves balances unchanged
    let overdraw = Tip::send(
      pool,
      &TipInsertForm {
        sender_id: sender.id,
        recipient_id: recipient.id,
        amount: 1000,
        note: None,
      },
    )
    .await;
    assert!(overdraw.is_err());
    assert_eq!(70, Person::read(pool, sender.id).await?.wisdom_points);

    // self-tips are rejected before any lookup
    let self_tip = Tip::send(
      pool,
      &TipInsertForm {
        sender_id: sender.id,
        recipient_id: sender.id,
        amount: 10,
        note: None,
      },
    )
    .await;
    assert!(self_tip.is_err());

    Person::delete(pool, sender.id).await?;
    Person::delete(pool, recipient.id).await?;
    Ok(())
  }
}
