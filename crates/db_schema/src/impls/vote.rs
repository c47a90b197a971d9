use crate::{
  newtypes::PersonId,
  schema::{comment, post, vote},
  source::vote::{Vote, VoteDirection, VoteInsertForm, VoteOutcome, VoteStatus, VoteTarget},
  utils::{get_conn, DbPool},
};
use diesel::{insert_into, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, AsyncPgConnection, RunQueryDsl};
use kgotla_utils::error::KgotlaResult;

impl Vote {
  /// Casts a vote using the three-way toggle: a first intent records the
  /// direction, a repeated same-direction intent removes the vote, and an
  /// opposite-direction intent flips it. The target's denormalized counters
  /// are adjusted in the same transaction, and the target row is locked
  /// first so that concurrent casts for the same target serialize. A missing
  /// or soft-deleted target fails with NotFound before any mutation.
  pub async fn cast(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    target: VoteTarget,
    direction: VoteDirection,
  ) -> KgotlaResult<VoteOutcome> {
    let conn = &mut get_conn(pool).await?;
    conn
      .run_transaction(|conn| {
        async move {
          let (upvotes, downvotes) = lock_target(conn, target).await?;

          let existing = vote::table
            .filter(vote::person_id.eq(person_id))
            .filter(vote::target_type.eq(target.target_type()))
            .filter(vote::target_id.eq(target.target_id()))
            .first::<Vote>(conn)
            .await
            .optional()?;

          let outcome = match existing {
            None => {
              let form = VoteInsertForm {
                person_id,
                target_type: target.target_type(),
                target_id: target.target_id(),
                score: direction.score(),
              };
              insert_into(vote::table)
                .values(&form)
                .execute(conn)
                .await?;
              let (upvotes, downvotes) = apply_delta(upvotes, downvotes, direction, 1);
              VoteOutcome {
                status: VoteStatus::Added,
                direction: Some(direction),
                upvotes,
                downvotes,
              }
            }
            Some(existing) if existing.score == direction.score() => {
              diesel::delete(vote::table.find(existing.id))
                .execute(conn)
                .await?;
              let (upvotes, downvotes) = apply_delta(upvotes, downvotes, direction, -1);
              VoteOutcome {
                status: VoteStatus::Removed,
                direction: None,
                upvotes,
                downvotes,
              }
            }
            Some(existing) => {
              diesel::update(vote::table.find(existing.id))
                .set(vote::score.eq(direction.score()))
                .execute(conn)
                .await?;
              let old_direction = VoteDirection::from_score(existing.score)?;
              let (upvotes, downvotes) = apply_delta(upvotes, downvotes, old_direction, -1);
              let (upvotes, downvotes) = apply_delta(upvotes, downvotes, direction, 1);
              VoteOutcome {
                status: VoteStatus::Switched,
                direction: Some(direction),
                upvotes,
                downvotes,
              }
            }
          };

          write_counters(conn, target, outcome.upvotes, outcome.downvotes).await?;

          Ok(outcome)
        }
        .scope_boxed()
      })
      .await
  }
}

/// Locks the target row and returns its current counters. The row lock is
/// what serializes two concurrent casts by the same voter on the same
/// target; without it both could observe "no existing vote" and insert.
async fn lock_target(
  conn: &mut AsyncPgConnection,
  target: VoteTarget,
) -> KgotlaResult<(i64, i64)> {
  let counters = match target {
    VoteTarget::Post(post_id) => {
      post::table
        .find(post_id)
        .filter(post::deleted.eq(false))
        .select((post::upvotes, post::downvotes))
        .for_update()
        .first::<(i64, i64)>(conn)
        .await?
    }
    VoteTarget::Comment(comment_id) => {
      comment::table
        .find(comment_id)
        .filter(comment::deleted.eq(false))
        .select((comment::upvotes, comment::downvotes))
        .for_update()
        .first::<(i64, i64)>(conn)
        .await?
    }
  };
  Ok(counters)
}

fn apply_delta(
  upvotes: i64,
  downvotes: i64,
  direction: VoteDirection,
  delta: i64,
) -> (i64, i64) {
  match direction {
    VoteDirection::Up => (upvotes + delta, downvotes),
    VoteDirection::Down => (upvotes, downvotes + delta),
  }
}

async fn write_counters(
  conn: &mut AsyncPgConnection,
  target: VoteTarget,
  upvotes: i64,
  downvotes: i64,
) -> KgotlaResult<()> {
  match target {
    VoteTarget::Post(post_id) => {
      diesel::update(post::table.find(post_id))
        .set((post::upvotes.eq(upvotes), post::downvotes.eq(downvotes)))
        .execute(conn)
        .await?;
    }
    VoteTarget::Comment(comment_id) => {
      diesel::update(comment::table.find(comment_id))
        .set((
          comment::upvotes.eq(upvotes),
          comment::downvotes.eq(downvotes),
        ))
        .execute(conn)
        .await?;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::{
    enums::VoteTargetType,
    source::{
      comment::{Comment, CommentInsertForm},
      group::{Group, GroupInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  struct Data {
    voter: Person,
    other_voter: Person,
    group: Group,
    post: Post,
    comment: Comment,
  }

  async fn init_data(pool: &mut DbPool<'_>) -> KgotlaResult<Data> {
    let voter = Person::create(pool, &PersonInsertForm::test_form("mpho_votes")).await?;
    let other_voter = Person::create(pool, &PersonInsertForm::test_form("dineo_votes")).await?;
    let group = Group::create(
      pool,
      &GroupInsertForm::new("planting_votes".into(), "Planting".into()),
    )
    .await?;
    let post = Post::create(
      pool,
      &PostInsertForm::new(voter.id, group.id, "Maize spacing".into()),
    )
    .await?;
    let comment = Comment::create(
      pool,
      &CommentInsertForm::new(voter.id, post.id, "75cm between rows works.".into()),
    )
    .await?;
    Ok(Data {
      voter,
      other_voter,
      group,
      post,
      comment,
    })
  }

  async fn cleanup(pool: &mut DbPool<'_>, data: Data) -> KgotlaResult<()> {
    Post::delete(pool, data.post.id).await?;
    Group::delete(pool, data.group.id).await?;
    Person::delete(pool, data.voter.id).await?;
    Person::delete(pool, data.other_voter.id).await?;
    Ok(())
  }

  async fn vote_rows_for(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    target: VoteTarget,
  ) -> KgotlaResult<Vec<Vote>> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      vote::table
        .filter(vote::person_id.eq(person_id))
        .filter(vote::target_type.eq(target.target_type()))
        .filter(vote::target_id.eq(target.target_id()))
        .load::<Vote>(conn)
        .await?,
    )
  }

  #[tokio::test]
  #[serial]
  async fn test_toggle_same_direction_removes() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;
    let target = VoteTarget::Post(data.post.id);

    let added = Vote::cast(pool, data.voter.id, target, VoteDirection::Up).await?;
    assert_eq!(VoteStatus::Added, added.status);
    assert_eq!(Some(VoteDirection::Up), added.direction);
    assert_eq!((1, 0), (added.upvotes, added.downvotes));

    let post = Post::read(pool, data.post.id).await?;
    assert_eq!((1, 0), (post.upvotes, post.downvotes));

    let removed = Vote::cast(pool, data.voter.id, target, VoteDirection::Up).await?;
    assert_eq!(VoteStatus::Removed, removed.status);
    assert_eq!(None, removed.direction);
    assert_eq!((0, 0), (removed.upvotes, removed.downvotes));

    // net effect of the toggle pair is zero
    let post = Post::read(pool, data.post.id).await?;
    assert_eq!((0, 0), (post.upvotes, post.downvotes));
    assert!(vote_rows_for(pool, data.voter.id, target).await?.is_empty());

    cleanup(pool, data).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_switch_conserves_total() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;
    let target = VoteTarget::Post(data.post.id);

    Vote::cast(pool, data.voter.id, target, VoteDirection::Up).await?;
    let switched = Vote::cast(pool, data.voter.id, target, VoteDirection::Down).await?;
    assert_eq!(VoteStatus::Switched, switched.status);
    assert_eq!(Some(VoteDirection::Down), switched.direction);
    assert_eq!((0, 1), (switched.upvotes, switched.downvotes));

    // total is conserved across the switch, each counter moved by exactly one
    let post = Post::read(pool, data.post.id).await?;
    assert_eq!(1, post.upvotes + post.downvotes);
    assert_eq!((0, 1), (post.upvotes, post.downvotes));

    // still exactly one ledger row, now flipped
    let rows = vote_rows_for(pool, data.voter.id, target).await?;
    assert_eq!(1, rows.len());
    assert_eq!(-1, rows[0].score);

    cleanup(pool, data).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_at_most_one_vote_row() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;
    let target = VoteTarget::Comment(data.comment.id);

    let sequence = [
      VoteDirection::Up,
      VoteDirection::Down,
      VoteDirection::Down,
      VoteDirection::Up,
      VoteDirection::Up,
      VoteDirection::Down,
    ];
    for direction in sequence {
      let outcome = Vote::cast(pool, data.voter.id, target, direction).await?;
      // counters never go negative for any sequence of valid casts
      assert!(outcome.upvotes >= 0);
      assert!(outcome.downvotes >= 0);
      let rows = vote_rows_for(pool, data.voter.id, target).await?;
      assert!(rows.len() <= 1);

      // the denormalized counters match the ledger rows after every step
      let comment = Comment::read(pool, data.comment.id).await?;
      assert_eq!((comment.upvotes, comment.downvotes), (outcome.upvotes, outcome.downvotes));
      let expected_up = rows.iter().filter(|v| v.score == 1).count() as i64;
      let expected_down = rows.iter().filter(|v| v.score == -1).count() as i64;
      assert_eq!((expected_up, expected_down), (comment.upvotes, comment.downvotes));
    }

    cleanup(pool, data).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_two_voters_are_independent() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;
    let target = VoteTarget::Post(data.post.id);

    Vote::cast(pool, data.voter.id, target, VoteDirection::Up).await?;
    let outcome = Vote::cast(pool, data.other_voter.id, target, VoteDirection::Down).await?;
    assert_eq!(VoteStatus::Added, outcome.status);
    assert_eq!((1, 1), (outcome.upvotes, outcome.downvotes));

    // removing one voter's vote leaves the other's intact
    let removed = Vote::cast(pool, data.voter.id, target, VoteDirection::Up).await?;
    assert_eq!((0, 1), (removed.upvotes, removed.downvotes));

    cleanup(pool, data).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_missing_target_is_not_found() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;

    let missing = VoteTarget::Post(crate::newtypes::PostId(0));
    let res = Vote::cast(pool, data.voter.id, missing, VoteDirection::Up).await;
    assert!(res.is_err());

    // no ledger row was written
    assert!(vote_rows_for(pool, data.voter.id, missing).await?.is_empty());

    cleanup(pool, data).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_deleted_target_rejects_votes() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;
    let target = VoteTarget::Post(data.post.id);

    Post::soft_delete(pool, data.post.id).await?;
    let res = Vote::cast(pool, data.voter.id, target, VoteDirection::Up).await;
    assert!(res.is_err());
    assert!(vote_rows_for(pool, data.voter.id, target).await?.is_empty());

    cleanup(pool, data).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_concurrent_casts_same_voter_same_target() -> KgotlaResult<()> {
    let actual_pool = build_db_pool_for_tests().await;
    let pool = &mut (&actual_pool).into();
    let data = init_data(pool).await?;
    let target = VoteTarget::Post(data.post.id);
    let voter_id = data.voter.id;

    // two simultaneous "up" casts; the row lock forces one to run after the
    // other, so the pair must behave like add-then-remove
    let pool_a = actual_pool.clone();
    let pool_b = actual_pool.clone();
    let (res_a, res_b) = tokio::join!(
      async move { Vote::cast(&mut (&pool_a).into(), voter_id, target, VoteDirection::Up).await },
      async move { Vote::cast(&mut (&pool_b).into(), voter_id, target, VoteDirection::Up).await },
    );
    let outcome_a = res_a?;
    let outcome_b = res_b?;

    let statuses = [outcome_a.status, outcome_b.status];
    assert!(statuses.contains(&VoteStatus::Added));
    assert!(statuses.contains(&VoteStatus::Removed));

    let post = Post::read(pool, data.post.id).await?;
    assert!(post.upvotes <= 1);
    assert!(vote_rows_for(pool, voter_id, target).await?.len() <= 1);

    cleanup(pool, data).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_comment_votes_do_not_touch_post_counters() -> KgotlaResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();
    let data = init_data(pool).await?;

    Vote::cast(
      pool,
      data.voter.id,
      VoteTarget::Comment(data.comment.id),
      VoteDirection::Up,
    )
    .await?;

    let post = Post::read(pool, data.post.id).await?;
    assert_eq!((0, 0), (post.upvotes, post.downvotes));
    let comment = Comment::read(pool, data.comment.id).await?;
    assert_eq!((1, 0), (comment.upvotes, comment.downvotes));

    // same numeric id, different target type, distinct ledger slots
    let rows = vote_rows_for(pool, data.voter.id, VoteTarget::Comment(data.comment.id)).await?;
    assert_eq!(1, rows.len());
    assert_eq!(VoteTargetType::Comment, rows[0].target_type);

    cleanup(pool, data).await?;
    Ok(())
  }
}
