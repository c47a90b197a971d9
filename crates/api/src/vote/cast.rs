use actix_web::web::{Data, Json};
use kgotla_api_common::{
  build_response::build_vote_response,
  context::KgotlaContext,
  person::LocalPersonView,
  vote::{CastVote, VoteResponse},
};
use kgotla_db_schema::source::vote::Vote;
use kgotla_utils::error::KgotlaResult;

/// Casts a vote on a post or comment using the three-way toggle protocol.
/// The direction and target type were already validated by serde; the ledger
/// takes care of existence, locking and counter maintenance.
#[tracing::instrument(skip(context))]
pub async fn cast_vote(
  data: Json<CastVote>,
  context: Data<KgotlaContext>,
  local_person_view: LocalPersonView,
) -> KgotlaResult<Json<VoteResponse>> {
  let target = data.target()?;

  let outcome = Vote::cast(
    &mut context.pool(),
    local_person_view.person.id,
    target,
    data.direction,
  )
  .await?;

  Ok(Json(build_vote_response(outcome)))
}
