use kgotla_db_schema::{
  enums::VoteTargetType,
  newtypes::{CommentId, PostId},
  source::vote::{VoteDirection, VoteOutcome, VoteStatus, VoteTarget},
};
use kgotla_utils::error::{KgotlaErrorType, KgotlaResult};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A vote intent. Field names follow the published wire contract, which is
/// camelCase unlike the rest of the API. Unknown directions or target types
/// fail serde validation and never reach the ledger.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct CastVote {
  pub target_type: VoteTargetType,
  pub target_id: i32,
  pub direction: VoteDirection,
}

impl CastVote {
  pub fn target(&self) -> KgotlaResult<VoteTarget> {
    if self.target_id <= 0 {
      return Err(KgotlaErrorType::InvalidVoteTarget.into());
    }
    Ok(match self.target_type {
      VoteTargetType::Post => VoteTarget::Post(PostId(self.target_id)),
      VoteTargetType::Comment => VoteTarget::Comment(CommentId(self.target_id)),
    })
  }
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
  pub status: VoteStatus,
  pub direction: Option<VoteDirection>,
  pub upvote_count: i64,
  pub downvote_count: i64,
}

impl From<VoteOutcome> for VoteResponse {
  fn from(outcome: VoteOutcome) -> Self {
    VoteResponse {
      status: outcome.status,
      direction: outcome.direction,
      upvote_count: outcome.upvotes,
      downvote_count: outcome.downvotes,
    }
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn parses_wire_contract() {
    let body = "{\"targetType\":\"post\",\"targetId\":7,\"direction\":\"up\"}";
    let parsed: CastVote = serde_json::from_str(body).unwrap();
    assert_eq!(VoteTargetType::Post, parsed.target_type);
    assert_eq!(7, parsed.target_id);
    assert_eq!(VoteDirection::Up, parsed.direction);
    assert_eq!(VoteTarget::Post(PostId(7)), parsed.target().unwrap());
  }

  #[test]
  fn rejects_unknown_direction() {
    let body = "{\"targetType\":\"post\",\"targetId\":7,\"direction\":\"sideways\"}";
    assert!(serde_json::from_str::<CastVote>(body).is_err());
  }

  #[test]
  fn rejects_unknown_target_type() {
    let body = "{\"targetType\":\"group\",\"targetId\":7,\"direction\":\"up\"}";
    assert!(serde_json::from_str::<CastVote>(body).is_err());
  }

  #[test]
  fn rejects_nonpositive_target_id() {
    let body = "{\"targetType\":\"comment\",\"targetId\":0,\"direction\":\"down\"}";
    let parsed: CastVote = serde_json::from_str(body).unwrap();
    assert!(parsed.target().is_err());
  }

  #[test]
  fn response_omits_direction_when_removed() {
    let response = VoteResponse::from(VoteOutcome {
      status: VoteStatus::Removed,
      direction: None,
      upvotes: 0,
      downvotes: 0,
    });
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
      "{\"status\":\"removed\",\"upvoteCount\":0,\"downvoteCount\":0}",
      json
    );
  }

  #[test]
  fn response_includes_direction_when_added() {
    let response = VoteResponse::from(VoteOutcome {
      status: VoteStatus::Added,
      direction: Some(VoteDirection::Down),
      upvotes: 2,
      downvotes: 1,
    });
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
      "{\"status\":\"added\",\"direction\":\"down\",\"upvoteCount\":2,\"downvoteCount\":1}",
      json
    );
  }
}
