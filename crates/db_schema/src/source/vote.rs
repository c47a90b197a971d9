use crate::{
  enums::VoteTargetType,
  newtypes::{CommentId, PersonId, PostId, VoteId},
  schema::vote,
};
use chrono::{DateTime, Utc};
use kgotla_utils::error::{KgotlaError, KgotlaErrorType};
use serde::{Deserialize, Serialize};

/// One voter's single slot on one target. Created on the first vote intent,
/// flipped in place on an opposite-direction intent, deleted on a repeated
/// same-direction intent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[derive(Queryable, Selectable, Identifiable)]
#[diesel(table_name = vote)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Vote {
  pub id: VoteId,
  pub person_id: PersonId,
  pub target_type: VoteTargetType,
  pub target_id: i32,
  /// +1 for up, -1 for down.
  pub score: i16,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = vote)]
pub struct VoteInsertForm {
  pub person_id: PersonId,
  pub target_type: VoteTargetType,
  pub target_id: i32,
  pub score: i16,
}

/// The direction of a vote intent, validated at the API boundary before it
/// reaches the ledger.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
  Up,
  Down,
}

impl VoteDirection {
  pub fn score(self) -> i16 {
    match self {
      VoteDirection::Up => 1,
      VoteDirection::Down => -1,
    }
  }

  pub fn from_score(score: i16) -> Result<Self, KgotlaError> {
    match score {
      1 => Ok(VoteDirection::Up),
      -1 => Ok(VoteDirection::Down),
      _ => Err(KgotlaErrorType::InvalidVoteDirection.into()),
    }
  }
}

/// The votable target, a discriminated reference into either the post or the
/// comment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteTarget {
  Post(PostId),
  Comment(CommentId),
}

impl VoteTarget {
  pub fn target_type(self) -> VoteTargetType {
    match self {
      VoteTarget::Post(_) => VoteTargetType::Post,
      VoteTarget::Comment(_) => VoteTargetType::Comment,
    }
  }

  pub fn target_id(self) -> i32 {
    match self {
      VoteTarget::Post(post_id) => post_id.0,
      VoteTarget::Comment(comment_id) => comment_id.0,
    }
  }
}

/// Which arm of the toggle protocol a cast took.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
  Added,
  Removed,
  Switched,
}

/// The result of a cast, with the target's counters as they stand after the
/// transition committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
  pub status: VoteStatus,
  /// The recorded direction. None when the cast removed the vote.
  pub direction: Option<VoteDirection>,
  pub upvotes: i64,
  pub downvotes: i64,
}
