use crate::{
  comment::CommentResponse,
  context::KgotlaContext,
  group::GroupResponse,
  post::PostResponse,
  vote::VoteResponse,
};
use kgotla_db_schema::{
  newtypes::{CommentId, GroupId, PostId},
  source::{comment::Comment, group::Group, post::Post, vote::VoteOutcome},
  traits::Crud,
};
use kgotla_utils::error::KgotlaResult;

pub async fn build_post_response(
  context: &KgotlaContext,
  post_id: PostId,
) -> KgotlaResult<PostResponse> {
  let post = Post::read(&mut context.pool(), post_id).await?;
  Ok(PostResponse { post })
}

pub async fn build_comment_response(
  context: &KgotlaContext,
  comment_id: CommentId,
) -> KgotlaResult<CommentResponse> {
  let comment = Comment::read(&mut context.pool(), comment_id).await?;
  Ok(CommentResponse { comment })
}

pub async fn build_group_response(
  context: &KgotlaContext,
  group_id: GroupId,
) -> KgotlaResult<GroupResponse> {
  let group = Group::read(&mut context.pool(), group_id).await?;
  Ok(GroupResponse { group })
}

pub fn build_vote_response(outcome: VoteOutcome) -> VoteResponse {
  outcome.into()
}
