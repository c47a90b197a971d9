use kgotla_db_schema::{
  enums::PostKind,
  source::{comment::Comment, person::Person, post::Post},
};
use kgotla_utils::error::{KgotlaErrorType, KgotlaResult};

pub const MAX_TITLE_LENGTH: usize = 200;

pub fn check_post_creator(post: &Post, person: &Person) -> KgotlaResult<()> {
  if post.creator_id != person.id {
    Err(KgotlaErrorType::NotYourPost.into())
  } else {
    Ok(())
  }
}

pub fn check_comment_creator(comment: &Comment, person: &Person) -> KgotlaResult<()> {
  if comment.creator_id != person.id {
    Err(KgotlaErrorType::NotYourComment.into())
  } else {
    Ok(())
  }
}

/// Locked posts reject new comments. They still accept votes.
pub fn check_post_accepts_comments(post: &Post) -> KgotlaResult<()> {
  if post.locked {
    Err(KgotlaErrorType::PostLocked.into())
  } else {
    Ok(())
  }
}

pub fn check_post_title(title: &str) -> KgotlaResult<()> {
  let trimmed = title.trim();
  if trimmed.is_empty() || trimmed.len() > MAX_TITLE_LENGTH {
    Err(KgotlaErrorType::InvalidPostTitle.into())
  } else {
    Ok(())
  }
}

/// Checks that a post's payload matches its kind: image posts need an url,
/// poll posts need at least two choices.
pub fn check_post_kind_payload(
  kind: PostKind,
  url: Option<&str>,
  poll_options: Option<&Vec<String>>,
) -> KgotlaResult<()> {
  match kind {
    PostKind::Image if url.is_none() => Err(KgotlaErrorType::ImageUrlRequired.into()),
    PostKind::Poll if poll_options.map(Vec::len).unwrap_or(0) < 2 => {
      Err(KgotlaErrorType::PollOptionsRequired.into())
    }
    _ => Ok(()),
  }
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn title_validation() {
    assert!(check_post_title("Maize spacing").is_ok());
    assert!(check_post_title("   ").is_err());
    assert!(check_post_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
  }

  #[test]
  fn kind_payload_validation() {
    assert!(check_post_kind_payload(PostKind::Text, None, None).is_ok());
    assert!(check_post_kind_payload(PostKind::Image, None, None).is_err());
    assert!(check_post_kind_payload(PostKind::Image, Some("https://example.com/a.jpg"), None).is_ok());
    let one = vec!["yes".to_string()];
    let two = vec!["yes".to_string(), "no".to_string()];
    assert!(check_post_kind_payload(PostKind::Poll, None, Some(&one)).is_err());
    assert!(check_post_kind_payload(PostKind::Poll, None, Some(&two)).is_ok());
    assert!(check_post_kind_payload(PostKind::Question, None, None).is_ok());
  }
}
