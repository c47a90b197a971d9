use serde::{Deserialize, Serialize};

/// Instance-wide counts for the site endpoint.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub struct SiteCounts {
  pub persons: i64,
  pub groups: i64,
  pub posts: i64,
  pub comments: i64,
}
