use kgotla_db_schema::source::site::SiteCounts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetSiteResponse {
  pub name: String,
  pub counts: SiteCounts,
}
