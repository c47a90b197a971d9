use crate::{
  schema::{comment, groups, person, post},
  source::site::SiteCounts,
  utils::{get_conn, DbPool},
};
use diesel::QueryDsl;
use diesel_async::RunQueryDsl;
use kgotla_utils::error::KgotlaResult;

impl SiteCounts {
  pub async fn read(pool: &mut DbPool<'_>) -> KgotlaResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let persons = person::table.count().get_result::<i64>(conn).await?;
    let groups = groups::table.count().get_result::<i64>(conn).await?;
    let posts = post::table.count().get_result::<i64>(conn).await?;
    let comments = comment::table.count().get_result::<i64>(conn).await?;
    Ok(SiteCounts {
      persons,
      groups,
      posts,
      comments,
    })
  }
}
