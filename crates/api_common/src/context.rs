use kgotla_db_schema::utils::{ActualDbPool, DbPool};
use kgotla_utils::settings::{structs::Settings, SETTINGS};

#[derive(Clone)]
pub struct KgotlaContext {
  pool: ActualDbPool,
}

impl KgotlaContext {
  pub fn create(pool: ActualDbPool) -> KgotlaContext {
    KgotlaContext { pool }
  }

  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }

  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }

  pub fn settings(&self) -> &'static Settings {
    &SETTINGS
  }
}
