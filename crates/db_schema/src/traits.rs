use crate::utils::DbPool;
use async_trait::async_trait;
use kgotla_utils::error::KgotlaResult;

#[async_trait]
pub trait Crud {
  type InsertForm: Sync;
  type UpdateForm: Sync;
  type IdType: Send;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> KgotlaResult<Self>
  where
    Self: Sized;

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> KgotlaResult<Self>
  where
    Self: Sized;

  /// when you want to null out a column, you have to send Some(None)), since sending None means
  /// you just don't want to update that column.
  async fn update(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> KgotlaResult<Self>
  where
    Self: Sized;

  async fn delete(pool: &mut DbPool<'_>, id: Self::IdType) -> KgotlaResult<usize>
  where
    Self: Sized;
}

#[async_trait]
pub trait Joinable {
  type Form: Sync;

  async fn join(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<Self>
  where
    Self: Sized;

  async fn leave(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<usize>
  where
    Self: Sized;
}

#[async_trait]
pub trait Saveable {
  type Form: Sync;

  async fn save(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<Self>
  where
    Self: Sized;

  async fn unsave(pool: &mut DbPool<'_>, form: &Self::Form) -> KgotlaResult<usize>
  where
    Self: Sized;
}
