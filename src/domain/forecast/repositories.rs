use super::entities::Snapshot;
use crate::domain::errors::LoadResult;

/// Source of the prediction snapshot.
///
/// Implementations make exactly one attempt per call and report failures as
/// [`LoadError`](crate::domain::errors::LoadError); they never retry.
#[allow(async_fn_in_trait)]
pub trait SnapshotRepository {
    async fn fetch_snapshot(&self) -> LoadResult<Snapshot>;
}
