use crate::domain::{
    errors::LoadResult,
    forecast::{Snapshot, repositories::SnapshotRepository, validation::diagnose_snapshot},
    logging::{LogComponent, LogLevel, get_logger},
};
use std::sync::Arc;

/// Use Case: load the snapshot once and report data issues
pub struct LoadSnapshotUseCase<R: SnapshotRepository> {
    repository: R,
}

impl<R: SnapshotRepository> LoadSnapshotUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// One attempt, no retry. Data issues are logged, never fatal.
    pub async fn execute(&self) -> LoadResult<Arc<Snapshot>> {
        let snapshot = match self.repository.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                crate::log_error!(LogComponent::Application("LoadSnapshot"), "❌ Snapshot load failed: {e}");
                return Err(e);
            }
        };

        crate::log_info!(
            LogComponent::Application("LoadSnapshot"),
            "✅ Snapshot loaded with {} companies",
            snapshot.companies.len()
        );

        for issue in diagnose_snapshot(&snapshot) {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Domain("Validation"),
                &format!("⚠️ {issue}"),
                &issue.location(),
            );
        }

        Ok(Arc::new(snapshot))
    }
}
