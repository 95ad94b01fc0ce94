pub mod dashboard;
pub mod load_snapshot;

pub use dashboard::*;
pub use load_snapshot::*;
