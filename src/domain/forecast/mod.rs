//! Forecast aggregate: the snapshot model, the record validator and the
//! accuracy/profile services.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use validation::{HistoryPartition, partition};
pub use value_objects::*;
