//! Chart aggregate: series builders, point value objects and SVG layout.

pub mod geometry;
pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
