pub mod http;
pub mod services;

pub use http::SnapshotHttpClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
