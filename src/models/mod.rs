pub mod config;
pub mod error;

pub use config::StubConfig;
pub use error::ErrorResponse;
