pub mod config;
pub mod tracing;

pub use self::tracing::*;
pub use config::*;
