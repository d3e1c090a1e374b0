pub mod error;
pub mod models;
pub mod repositories;
pub mod sqlite;

pub use error::*;
pub use models::*;
pub use repositories::*;
pub use sqlite::*;
