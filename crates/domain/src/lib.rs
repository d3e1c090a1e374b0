pub mod errors;
pub mod models;
pub mod todo;

pub use errors::*;
pub use models::*;
pub use todo::*;
