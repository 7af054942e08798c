pub mod error;
pub mod schema;
pub mod task;

pub use error::*;
pub use schema::*;
pub use task::*;
