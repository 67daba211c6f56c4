pub mod dates;
pub mod error;
pub mod jurisdiction;
pub mod loader;
pub mod pipeline;
pub mod rename;
pub mod schema;
pub mod stamp;
pub mod writer;

pub use error::{Result, TransformError};
