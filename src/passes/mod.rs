mod bearing;
mod date;
mod error;
mod fetch;
mod table;
mod types;

pub use error::PassError;
pub use fetch::extract_passes;
pub use types::{DateGroup, Pass};
