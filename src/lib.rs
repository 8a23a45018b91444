pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod soda;
pub mod table;

pub use error::{Error, Result};
pub use soda::SodaClient;
pub use table::Table;
