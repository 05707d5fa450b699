pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod prepare;
pub mod process;

pub use config::Config;
pub use error::ParseError;
pub use prepare::{DatasetPreparer, Outcome, PrepareReport};
