pub mod error;
pub mod parser;
pub mod summer;

pub use error::Error;
pub use summer::{summarize, summarize_file, Summary};
