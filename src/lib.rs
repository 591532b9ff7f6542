pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod server;
pub mod writer;

pub use error::{Error, Result};
