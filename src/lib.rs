pub mod config;
pub mod error;
pub mod flashcard;
pub mod inference;
pub mod server;

pub use error::{Error, Result};
