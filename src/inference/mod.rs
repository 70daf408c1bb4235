mod client;
mod request;
mod types;

pub use client::*;
pub use request::*;
pub use types::*;
