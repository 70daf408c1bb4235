mod prompt;

pub use prompt::*;
