pub mod keyboard;
pub mod prompt;
