//! CLI command handlers.

mod digest;
mod extract;
mod generate;

pub use digest::run_digest;
pub use extract::run_extract;
pub use generate::{run_completions, run_man};
