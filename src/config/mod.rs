//! Configuration structures and loading utilities.
//!
//! Rule parameters come from a YAML document; diagnostic and extraction
//! behaviour comes from environment variables with documented defaults.

pub mod cli;
pub mod extraction;
pub mod logging;
pub mod rules;

pub use cli::*;
pub use logging::*;
pub use rules::*;
