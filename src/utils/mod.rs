//! Utility functions and helper modules.
//!
//! This module holds the file and stdout plumbing around the detection core.

pub mod io;

pub use io::*;
