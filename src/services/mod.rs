//! Detection pipeline services.
//!
//! Extraction turns raw lines into events; detection turns events into alerts.
//! Neither touches the filesystem.

pub mod detector;
pub mod extractor;

pub use detector::*;
pub use extractor::*;
