//! Data models for extracted events and detection results.

pub mod alert;
pub mod event;

pub use alert::*;
pub use event::*;
