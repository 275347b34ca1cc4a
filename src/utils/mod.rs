//! Utility modules for the card list generator
//!
//! - `files`: writing the card list to disk
//! - `http`: the card source trait and its HTTP implementation

pub mod files;
pub mod http;
