//! Utility modules for the converter.

pub mod date;
pub mod minify;
pub mod slug;
pub mod xml;
