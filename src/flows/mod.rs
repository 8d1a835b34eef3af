//! Flows module - Commands built on top of the resolver and formatter
//!
//! Provides:
//! - pack: Resolve entry points and render the packed document
//! - list: Show the resolved file list and the language table

pub mod list;
pub mod pack;
