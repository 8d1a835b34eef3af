//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Typed errors for resolution and output (PackError)
//! - The resolver that expands entry points into a flat file list
//! - The formatter that renders the packed document
//! - The extension to language table
//! - File reading with binary/encoding detection
//! - Path normalization and project root discovery
//! - Token counting for LLM context budgeting

pub mod error;
pub mod file_reader;
pub mod format;
pub mod language;
pub mod model;
pub mod paths;
pub mod render;
pub mod resolve;
pub mod tokenizer;
pub mod util;
