//! Speech markup helpers.
//!
//! Responses are composed as templates: trusted literal markup interleaved with
//! untrusted dynamic values. [`render`] escapes the values and normalizes the
//! whitespace left behind by indented source literals so the document root
//! starts at column 0.

pub mod sanitizer;

pub use sanitizer::{escape_markup, render, Template, ROOT_ELEMENT};
