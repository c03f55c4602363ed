//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] - input rejected before any I/O happens
//! - [`string`] - UTF-8 safe string helpers

pub mod error;
pub mod string;
