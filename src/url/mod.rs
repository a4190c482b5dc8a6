//! URL processing for user-entered and page-extracted addresses.
//!
//! This module contains:
//! - URL validation and normalization
//! - Domain extraction for display labels
//! - Resolution of relative, root-relative and protocol-relative references

pub mod normalizer;
pub mod utils;

pub use normalizer::{has_scheme, is_valid_url, normalize_url, DEFAULT_SCHEME};
pub use utils::{extract_domain, resolve_url};
