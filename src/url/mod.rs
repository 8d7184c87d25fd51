//! URL handling module for SEO Probe
//!
//! The probe takes a single URL from the caller. This module turns that input
//! into something the fetcher can use, defaulting the scheme when missing.

mod normalize;

// Re-export main functions
pub use normalize::{normalize_input_url, InputUrl};
