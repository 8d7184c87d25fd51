//! Configuration module for SEO Probe
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file is
//! the common case.
//!
//! # Example
//!
//! ```no_run
//! use seo_probe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-probe.toml")).unwrap();
//! println!("Following at most {} redirects", config.fetch.max_redirects);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, DEFAULT_MAX_REDIRECTS};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
