//! # Configuration Module
//!
//! Typed configuration for a graph run, assembled from CLI arguments through
//! a builder so it can also be constructed programmatically.
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use godep_graph::common::ConfigBuilder;
//! use godep_graph::config::GraphConfig;
//! use godep_graph::filter::IgnoreRules;
//!
//! let config = GraphConfig::builder()
//!     .with_working_dir(PathBuf::from("."))
//!     .with_build_tags(vec!["integration".to_string()])
//!     .with_stop_on_error(false)
//!     .with_ignore_rules(
//!         IgnoreRules::new().with_ignored_prefixes(vec!["example.com/app/gen".into()]),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.traversal_options().stop_on_error);
//! ```

pub mod graph;

pub use graph::{GraphConfig, GraphConfigBuilder};
