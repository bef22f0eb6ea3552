//! # godep-graph - Visualize the Import Graph of a Go Module
//!
//! godep-graph resolves the root package of a Go module, follows every import
//! that belongs to the module and renders the result as a Graphviz DOT
//! document.
//!
//! ## Main Components
//!
//! - **Resolver**: Turns a package name and a search directory into a
//!   package descriptor (`go list` in production)
//! - **Traversal**: Depth-first discovery of the packages reachable from the
//!   root, limited to the module's namespace
//! - **Graph**: Deterministic DOT rendering with per-package styling
//!
//! ## Usage
//!
//! ### Example: Rendering a Module
//!
//! ```no_run
//! use std::path::Path;
//!
//! use godep_graph::filter::IgnoreRules;
//! use godep_graph::graph::GraphRenderer;
//! use godep_graph::manifest::ModuleManifest;
//! use godep_graph::resolver::GoListResolver;
//! use godep_graph::traversal::{TraversalOptions, Traverser};
//!
//! # fn main() -> miette::Result<()> {
//! let manifest = ModuleManifest::parse_file(Path::new("go.mod"))?;
//! let resolver = GoListResolver::new(vec![]);
//!
//! let graph = Traverser::new(&resolver, manifest.module_name, TraversalOptions::default())
//!     .traverse(Path::new("."), "./")?;
//!
//! let renderer = GraphRenderer::new(
//!     IgnoreRules::new().with_ignored_prefixes(vec!["example.com/app/internal/gen".into()]),
//! );
//! println!("{}", renderer.render_to_string(&graph)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Keep Going Past Broken Packages
//!
//! ```no_run
//! # use std::path::Path;
//! # use godep_graph::resolver::GoListResolver;
//! # use godep_graph::traversal::{TraversalOptions, Traverser};
//! # fn main() -> miette::Result<()> {
//! let resolver = GoListResolver::new(vec!["integration".to_string()]);
//! let options = TraversalOptions {
//!     stop_on_error: false,
//!     ..TraversalOptions::default()
//! };
//!
//! let graph = Traverser::new(&resolver, "example.com/app", options)
//!     .traverse(Path::new("."), "./")?;
//!
//! for failed in graph.failed() {
//!     eprintln!("could not load {failed}");
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod filter;
pub mod graph;
pub mod manifest;
pub mod resolver;
pub mod traversal;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    execute_command(Cli::parse())
}
