//! # Graph Rendering Module
//!
//! This module turns a discovered package graph into a Graphviz DOT
//! document. Every retained package becomes one styled node linking to its
//! documentation, and every retained import becomes one edge.
//!
//! ## Components
//!
//! - **GraphRenderer**: Walks packages in import-path order and writes the
//!   document
//! - **NodeStyle**: Priority-ordered classification of packages (standard
//!   library, cgo, vendored, failed, default)
//!
//! ## Example
//!
//! ```
//! use godep_graph::core::Package;
//! use godep_graph::filter::IgnoreRules;
//! use godep_graph::graph::GraphRenderer;
//! use godep_graph::traversal::DiscoveredGraph;
//!
//! # fn main() -> miette::Result<()> {
//! let graph: DiscoveredGraph = [
//!     Package::new("example.com/app").with_imports(["example.com/app/util"]),
//!     Package::new("example.com/app/util"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let renderer = GraphRenderer::new(IgnoreRules::default());
//! let dot = renderer.render_to_string(&graph)?;
//!
//! assert!(dot.starts_with("digraph godep {"));
//! assert!(dot.contains(r#""example.com/app" -> "example.com/app/util";"#));
//! # Ok(())
//! # }
//! ```

mod renderer;
mod style;

pub use renderer::GraphRenderer;
pub use style::NodeStyle;
