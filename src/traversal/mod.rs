//! # Package Discovery
//!
//! Walks the import graph from a root package, resolving each newly seen
//! import once and recording every package that belongs to the module being
//! analyzed.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! use godep_graph::core::Package;
//! use godep_graph::resolver::{PackageResolver, ResolveError};
//! use godep_graph::traversal::{TraversalOptions, Traverser};
//!
//! struct Fixtures(HashMap<&'static str, Package>);
//!
//! impl PackageResolver for Fixtures {
//!     fn resolve(&self, name: &str, _root: &Path) -> Result<Package, ResolveError> {
//!         self.0
//!             .get(name)
//!             .cloned()
//!             .ok_or_else(|| ResolveError::unresolvable(format!("unknown package {name}")))
//!     }
//! }
//!
//! # fn main() -> miette::Result<()> {
//! let resolver = Fixtures(HashMap::from([
//!     ("./", Package::new("example.com/app").with_imports(["example.com/app/util", "fmt"])),
//!     ("example.com/app/util", Package::new("example.com/app/util")),
//!     ("fmt", Package::new("fmt").with_standard(true)),
//! ]));
//!
//! let graph = Traverser::new(&resolver, "example.com/app", TraversalOptions::default())
//!     .traverse(Path::new("."), "./")?;
//!
//! assert!(graph.contains("example.com/app/util"));
//! assert!(!graph.contains("fmt")); // outside the module
//! # Ok(())
//! # }
//! ```

mod traverser;

pub use traverser::{DiscoveredGraph, TraversalOptions, Traverser};
