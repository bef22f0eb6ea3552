//! Configuration constants for godep-graph
//!
//! This module contains the defaults used throughout the application. Most of
//! them can be overridden through command line flags or environment variables.

use std::time::Duration;

/// Traversal defaults
pub mod traversal {
    /// Maximum recursion depth before discovery silently stops descending
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Pseudo-packages that never go through resolution
    pub const PSEUDO_PACKAGES: &[&str] = &["C"];

    /// Root package resolved when none is given
    pub const DEFAULT_ROOT_PACKAGE: &str = "./";
}

/// Module manifest defaults
pub mod manifest {
    /// Default location of the module manifest
    pub const DEFAULT_PATH: &str = "./go.mod";

    /// Keyword introducing the module declaration line
    pub const MODULE_KEYWORD: &str = "module ";
}

/// Graph rendering configuration
pub mod render {
    /// Base URL prepended to import paths for node links
    pub const DEFAULT_DOCS_BASE_URL: &str = "https://godoc.org/";

    /// Path segment marking a vendored package
    pub const VENDOR_SEGMENT: &str = "/vendor/";

    /// Opening line of the graph document
    pub const GRAPH_OPEN: &str = "digraph godep {";

    /// Default layout parameters emitted after the opening line
    pub const GRAPH_HEADER: &[&str] = &[
        "splines=ortho",
        "nodesep=0.4",
        "ranksep=0.8",
        r#"node [shape="box",style="rounded,filled"]"#,
        r#"edge [arrowsize="0.5"]"#,
    ];
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while packages are resolved
    pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"];
}
