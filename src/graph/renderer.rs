use std::collections::HashMap;
use std::io::Write;

use miette::{IntoDiagnostic, Result};

use super::style::NodeStyle;
use crate::constants::render::{DEFAULT_DOCS_BASE_URL, GRAPH_HEADER, GRAPH_OPEN};
use crate::error::DepGraphError;
use crate::filter::IgnoreRules;
use crate::traversal::DiscoveredGraph;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepGraphError::from)
    };
}

/// Memoized node identifiers, one per import path
#[derive(Debug, Default)]
struct NodeIds {
    ids: HashMap<String, String>,
}

impl NodeIds {
    fn get(&mut self, import_path: &str) -> &str {
        self.ids
            .entry(import_path.to_string())
            .or_insert_with(|| derive_node_id(import_path))
    }
}

/// Node identifiers are the quoted import path
fn derive_node_id(import_path: &str) -> String {
    format!("\"{}\"", escape(import_path))
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders a [`DiscoveredGraph`] as a Graphviz document
///
/// Output depends only on the graph and the renderer settings, so rendering
/// the same graph twice yields identical bytes.
pub struct GraphRenderer {
    rules: IgnoreRules,
    docs_base_url: String,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(IgnoreRules::default())
    }
}

impl GraphRenderer {
    pub fn new(rules: IgnoreRules) -> Self {
        Self {
            rules,
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
        }
    }

    pub fn with_docs_base_url(mut self, docs_base_url: impl Into<String>) -> Self {
        self.docs_base_url = docs_base_url.into();
        self
    }

    pub fn docs_url(&self, import_path: &str) -> String {
        format!("{}{}", self.docs_base_url, import_path)
    }

    pub fn render_dot(&self, graph: &DiscoveredGraph, output: &mut dyn Write) -> Result<()> {
        let mut ids = NodeIds::default();

        writeln_out!(output, "{}", GRAPH_OPEN)?;
        for line in GRAPH_HEADER {
            writeln_out!(output, "{}", line)?;
        }

        for (import_path, package) in graph.packages() {
            if self.rules.is_ignored(import_path) {
                continue;
            }

            let style = NodeStyle::classify(package, graph);
            let package_id = ids.get(import_path).to_string();
            writeln_out!(
                output,
                r#"{} [label="{}" color="{}" URL="{}" target="_blank"];"#,
                package_id,
                escape(import_path),
                style.color(),
                escape(&self.docs_url(import_path))
            )?;

            // Standard library internals are not drawn
            if package.standard {
                continue;
            }

            for imp in package.unique_imports() {
                if !graph.contains(imp) || self.rules.is_ignored(imp) {
                    continue;
                }
                writeln_out!(output, "{} -> {};", package_id, ids.get(imp))?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_to_string(&self, graph: &DiscoveredGraph) -> Result<String> {
        let mut buffer = Vec::new();
        self.render_dot(graph, &mut buffer)?;
        String::from_utf8(buffer).into_diagnostic()
    }
}
