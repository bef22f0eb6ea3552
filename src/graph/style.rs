//! Node classification for rendering

use crate::core::Package;
use crate::traversal::DiscoveredGraph;

/// Visual class of a rendered package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStyle {
    Standard,
    Cgo,
    Vendored,
    BuildFailed,
    Default,
}

type StyleRule = (NodeStyle, fn(&Package, &DiscoveredGraph) -> bool);

/// Evaluated top to bottom, first match wins. Reordering changes the output
/// for packages matching several rules.
const STYLE_RULES: &[StyleRule] = &[
    (NodeStyle::Standard, is_standard),
    (NodeStyle::Cgo, uses_cgo),
    (NodeStyle::Vendored, is_vendored),
    (NodeStyle::BuildFailed, failed_to_build),
];

fn is_standard(package: &Package, _: &DiscoveredGraph) -> bool {
    package.standard
}

fn uses_cgo(package: &Package, _: &DiscoveredGraph) -> bool {
    package.uses_cgo()
}

fn is_vendored(package: &Package, _: &DiscoveredGraph) -> bool {
    package.is_vendored()
}

fn failed_to_build(package: &Package, graph: &DiscoveredGraph) -> bool {
    graph.is_failed(&package.import_path)
}

impl NodeStyle {
    pub fn classify(package: &Package, graph: &DiscoveredGraph) -> Self {
        STYLE_RULES
            .iter()
            .find(|(_, matches)| matches(package, graph))
            .map_or(NodeStyle::Default, |(style, _)| *style)
    }

    /// Graphviz color name
    pub fn color(self) -> &'static str {
        match self {
            NodeStyle::Standard => "palegreen",
            NodeStyle::Cgo => "darkgoldenrod1",
            NodeStyle::Vendored => "palegoldenrod",
            NodeStyle::BuildFailed => "red",
            NodeStyle::Default => "paleturquoise",
        }
    }
}
