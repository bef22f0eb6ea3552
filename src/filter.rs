//! Package ignore rules applied while rendering

use std::collections::BTreeSet;

use crate::constants::traversal::PSEUDO_PACKAGES;

/// Decides which packages are left out of the rendered graph
///
/// Rules apply to nodes and to edge targets alike: an ignored package gets
/// no node and no incoming edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRules {
    only_prefixes: Vec<String>,
    ignored: BTreeSet<String>,
    ignored_prefixes: Vec<String>,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            only_prefixes: Vec::new(),
            ignored: PSEUDO_PACKAGES.iter().map(|p| p.to_string()).collect(),
            ignored_prefixes: Vec::new(),
        }
    }
}

impl IgnoreRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only packages matching one of these prefixes (no-op when empty)
    pub fn with_only_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.only_prefixes = prefixes;
        self
    }

    /// Ignore these exact import paths in addition to the pseudo-packages
    pub fn with_ignored<I: IntoIterator<Item = String>>(mut self, ignored: I) -> Self {
        self.ignored.extend(ignored);
        self
    }

    pub fn with_ignored_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.ignored_prefixes = prefixes;
        self
    }

    pub fn is_ignored(&self, import_path: &str) -> bool {
        if !self.only_prefixes.is_empty() && !has_prefix(import_path, &self.only_prefixes) {
            return true;
        }

        self.ignored.contains(import_path) || has_prefix(import_path, &self.ignored_prefixes)
    }
}

fn has_prefix(s: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| s.starts_with(p.as_str()))
}
