use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::constants::traversal::{DEFAULT_MAX_DEPTH, PSEUDO_PACKAGES};
use crate::core::Package;
use crate::error::DepGraphError;
use crate::progress::TraversalReporter;
use crate::resolver::PackageResolver;

/// Knobs controlling a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Imports deeper than this are not resolved
    pub max_depth: usize,
    /// Abort on the first resolution failure instead of recording it
    pub stop_on_error: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            stop_on_error: true,
        }
    }
}

/// Everything a traversal found
///
/// Packages are keyed by import path and iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredGraph {
    packages: BTreeMap<String, Package>,
    failed: BTreeSet<String>,
    truncated: BTreeSet<String>,
}

impl DiscoveredGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a package unless its import path is already known.
    ///
    /// Returns `false` when an earlier package with the same path was kept.
    /// A path reached through a shorter chain is no longer truncated.
    pub fn insert_package(&mut self, package: Package) -> bool {
        if self.packages.contains_key(&package.import_path) {
            return false;
        }
        self.truncated.remove(&package.import_path);
        self.packages.insert(package.import_path.clone(), package);
        true
    }

    pub fn mark_failed(&mut self, import_path: impl Into<String>) {
        self.failed.insert(import_path.into());
    }

    pub fn packages(&self) -> &BTreeMap<String, Package> {
        &self.packages
    }

    pub fn get(&self, import_path: &str) -> Option<&Package> {
        self.packages.get(import_path)
    }

    pub fn contains(&self, import_path: &str) -> bool {
        self.packages.contains_key(import_path)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn failed(&self) -> &BTreeSet<String> {
        &self.failed
    }

    pub fn is_failed(&self, import_path: &str) -> bool {
        self.failed.contains(import_path)
    }

    /// Names left unresolved because the depth limit was reached and never
    /// recorded through another chain
    pub fn truncated(&self) -> &BTreeSet<String> {
        &self.truncated
    }

    pub fn truncated_count(&self) -> usize {
        self.truncated.len()
    }
}

impl FromIterator<Package> for DiscoveredGraph {
    fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
        let mut graph = DiscoveredGraph::new();
        for package in iter {
            graph.insert_package(package);
        }
        graph
    }
}

/// Depth-first import graph walker
///
/// Only packages whose import path equals the root name or starts with the
/// module name are recorded. Standard library packages are recorded but
/// never expanded.
pub struct Traverser<'a> {
    resolver: &'a dyn PackageResolver,
    module_name: String,
    options: TraversalOptions,
    reporter: Option<&'a TraversalReporter>,
    root_name: String,
    graph: DiscoveredGraph,
}

impl<'a> Traverser<'a> {
    pub fn new(
        resolver: &'a dyn PackageResolver,
        module_name: impl Into<String>,
        options: TraversalOptions,
    ) -> Self {
        Self {
            resolver,
            module_name: module_name.into(),
            options,
            reporter: None,
            root_name: String::new(),
            graph: DiscoveredGraph::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: &'a TraversalReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Discover everything reachable from `package_name`, resolved from `root`
    pub fn traverse(
        mut self,
        root: &Path,
        package_name: &str,
    ) -> Result<DiscoveredGraph, DepGraphError> {
        self.root_name = package_name.to_string();
        self.discover(root, package_name, 0, "")?;
        Ok(self.graph)
    }

    fn in_scope(&self, import_path: &str) -> bool {
        import_path == self.root_name || import_path.starts_with(self.module_name.as_str())
    }

    fn discover(
        &mut self,
        root: &Path,
        name: &str,
        depth: usize,
        imported_by: &str,
    ) -> Result<(), DepGraphError> {
        if depth >= self.options.max_depth {
            if let Some(reporter) = self.reporter {
                reporter.trace_truncated(name, depth);
            }
            if !self.graph.contains(name) {
                self.graph.truncated.insert(name.to_string());
            }
            return Ok(());
        }
        if PSEUDO_PACKAGES.contains(&name) {
            return Ok(());
        }

        if let Some(reporter) = self.reporter {
            reporter.resolving(name);
        }

        let (package, failure) = match self.resolver.resolve(name, root) {
            Ok(package) => (package, None),
            Err(err) if self.options.stop_on_error => {
                return Err(DepGraphError::ResolutionFailed {
                    package: name.to_string(),
                    depth,
                    imported_by: if imported_by.is_empty() {
                        "(root)".to_string()
                    } else {
                        imported_by.to_string()
                    },
                    message: err.message().to_string(),
                });
            }
            Err(err) => {
                let message = err.message().to_string();
                let package = err
                    .into_partial()
                    .unwrap_or_else(|| Package::new(name).with_dir(root));
                (package, Some(message))
            }
        };

        // First resolution of an import path wins, failed or not
        if !self.in_scope(&package.import_path) || self.graph.contains(&package.import_path) {
            return Ok(());
        }

        if let Some(reporter) = self.reporter {
            reporter.trace_package(&package.import_path, root, name, imported_by);
        }

        if let Some(message) = failure {
            if let Some(reporter) = self.reporter {
                reporter.resolution_failed(name, &message);
            }
            self.graph.failed.insert(package.import_path.clone());
        }

        let import_path = package.import_path.clone();
        let standard = package.standard;
        let dir: PathBuf = if package.dir.as_os_str().is_empty() {
            root.to_path_buf()
        } else {
            package.dir.clone()
        };
        let imports: Vec<String> = package
            .unique_imports()
            .into_iter()
            .map(str::to_string)
            .collect();

        if !self.graph.insert_package(package) || standard {
            return Ok(());
        }

        for imp in imports {
            if !self.graph.contains(&imp) {
                self.discover(&dir, &imp, depth + 1, &import_path)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::resolver::ResolveError;

    /// Serves canned packages and records every lookup
    #[derive(Default)]
    struct FixtureResolver {
        packages: HashMap<String, Result<Package, String>>,
        partial: HashMap<String, (Package, String)>,
        calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl FixtureResolver {
        fn with(mut self, package: Package) -> Self {
            self.packages.insert(package.import_path.clone(), Ok(package));
            self
        }

        fn alias(mut self, name: &str, package: Package) -> Self {
            self.packages.insert(name.to_string(), Ok(package));
            self
        }

        fn broken(mut self, name: &str, message: &str) -> Self {
            self.packages.insert(name.to_string(), Err(message.to_string()));
            self
        }

        fn partial(self, package: Package, message: &str) -> Self {
            let name = package.import_path.clone();
            self.partial_alias(&name, package, message)
        }

        fn partial_alias(mut self, name: &str, package: Package, message: &str) -> Self {
            self.partial
                .insert(name.to_string(), (package, message.to_string()));
            self
        }

        fn calls_for(&self, name: &str) -> usize {
            self.calls.borrow().iter().filter(|(n, _)| n == name).count()
        }
    }

    impl PackageResolver for FixtureResolver {
        fn resolve(&self, name: &str, search_root: &Path) -> Result<Package, ResolveError> {
            self.calls
                .borrow_mut()
                .push((name.to_string(), search_root.to_path_buf()));
            if let Some((package, message)) = self.partial.get(name) {
                return Err(ResolveError::partial(package.clone(), message.clone()));
            }
            match self.packages.get(name) {
                Some(Ok(package)) => Ok(package.clone()),
                Some(Err(message)) => Err(ResolveError::unresolvable(message.clone())),
                None => Ok(Package::new(name)),
            }
        }
    }

    fn app(imports: &[&str]) -> Package {
        Package::new("example.com/app")
            .with_dir("/src/app")
            .with_imports(imports.iter().copied())
    }

    fn traverse(
        resolver: &FixtureResolver,
        options: TraversalOptions,
    ) -> Result<DiscoveredGraph, DepGraphError> {
        Traverser::new(resolver, "example.com/app", options).traverse(Path::new("/src/app"), "./")
    }

    fn keep_going() -> TraversalOptions {
        TraversalOptions {
            stop_on_error: false,
            ..TraversalOptions::default()
        }
    }

    #[test]
    fn test_records_module_packages_only() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/util", "fmt", "github.com/pkg/errors"]))
            .with(Package::new("example.com/app/util").with_imports(["strings"]))
            .with(Package::new("fmt").with_standard(true).with_imports(["io"]))
            .with(
                Package::new("github.com/pkg/errors").with_imports(["example.com/app/never"]),
            );

        let graph = traverse(&resolver, TraversalOptions::default()).unwrap();

        let keys: Vec<_> = graph.packages().keys().cloned().collect();
        assert_eq!(keys, vec!["example.com/app", "example.com/app/util"]);
        // out-of-module packages are resolved, then dropped without recursion
        assert_eq!(resolver.calls_for("fmt"), 1);
        assert_eq!(resolver.calls_for("github.com/pkg/errors"), 1);
        assert_eq!(resolver.calls_for("example.com/app/never"), 0);
        assert_eq!(resolver.calls_for("io"), 0);
    }

    #[test]
    fn test_standard_packages_are_not_expanded() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/runtime"]))
            .with(
                Package::new("example.com/app/runtime")
                    .with_standard(true)
                    .with_imports(["example.com/app/internal/sys"]),
            );

        let graph = traverse(&resolver, TraversalOptions::default()).unwrap();

        assert!(graph.contains("example.com/app/runtime"));
        assert!(!graph.contains("example.com/app/internal/sys"));
        assert_eq!(resolver.calls_for("example.com/app/internal/sys"), 0);
    }

    #[test]
    fn test_shared_imports_resolve_once() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/a", "example.com/app/b"]))
            .with(Package::new("example.com/app/a").with_imports(["example.com/app/shared"]))
            .with(Package::new("example.com/app/b").with_imports([
                "example.com/app/shared",
                "example.com/app/shared",
            ]));

        let graph = traverse(&resolver, TraversalOptions::default()).unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(resolver.calls_for("example.com/app/shared"), 1);
    }

    #[test]
    fn test_cycles_terminate() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/a"]))
            .with(Package::new("example.com/app/a").with_imports(["example.com/app/b"]))
            .with(Package::new("example.com/app/b").with_imports(["example.com/app/a"]));

        let graph = traverse(&resolver, TraversalOptions::default()).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(resolver.calls_for("example.com/app/a"), 1);
    }

    #[test]
    fn test_depth_limit_truncates_silently() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/l1"]))
            .with(Package::new("example.com/app/l1").with_imports(["example.com/app/l2"]))
            .with(Package::new("example.com/app/l2").with_imports(["example.com/app/l3"]))
            .with(Package::new("example.com/app/l3"));
        let options = TraversalOptions {
            max_depth: 2,
            ..TraversalOptions::default()
        };

        let graph = traverse(&resolver, options).unwrap();

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("example.com/app/l1"));
        assert_eq!(graph.truncated_count(), 1);
        assert!(graph.truncated().contains("example.com/app/l2"));
        assert_eq!(resolver.calls_for("example.com/app/l2"), 0);
    }

    #[test]
    fn test_pseudo_packages_are_never_resolved() {
        let resolver =
            FixtureResolver::default().alias("./", app(&["C", "example.com/app/util"]));

        let graph = traverse(&resolver, TraversalOptions::default()).unwrap();

        assert_eq!(resolver.calls_for("C"), 0);
        assert!(graph.contains("example.com/app/util"));
    }

    #[test]
    fn test_stop_on_error_aborts_with_context() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/util"]))
            .with(Package::new("example.com/app/util").with_imports(["example.com/app/broken"]))
            .broken("example.com/app/broken", "no Go files");

        let err = traverse(&resolver, TraversalOptions::default()).unwrap_err();

        match err {
            DepGraphError::ResolutionFailed {
                package,
                depth,
                imported_by,
                message,
            } => {
                assert_eq!(package, "example.com/app/broken");
                assert_eq!(depth, 2);
                assert_eq!(imported_by, "example.com/app/util");
                assert_eq!(message, "no Go files");
            }
            other => panic!("expected resolution failure, got {other:?}"),
        }
    }

    #[test]
    fn test_root_failure_names_root_importer() {
        let resolver = FixtureResolver::default().broken("./", "directory not found");

        let err = traverse(&resolver, TraversalOptions::default()).unwrap_err();

        assert!(err.to_string().contains("imported at level 1 by (root)"));
    }

    #[test]
    fn test_keep_going_uses_partial_descriptor() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/gen"]))
            .partial(
                Package::new("example.com/app/gen").with_imports(["example.com/app/model"]),
                "build constraints exclude all Go files",
            );
        let options = TraversalOptions {
            stop_on_error: false,
            ..TraversalOptions::default()
        };

        let graph = traverse(&resolver, options).unwrap();

        assert!(graph.is_failed("example.com/app/gen"));
        assert!(!graph.is_failed("example.com/app"));
        assert!(graph.contains("example.com/app/model"));
    }

    #[test]
    fn test_keep_going_without_descriptor_records_placeholder() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/gone", "github.com/gone/dep"]))
            .broken("example.com/app/gone", "cannot find package")
            .broken("github.com/gone/dep", "cannot find module");
        let options = TraversalOptions {
            stop_on_error: false,
            ..TraversalOptions::default()
        };

        let graph = traverse(&resolver, options).unwrap();

        let gone = graph.get("example.com/app/gone").unwrap();
        assert!(gone.imports.is_empty());
        assert_eq!(gone.dir, PathBuf::from("/src/app"));
        assert!(graph.is_failed("example.com/app/gone"));
        // still scope-filtered
        assert!(!graph.contains("github.com/gone/dep"));
        assert!(!graph.is_failed("github.com/gone/dep"));
    }

    #[test]
    fn test_root_is_kept_even_outside_module() {
        let resolver = FixtureResolver::default()
            .alias("./", Package::new("./").with_imports(["example.com/app/util"]));

        let graph = traverse(&resolver, TraversalOptions::default()).unwrap();

        assert!(graph.contains("./"));
        assert!(graph.contains("example.com/app/util"));
    }

    #[test]
    fn test_imports_resolve_from_package_dir() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/util"]))
            .with(
                Package::new("example.com/app/util")
                    .with_dir("/src/app/util")
                    .with_imports(["example.com/app/util/inner"]),
            );

        traverse(&resolver, TraversalOptions::default()).unwrap();

        let calls = resolver.calls.borrow();
        let root_of = |name: &str| {
            calls
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, root)| root.clone())
                .unwrap()
        };
        assert_eq!(root_of("./"), PathBuf::from("/src/app"));
        assert_eq!(root_of("example.com/app/util"), PathBuf::from("/src/app"));
        assert_eq!(
            root_of("example.com/app/util/inner"),
            PathBuf::from("/src/app/util")
        );
    }

    #[test]
    fn test_later_failing_alias_keeps_recorded_package() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/util", "./util"]))
            .with(Package::new("example.com/app/util"))
            .partial_alias("./util", Package::new("example.com/app/util"), "transient");

        let graph = traverse(&resolver, keep_going()).unwrap();

        assert_eq!(resolver.calls_for("./util"), 1);
        assert!(graph.contains("example.com/app/util"));
        assert!(graph.failed().is_empty());
    }

    #[test]
    fn test_shorter_chain_clears_truncation() {
        let resolver = FixtureResolver::default()
            .alias("./", app(&["example.com/app/a", "example.com/app/x"]))
            .with(Package::new("example.com/app/a").with_imports(["example.com/app/b"]))
            .with(Package::new("example.com/app/b").with_imports(["example.com/app/x"]))
            .with(Package::new("example.com/app/x"));
        let options = TraversalOptions {
            max_depth: 3,
            ..TraversalOptions::default()
        };

        let graph = traverse(&resolver, options).unwrap();

        assert!(graph.contains("example.com/app/x"));
        assert_eq!(graph.truncated_count(), 0);
    }

    #[test]
    fn test_first_resolution_wins() {
        let mut graph = DiscoveredGraph::new();

        assert!(graph.insert_package(Package::new("example.com/app").with_imports(["fmt"])));
        assert!(!graph.insert_package(Package::new("example.com/app")));
        assert_eq!(graph.get("example.com/app").unwrap().imports, vec!["fmt"]);
    }
}
