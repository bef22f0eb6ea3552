//! Graph command configuration

use std::path::PathBuf;

use crate::constants::manifest::DEFAULT_PATH;
use crate::constants::render::DEFAULT_DOCS_BASE_URL;
use crate::constants::traversal::{DEFAULT_MAX_DEPTH, DEFAULT_ROOT_PACKAGE};
use crate::error::DepGraphError;
use crate::filter::IgnoreRules;
use crate::traversal::TraversalOptions;

#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub working_dir: PathBuf,
    pub root_package: String,
    pub manifest_path: PathBuf,
    pub output: Option<PathBuf>,
    pub debug: bool,
    pub build_tags: Vec<String>,
    pub stop_on_error: bool,
    pub max_depth: usize,
    pub ignore_rules: IgnoreRules,
    pub docs_base_url: String,
}

impl GraphConfig {
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::new()
    }

    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            max_depth: self.max_depth,
            stop_on_error: self.stop_on_error,
        }
    }
}

#[derive(Default)]
pub struct GraphConfigBuilder {
    working_dir: Option<PathBuf>,
    root_package: Option<String>,
    manifest_path: Option<PathBuf>,
    output: Option<PathBuf>,
    debug: bool,
    build_tags: Vec<String>,
    stop_on_error: Option<bool>,
    max_depth: Option<usize>,
    ignore_rules: Option<IgnoreRules>,
    docs_base_url: Option<String>,
}

impl GraphConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_working_dir(mut self, working_dir: PathBuf) -> Self {
        self.working_dir = Some(working_dir);
        self
    }

    pub fn with_root_package(mut self, root_package: impl Into<String>) -> Self {
        self.root_package = Some(root_package.into());
        self
    }

    pub fn with_manifest_path(mut self, manifest_path: PathBuf) -> Self {
        self.manifest_path = Some(manifest_path);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_build_tags(mut self, build_tags: Vec<String>) -> Self {
        self.build_tags = build_tags;
        self
    }

    pub fn with_stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = Some(stop_on_error);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_ignore_rules(mut self, ignore_rules: IgnoreRules) -> Self {
        self.ignore_rules = Some(ignore_rules);
        self
    }

    pub fn with_docs_base_url(mut self, docs_base_url: impl Into<String>) -> Self {
        self.docs_base_url = Some(docs_base_url.into());
        self
    }
}

impl crate::common::ConfigBuilder for GraphConfigBuilder {
    type Config = GraphConfig;

    fn build(self) -> Result<Self::Config, DepGraphError> {
        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 {
            return Err(DepGraphError::ConfigurationError {
                message: "max_depth must be greater than zero".to_string(),
            });
        }

        let root_package = self
            .root_package
            .unwrap_or_else(|| DEFAULT_ROOT_PACKAGE.to_string());
        if root_package.trim().is_empty() {
            return Err(DepGraphError::ConfigurationError {
                message: "root package must not be empty".to_string(),
            });
        }

        Ok(GraphConfig {
            working_dir: self.working_dir.ok_or_else(|| DepGraphError::ConfigurationError {
                message: "Missing required field: working_dir".to_string(),
            })?,
            root_package,
            manifest_path: self
                .manifest_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH)),
            output: self.output,
            debug: self.debug,
            build_tags: self.build_tags,
            stop_on_error: self.stop_on_error.unwrap_or(true),
            max_depth,
            ignore_rules: self.ignore_rules.unwrap_or_default(),
            docs_base_url: self
                .docs_base_url
                .unwrap_or_else(|| DEFAULT_DOCS_BASE_URL.to_string()),
        })
    }
}
