//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::constants::render::VENDOR_SEGMENT;

/// A resolved Go package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    /// Canonical import path, unique per package
    pub import_path: String,
    /// Directory used as the search root for this package's own imports
    pub dir: PathBuf,
    /// Imports in declaration order, possibly with duplicates
    pub imports: Vec<String>,
    /// Part of the standard library
    pub standard: bool,
    /// Files that import "C"
    pub cgo_files: Vec<String>,
}

impl Package {
    pub fn new(import_path: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            ..Self::default()
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_standard(mut self, standard: bool) -> Self {
        self.standard = standard;
        self
    }

    pub fn with_cgo_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cgo_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn uses_cgo(&self) -> bool {
        !self.cgo_files.is_empty()
    }

    pub fn is_vendored(&self) -> bool {
        self.import_path.contains(VENDOR_SEGMENT)
    }

    /// Imports without self-references or repeats, in first-seen order.
    ///
    /// A package can list itself when its external test package imports it.
    pub fn unique_imports(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.imports
            .iter()
            .map(String::as_str)
            .filter(|imp| *imp != self.import_path)
            .filter(|imp| seen.insert(*imp))
            .collect()
    }
}
