//! # Package Resolution
//!
//! Discovery never inspects source files itself. It asks a [`PackageResolver`]
//! to turn a package name and a search directory into a [`Package`]
//! descriptor. The production implementation shells out to `go list`; tests
//! supply in-memory resolvers.
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//!
//! use godep_graph::core::Package;
//! use godep_graph::resolver::{PackageResolver, ResolveError};
//!
//! struct Fixed;
//!
//! impl PackageResolver for Fixed {
//!     fn resolve(&self, name: &str, _search_root: &Path) -> Result<Package, ResolveError> {
//!         Ok(Package::new(name).with_imports(["fmt"]))
//!     }
//! }
//!
//! let pkg = Fixed.resolve("example.com/app", Path::new(".")).unwrap();
//! assert_eq!(pkg.imports, vec!["fmt".to_string()]);
//! ```

mod go_list;

use std::path::Path;

pub use go_list::GoListResolver;
use thiserror::Error;

use crate::core::Package;

/// Resolves a package name relative to a search directory
pub trait PackageResolver {
    fn resolve(&self, name: &str, search_root: &Path) -> Result<Package, ResolveError>;
}

impl<R: PackageResolver + ?Sized> PackageResolver for &R {
    fn resolve(&self, name: &str, search_root: &Path) -> Result<Package, ResolveError> {
        (**self).resolve(name, search_root)
    }
}

/// A failed resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The resolver reported an error but still produced a descriptor
    #[error("{message}")]
    Partial {
        package: Box<Package>,
        message: String,
    },

    /// Nothing usable came back
    #[error("{message}")]
    Unresolvable { message: String },
}

impl ResolveError {
    pub fn partial(package: Package, message: impl Into<String>) -> Self {
        ResolveError::Partial {
            package: Box::new(package),
            message: message.into(),
        }
    }

    pub fn unresolvable(message: impl Into<String>) -> Self {
        ResolveError::Unresolvable {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ResolveError::Partial { message, .. } | ResolveError::Unresolvable { message } => {
                message
            }
        }
    }

    /// The best-effort descriptor, if the resolver produced one
    pub fn into_partial(self) -> Option<Package> {
        match self {
            ResolveError::Partial { package, .. } => Some(*package),
            ResolveError::Unresolvable { .. } => None,
        }
    }
}
