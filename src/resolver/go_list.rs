//! Resolution through `go list -json`

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use super::{PackageResolver, ResolveError};
use crate::core::Package;

/// Subset of the `go list -json` package record that discovery needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListPackage {
    #[serde(default)]
    import_path: String,
    #[serde(default)]
    dir: PathBuf,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    goroot: bool,
    #[serde(default)]
    standard: bool,
    #[serde(default)]
    cgo_files: Vec<String>,
    #[serde(default)]
    error: Option<GoListError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListError {
    err: String,
}

impl From<GoListPackage> for Package {
    fn from(raw: GoListPackage) -> Self {
        Package {
            import_path: raw.import_path,
            dir: raw.dir,
            imports: raw.imports,
            standard: raw.standard || raw.goroot,
            cgo_files: raw.cgo_files,
        }
    }
}

/// Resolves packages by running the Go toolchain
#[derive(Debug, Clone)]
pub struct GoListResolver {
    go_binary: OsString,
    build_tags: Vec<String>,
}

impl Default for GoListResolver {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl GoListResolver {
    pub fn new(build_tags: Vec<String>) -> Self {
        Self {
            go_binary: OsString::from("go"),
            build_tags,
        }
    }

    /// Use a specific `go` executable instead of the one on `PATH`
    pub fn with_go_binary(mut self, go_binary: impl Into<OsString>) -> Self {
        self.go_binary = go_binary.into();
        self
    }

    fn command(&self, name: &str, search_root: &Path) -> Command {
        let mut cmd = Command::new(&self.go_binary);
        cmd.current_dir(search_root).args(["list", "-e", "-json"]);
        if !self.build_tags.is_empty() {
            cmd.arg("-tags").arg(self.build_tags.join(","));
        }
        cmd.arg(name);
        cmd
    }
}

impl PackageResolver for GoListResolver {
    fn resolve(&self, name: &str, search_root: &Path) -> Result<Package, ResolveError> {
        let output = self.command(name, search_root).output().map_err(|e| {
            ResolveError::unresolvable(format!(
                "failed to run {}: {e}",
                self.go_binary.to_string_lossy()
            ))
        })?;

        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::unresolvable(format!(
                "go list produced no output for {name} ({}): {}",
                output.status,
                stderr.trim()
            )));
        }

        decode_package(&output.stdout)
    }
}

/// Decode one `go list -json` record
///
/// A record carrying an `Error` is still a usable descriptor, so it is
/// returned as [`ResolveError::Partial`].
pub(crate) fn decode_package(stdout: &[u8]) -> Result<Package, ResolveError> {
    let mut raw: GoListPackage = serde_json::from_slice(stdout)
        .map_err(|e| ResolveError::unresolvable(format!("invalid go list output: {e}")))?;

    match raw.error.take() {
        Some(error) => Err(ResolveError::partial(Package::from(raw), error.err)),
        None => Ok(Package::from(raw)),
    }
}
