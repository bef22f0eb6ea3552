//! Module manifest (`go.mod`) reading

use std::path::{Path, PathBuf};

use crate::constants::manifest::MODULE_KEYWORD;
use crate::error::DepGraphError;

/// The parts of a `go.mod` file discovery cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleManifest {
    pub path: PathBuf,
    pub module_name: String,
}

impl ModuleManifest {
    pub fn parse_file(path: &Path) -> Result<Self, DepGraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DepGraphError::ManifestReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(path, &content)
    }

    /// The first line starting with `module ` wins.
    pub fn parse_str(path: &Path, content: &str) -> Result<Self, DepGraphError> {
        content
            .lines()
            .find_map(|line| line.strip_prefix(MODULE_KEYWORD))
            .map(clean_module_name)
            .filter(|name| !name.is_empty())
            .map(|module_name| ModuleManifest {
                path: path.to_path_buf(),
                module_name,
            })
            .ok_or_else(|| DepGraphError::MissingModuleDeclaration {
                path: path.to_path_buf(),
            })
    }
}

fn clean_module_name(raw: &str) -> String {
    let without_comment = raw.split_once("//").map_or(raw, |(name, _)| name);
    let trimmed = without_comment.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_module_declaration() {
        let content = "module example.com/app\n\ngo 1.22\n\nrequire github.com/pkg/errors v0.9.1\n";
        let manifest = ModuleManifest::parse_str(Path::new("go.mod"), content).unwrap();

        assert_eq!(manifest.module_name, "example.com/app");
    }

    #[test]
    fn test_first_declaration_wins_and_is_trimmed() {
        let content = "// header\nmodule   example.com/first  \nmodule example.com/second\n";
        let manifest = ModuleManifest::parse_str(Path::new("go.mod"), content).unwrap();

        assert_eq!(manifest.module_name, "example.com/first");
    }

    #[test]
    fn test_quoted_name_and_trailing_comment() {
        let content = "module \"example.com/app\" // deprecated: use v2\n";
        let manifest = ModuleManifest::parse_str(Path::new("go.mod"), content).unwrap();

        assert_eq!(manifest.module_name, "example.com/app");
    }

    #[test]
    fn test_indented_declaration_is_not_a_module_line() {
        let content = "  module example.com/app\ngo 1.22\n";
        let err = ModuleManifest::parse_str(Path::new("go.mod"), content).unwrap_err();

        assert!(matches!(err, DepGraphError::MissingModuleDeclaration { .. }));
    }

    #[test]
    fn test_missing_declaration() {
        let err = ModuleManifest::parse_str(Path::new("go.mod"), "go 1.22\n").unwrap_err();

        assert_eq!(err.to_string(), "No module declaration found in 'go.mod'");
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"module github.com/acme/widgets\n\ngo 1.21\n")
            .unwrap();

        let manifest = ModuleManifest::parse_file(file.path()).unwrap();

        assert_eq!(manifest.module_name, "github.com/acme/widgets");
        assert_eq!(manifest.path, file.path());
    }

    #[test]
    fn test_unreadable_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("go.mod");

        let err = ModuleManifest::parse_file(&missing).unwrap_err();

        assert!(matches!(err, DepGraphError::ManifestReadError { .. }));
    }
}
