use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DepGraphError {
    #[error("Failed to read module manifest '{path}'")]
    #[diagnostic(
        code(godep_graph::manifest_read_error),
        help("Check the --gomodpath argument and that the file is readable")
    )]
    ManifestReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No module declaration found in '{path}'")]
    #[diagnostic(
        code(godep_graph::missing_module),
        help("The manifest must contain a line of the form `module example.com/app`")
    )]
    MissingModuleDeclaration { path: PathBuf },

    #[error(
        "Failed to import {} (imported at level {} by {}):\n{}",
        .package, .depth + 1, .imported_by, .message
    )]
    #[diagnostic(
        code(godep_graph::resolution_failed),
        help("Fix the package or rerun with --keep-going to render it as a failed node")
    )]
    ResolutionFailed {
        package: String,
        /// Zero-based; the root package is at level 1 in the message
        depth: usize,
        imported_by: String,
        message: String,
    },

    #[error("IO error")]
    #[diagnostic(
        code(godep_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(godep_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
