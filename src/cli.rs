use std::path::PathBuf;

use clap::Parser;

use crate::constants::manifest::DEFAULT_PATH;
use crate::constants::render::DEFAULT_DOCS_BASE_URL;
use crate::constants::traversal::{DEFAULT_MAX_DEPTH, DEFAULT_ROOT_PACKAGE};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "godep-graph",
    about = "Render the package import graph of a Go module as Graphviz DOT",
    long_about = "godep-graph resolves the root package of a Go module, follows every import \
                  that belongs to the module and prints a Graphviz DOT document describing the \
                  result. Standard library packages are shown but not expanded, packages from \
                  other modules are left out. Pipe the output into `dot -Tsvg` to draw it.",
    version
)]
pub struct Cli {
    /// Package to start from, relative to the current directory
    #[arg(
        value_name = "PACKAGE",
        default_value = DEFAULT_ROOT_PACKAGE,
        env = "GODEP_GRAPH_PACKAGE"
    )]
    pub package: String,

    /// Path to the go.mod file declaring the module
    #[arg(
        short = 'p',
        long = "gomodpath",
        value_name = "PATH",
        default_value = DEFAULT_PATH,
        env = "GODEP_GRAPH_GOMODPATH"
    )]
    pub gomod_path: PathBuf,

    /// Print per-package traces to stderr
    #[arg(short, long, env = "GODEP_GRAPH_DEBUG")]
    pub debug: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "GODEP_GRAPH_OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub traversal: TraversalArgs,

    /// Base URL that node links point to
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_DOCS_BASE_URL,
        env = "GODEP_GRAPH_DOCS_URL"
    )]
    pub docs_url: String,
}

/// Arguments deciding which packages are drawn
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Leave out this exact import path (repeatable)
    #[arg(long = "ignore", value_name = "IMPORT_PATH")]
    pub ignored: Vec<String>,

    /// Leave out import paths starting with this prefix (repeatable)
    #[arg(long = "ignore-prefix", value_name = "PREFIX")]
    pub ignored_prefixes: Vec<String>,

    /// Draw only import paths starting with this prefix (repeatable)
    #[arg(long = "only-prefix", value_name = "PREFIX")]
    pub only_prefixes: Vec<String>,
}

/// Arguments controlling package resolution
#[derive(clap::Args, Debug, Clone)]
pub struct TraversalArgs {
    /// Build tags passed to the Go toolchain
    #[arg(long, value_name = "TAGS", value_delimiter = ',', env = "GODEP_GRAPH_TAGS")]
    pub tags: Vec<String>,

    /// Record packages that fail to resolve and keep going instead of aborting
    #[arg(long, env = "GODEP_GRAPH_KEEP_GOING")]
    pub keep_going: bool,

    /// Maximum import depth to follow
    #[arg(
        long,
        value_name = "DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH,
        env = "GODEP_GRAPH_MAX_DEPTH"
    )]
    pub max_depth: usize,
}
