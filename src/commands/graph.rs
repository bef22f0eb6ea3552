//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCommand, working_dir};
use crate::config::GraphConfig;
use crate::error::DepGraphError;
use crate::filter::IgnoreRules;

impl FromCommand for GraphConfig {
    fn from_command(cli: Cli) -> Result<Self, DepGraphError> {
        let ignore_rules = IgnoreRules::new()
            .with_ignored(cli.filter.ignored)
            .with_ignored_prefixes(cli.filter.ignored_prefixes)
            .with_only_prefixes(cli.filter.only_prefixes);

        GraphConfig::builder()
            .with_working_dir(working_dir())
            .with_root_package(cli.package)
            .with_manifest_path(cli.gomod_path)
            .with_output(cli.output)
            .with_debug(cli.debug)
            .with_build_tags(cli.traversal.tags)
            .with_stop_on_error(!cli.traversal.keep_going)
            .with_max_depth(cli.traversal.max_depth)
            .with_ignore_rules(ignore_rules)
            .with_docs_base_url(cli.docs_url)
            .build()
    }
}

crate::impl_try_from_command!(GraphConfig);

/// Execute the graph command
pub fn execute_graph_command(cli: Cli) -> Result<()> {
    let config =
        GraphConfig::from_command(cli).wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
