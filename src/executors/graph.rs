//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::GraphConfig;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::manifest::ModuleManifest;
use crate::progress::TraversalReporter;
use crate::resolver::{GoListResolver, PackageResolver};
use crate::traversal::Traverser;

pub struct GraphExecutor;

impl GraphExecutor {
    /// Discover the module's packages through `resolver` and write the DOT
    /// document to `output`
    ///
    /// Nothing reaches `output` unless discovery and rendering both succeed.
    /// Progress and traces go to stderr.
    pub fn write_graph(
        config: &GraphConfig,
        resolver: &dyn PackageResolver,
        output: &mut dyn Write,
    ) -> Result<()> {
        let manifest = ModuleManifest::parse_file(&config.manifest_path)
            .wrap_err("Failed to determine the module name")?;

        let mut reporter = TraversalReporter::new(config.debug);
        reporter.start_traversal(&manifest.module_name);

        let traversal = Traverser::new(
            resolver,
            manifest.module_name.as_str(),
            config.traversal_options(),
        )
        .with_reporter(&reporter)
        .traverse(&config.working_dir, &config.root_package);

        let graph = match traversal {
            Ok(graph) => graph,
            Err(err) => {
                reporter.abort_traversal();
                return Err(err).wrap_err_with(|| {
                    format!("Failed to discover packages of {}", manifest.module_name)
                });
            }
        };
        reporter.finish_traversal(&graph);

        let renderer = GraphRenderer::new(config.ignore_rules.clone())
            .with_docs_base_url(config.docs_base_url.clone());
        let document = renderer
            .render_to_string(&graph)
            .wrap_err("Failed to render DOT graph")?;

        output
            .write_all(document.as_bytes())
            .and_then(|_| output.flush())
            .into_diagnostic()
            .wrap_err("Failed to write DOT graph")
    }
}

impl CommandExecutor for GraphExecutor {
    type Config = GraphConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let resolver = GoListResolver::new(config.build_tags.clone());

        // The output file is only created once the document exists
        let Some(output_path) = config.output.as_ref() else {
            return Self::write_graph(&config, &resolver, &mut io::stdout().lock());
        };

        let mut document = Vec::new();
        Self::write_graph(&config, &resolver, &mut document)?;

        let mut output_writer = BufWriter::new(
            File::create(output_path)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Failed to create output file '{}'", output_path.display())
                })?,
        );
        output_writer
            .write_all(&document)
            .and_then(|_| output_writer.flush())
            .into_diagnostic()
            .wrap_err("Failed to write DOT graph")?;

        eprintln!(
            "{} Graph written to {}",
            style("✓").green(),
            style(output_path.display()).bold()
        );

        Ok(())
    }
}
