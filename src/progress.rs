use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::traversal::DiscoveredGraph;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Reports traversal progress and debug traces on stderr
///
/// Nothing is ever written to stdout, which carries the graph document.
pub struct TraversalReporter {
    term: Term,
    debug: bool,
    spinner: Option<ProgressBar>,
}

impl TraversalReporter {
    pub fn new(debug: bool) -> Self {
        Self {
            term: Term::stderr(),
            debug,
            spinner: None,
        }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    /// The spinner would garble debug traces, so it only runs without them
    pub fn start_traversal(&mut self, module_name: &str) {
        if self.debug || !self.term.is_term() {
            return;
        }
        let spinner = self.create_spinner(&format!("Resolving packages of {module_name}..."));
        self.spinner = Some(spinner);
    }

    pub fn resolving(&self, name: &str) {
        if let Some(ref pb) = self.spinner {
            pb.set_message(format!("Resolving: {name}..."));
        }
    }

    pub fn trace_package(&self, import_path: &str, root: &Path, name: &str, imported_by: &str) {
        if !self.debug {
            return;
        }
        eprintln!("{}", style("====================================").dim());
        eprintln!("{} import path: {}", style("📦").cyan(), style(import_path).bold());
        eprintln!("   search root: {}", root.display());
        eprintln!("   requested:   {name}");
        eprintln!("   imported by: {imported_by}");
        eprintln!();
    }

    pub fn trace_truncated(&self, name: &str, depth: usize) {
        if self.debug {
            eprintln!(
                "{} depth {} exceeded, not descending into {}",
                style("⚠").yellow(),
                depth,
                name
            );
        }
    }

    pub fn resolution_failed(&self, name: &str, message: &str) {
        let line = format!(
            "{} Failed to resolve {}: {}",
            style("⚠").yellow(),
            style(name).bold(),
            message
        );
        match self.spinner {
            Some(ref pb) => pb.println(line),
            None => eprintln!("{line}"),
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    pub fn abort_traversal(&mut self) {
        self.clear_spinner();
    }

    pub fn finish_traversal(&mut self, graph: &DiscoveredGraph) {
        self.clear_spinner();
        if !self.debug && !self.term.is_term() {
            return;
        }

        let count = graph.len();
        eprintln!(
            "{} Discovered {} {}",
            style("✓").green(),
            style(count).yellow().bold(),
            pluralize("package", count)
        );
        if !graph.failed().is_empty() {
            eprintln!(
                "{} {} failed to resolve",
                style("✗").red(),
                style(graph.failed().len()).red().bold()
            );
        }
        if graph.truncated_count() > 0 {
            eprintln!(
                "{} {} {} skipped at the depth limit",
                style("⚠").yellow(),
                graph.truncated_count(),
                pluralize("import", graph.truncated_count())
            );
        }
    }
}
