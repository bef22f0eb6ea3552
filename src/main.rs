use miette::Result;

/// Main entry point for the godep-graph CLI
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    godep_graph::run()
}
