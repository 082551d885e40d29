pub mod build;
pub mod completions;
pub mod init;
pub mod inspect;
pub mod list;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::discovery::{discover_or_cwd, DiscoveryResult};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::RegistryBuild;
use crate::validation::{CollectingReporter, ValidationResult};

/// worldmap - Layered tile map compiler
#[derive(Parser, Debug)]
#[command(name = "worldmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile map sources to JSON
    Build(build::BuildArgs),

    /// Compile map sources and run cross-map checks
    Validate(validate::ValidateArgs),

    /// List compiled maps
    List(list::ListArgs),

    /// Show the composite grid or one cell of a map
    Inspect(inspect::InspectArgs),

    /// Initialize a worldmap project (generates worldmap.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Maps compiled for a CLI command, with the warnings raised along the way.
pub(crate) struct CompiledSources {
    pub manifest_output: Option<PathBuf>,
    pub pretty: bool,
    pub build: RegistryBuild,
    pub warnings: ValidationResult,
}

/// Discover, parse and compile every map reachable from `files`.
pub(crate) fn compile_sources(
    files: &[PathBuf],
    strict: bool,
    printer: &Printer,
) -> Result<CompiledSources> {
    let discovery: DiscoveryResult = discover_or_cwd(files)?;

    let mut options = discovery.manifest.compile_options();
    options.strict_layer_ids |= strict;

    printer.status(
        "Compiling",
        &plural(discovery.scan.total(), "map file", "map files"),
    );

    let manifest_output = discovery.has_manifest.then(|| discovery.output_dir());
    let pretty = discovery.manifest.pretty;

    let reporter = CollectingReporter::new();
    let build = discovery
        .into_builder_with_options(options)?
        .build(&reporter);

    Ok(CompiledSources {
        manifest_output,
        pretty,
        build,
        warnings: reporter.into_result(),
    })
}

/// Print compile warnings and per-map failures.
pub(crate) fn print_compile_report(compiled: &CompiledSources, printer: &Printer) {
    for warning in compiled.warnings.iter() {
        let map_id = warning.map_id.as_deref().unwrap_or("-");
        printer.warning("Warning", &format!("{}: {}", map_id, warning.message));
    }
    print_failures(&compiled.build, printer);
}

/// Print maps that failed to compile.
pub(crate) fn print_failures(build: &RegistryBuild, printer: &Printer) {
    for failure in &build.failures {
        printer.error("Failed", &failure.error.to_string());
        if let Some(help) = failure_help(&failure.error) {
            eprintln!("{:>12} {}", "", printer.dim(&format!("help: {}", help)));
        }
    }
}

fn failure_help(error: &crate::error::MapError) -> Option<String> {
    miette::Diagnostic::help(error).map(|h| h.to_string())
}
