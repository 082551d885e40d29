//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{MapError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_registry};

use super::{compile_sources, print_failures};

/// Compile map sources and run cross-map checks without writing output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Map files or directories (default: current project)
    pub files: Vec<PathBuf>,

    /// Reject non-numeric and duplicate layer ids
    #[arg(long)]
    pub strict: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub deny_warnings: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let compiled = compile_sources(&args.files, args.strict, printer)?;
    print_failures(&compiled.build, printer);

    let mut result = compiled.warnings.clone();
    result.merge(validate_registry(&compiled.build.registry));

    print_diagnostics(&result);

    let failed = compiled.build.failures.len();
    if failed > 0 || result.has_errors() {
        return Err(MapError::Validation {
            message: format!(
                "{}, {}",
                plural(failed, "map failed to compile", "maps failed to compile"),
                plural(result.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    if args.deny_warnings && result.has_warnings() {
        return Err(MapError::Validation {
            message: plural(result.warning_count(), "warning", "warnings"),
            help: Some("Remove --deny-warnings to allow warnings".to_string()),
        });
    }

    printer.success(
        "Checked",
        &plural(compiled.build.registry.len(), "map", "maps"),
    );

    Ok(())
}
