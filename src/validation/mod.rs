//! Diagnostics for compiled maps.
//!
//! Two sources feed diagnostics: warnings raised while a map compiles
//! (delivered through a [`WarningReporter`]) and registry-wide checks run
//! afterwards. Used by both `worldmap validate` and `worldmap build`.

mod checks;
mod reporter;
mod warning;

pub use checks::{
    check_blocked_camera_point, check_inert_layers, check_silent_encounter_groups,
    check_warp_targets,
};
pub use reporter::{CollectingReporter, NullReporter, TracingReporter, WarningReporter};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::registry::MapRegistry;

/// Run all validation checks against the registry.
pub fn validate_registry(registry: &MapRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_warp_targets(registry));
    result.merge(checks::check_inert_layers(registry));
    result.merge(checks::check_silent_encounter_groups(registry));
    result.merge(checks::check_blocked_camera_point(registry));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}", d);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}
