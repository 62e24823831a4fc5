use log::info;

use crate::cli::{Cli, CompareArgs};
use crate::config::Config;
use crate::diff::{DiffEngine, DiffMode, SeverityClassifier};
use crate::error::Result;
use crate::output::{ScanProgress, display_path};
use crate::reconcile::{ProjectComparison, ProjectReconciler};
use crate::{EXIT_CONFIG_ERROR, EXIT_NONCOMPLIANT, EXIT_SUCCESS};

use super::context::{
    build_analyzer, build_scanner, color_choice_to_mode, load_config, write_output,
};

#[must_use]
pub fn run_compare(args: &CompareArgs, cli: &Cli) -> i32 {
    match run_compare_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Compare the two roots and write the report.
///
/// # Errors
/// Returns an error on invalid configuration, a missing root, or an output
/// write failure.
pub fn run_compare_impl(args: &CompareArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    let reconciler = ProjectReconciler::new(
        build_analyzer(&config),
        build_scanner(&config, args.ext.as_deref(), &args.exclude)?,
        DiffEngine::new(SeverityClassifier::new(config.analysis.severity_threshold)?),
    )
    .with_mode(config.analysis.diff_mode);

    let files = reconciler.iter(&args.old, &args.new)?;
    let progress = ScanProgress::new(u64::try_from(files.len()).unwrap_or(u64::MAX), cli.quiet);
    let comparison: ProjectComparison = files
        .inspect(|(path, _)| progress.inc(&display_path(path)))
        .collect();
    progress.finish();

    let totals = comparison.totals();
    info!(
        "compared {} path(s): {} physical, +{} -{}",
        comparison.len(),
        totals.physical_lines,
        totals.added_lines,
        totals.removed_lines
    );

    let output = args
        .format
        .formatter(color_choice_to_mode(cli.color))
        .format_comparison(&comparison)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if args.strict && comparison.has_non_compliant() {
        Ok(EXIT_NONCOMPLIANT)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn apply_cli_overrides(config: &mut Config, args: &CompareArgs) {
    if let Some(threshold) = args.threshold {
        config.analysis.severity_threshold = threshold;
    }
    if let Some(max_line_length) = args.max_line_length {
        config.analysis.max_line_length = max_line_length;
    }
    if args.unordered {
        config.analysis.diff_mode = DiffMode::Unordered;
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
