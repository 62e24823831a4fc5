use crate::analyzer::FileCount;
use crate::cli::{Cli, CountArgs};
use crate::error::Result;
use crate::{EXIT_CONFIG_ERROR, EXIT_NONCOMPLIANT, EXIT_SUCCESS};

use super::context::{
    build_analyzer, build_scanner, color_choice_to_mode, load_config, write_output,
};

#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Count logical and physical lines of every given path.
///
/// # Errors
/// Returns an error on invalid configuration, a missing path, or an output
/// write failure.
pub fn run_count_impl(args: &CountArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(max_line_length) = args.max_line_length {
        config.analysis.max_line_length = max_line_length;
    }
    config.validate()?;

    let analyzer = build_analyzer(&config);
    let scanner = build_scanner(&config, args.ext.as_deref(), &args.exclude)?;

    let mut counts = Vec::new();
    for path in &args.paths {
        counts.extend(analyzer.count_path(&scanner, path)?);
    }

    let output = args
        .format
        .formatter(color_choice_to_mode(cli.color))
        .format_counts(&counts)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    let non_compliant = counts
        .iter()
        .any(|(_, count)| *count == FileCount::NonCompliant);
    if args.strict && non_compliant {
        Ok(EXIT_NONCOMPLIANT)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
