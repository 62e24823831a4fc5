use crate::cli::{Cli, DiffArgs};
use crate::diff::{DiffEngine, SeverityClassifier};
use crate::error::{Result, SlocDeltaError};
use crate::language::LanguageRegistry;
use crate::reader::{FsLineReader, LineReader};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, write_output};

const FALLBACK_COMMENT_PREFIX: &str = "#";

#[must_use]
pub fn run_diff(args: &DiffArgs, cli: &Cli) -> i32 {
    match run_diff_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Annotate every changed line of `new` relative to `old`.
///
/// # Errors
/// Returns an error if either file is missing, the threshold is invalid, or
/// the output cannot be written.
pub fn run_diff_impl(args: &DiffArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(threshold) = args.threshold {
        config.analysis.severity_threshold = threshold;
    }
    config.validate()?;

    for path in [&args.old, &args.new] {
        if !path.is_file() {
            return Err(SlocDeltaError::PathNotFound(path.clone()));
        }
    }

    let reader = FsLineReader;
    let engine = DiffEngine::new(SeverityClassifier::new(config.analysis.severity_threshold)?);
    let annotation = engine.annotate(&reader.read(&args.old), &reader.read(&args.new));

    let registry = LanguageRegistry::with_custom_languages(&config.languages);
    let comment_prefix = args
        .new
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| registry.get_by_extension(ext))
        .and_then(|language| language.syntax.comment_prefixes.first())
        .map_or(FALLBACK_COMMENT_PREFIX, String::as_str);

    let output = args
        .format
        .formatter(color_choice_to_mode(cli.color))
        .format_annotation(&annotation, comment_prefix)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
