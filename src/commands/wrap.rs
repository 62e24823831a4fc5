use log::info;

use crate::cli::{Cli, WrapArgs};
use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::wrap::{DEFAULT_CONTINUATION, LineWrapper, preview_wrap, wrap_file_with};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::load_config;

#[must_use]
pub fn run_wrap(args: &WrapArgs, cli: &Cli) -> i32 {
    match run_wrap_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Wrap over-long lines of a file in place, or print them with `--dry-run`.
///
/// # Errors
/// Returns an error if the width is invalid, the file is missing, or it
/// cannot be rewritten.
pub fn run_wrap_impl(args: &WrapArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let width = args.width.unwrap_or(config.wrap.max_width);

    let registry = LanguageRegistry::with_custom_languages(&config.languages);
    let marker = args
        .file
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| registry.get_by_extension(ext))
        .map_or(DEFAULT_CONTINUATION, |language| {
            language.syntax.line_continuation.as_str()
        });
    let wrapper = LineWrapper::with_marker(width, marker)?;

    if args.dry_run {
        for line in preview_wrap(&args.file, &wrapper)? {
            println!("{line}");
        }
        return Ok(EXIT_SUCCESS);
    }

    let wrapped = wrap_file_with(&args.file, &wrapper)?;
    info!(
        "wrapped {} to width {width}: {} line(s)",
        args.file.display(),
        wrapped.len()
    );
    if !cli.quiet {
        println!("Wrapped {} ({} lines)", args.file.display(), wrapped.len());
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod tests;
