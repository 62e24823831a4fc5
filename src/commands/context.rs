use std::fs;
use std::path::Path;

use log::LevelFilter;

use crate::analyzer::FileAnalyzer;
use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{Result, SlocDeltaError};
use crate::language::LanguageRegistry;
use crate::output::ColorMode;
use crate::scanner::{DirectoryScanner, GlobFilter};
use crate::standard::LineLengthValidator;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Log level for `-q` and the number of `-v` flags. `RUST_LOG` still overrides it.
#[must_use]
pub const fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Load the explicit config file, the local `.sloc-delta.toml`, or defaults.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Extensions to scan: the override, or the configured ones plus every
/// extension declared by a custom language.
pub(crate) fn scan_extensions(config: &Config, ext_override: Option<&[String]>) -> Vec<String> {
    if let Some(exts) = ext_override {
        return exts.to_vec();
    }
    let mut exts = config.analysis.extensions.clone();
    for language in config.languages.values() {
        for ext in &language.extensions {
            if !exts.contains(ext) {
                exts.push(ext.clone());
            }
        }
    }
    exts
}

pub(crate) fn build_scanner(
    config: &Config,
    ext_override: Option<&[String]>,
    extra_excludes: &[String],
) -> Result<DirectoryScanner<GlobFilter>> {
    let mut exclude_patterns = config.scanner.exclude.clone();
    exclude_patterns.extend_from_slice(extra_excludes);
    let filter = GlobFilter::new(scan_extensions(config, ext_override), &exclude_patterns)?;
    Ok(DirectoryScanner::with_gitignore(filter, config.scanner.gitignore))
}

pub(crate) fn build_analyzer(config: &Config) -> FileAnalyzer {
    FileAnalyzer::new(
        LanguageRegistry::with_custom_languages(&config.languages),
        LineLengthValidator::new(config.analysis.max_line_length),
    )
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).map_err(|source| SlocDeltaError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
