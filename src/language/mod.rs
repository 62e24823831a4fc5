mod registry;

pub use registry::{DEFAULT_CONTROL_KEYWORDS, Language, LanguageRegistry, SourceSyntax};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
