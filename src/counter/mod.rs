mod classify;
mod logical;
mod structure;

pub use classify::{LineClassifier, LineKind, LineStats, code_lines, tally};
pub use logical::{KeywordScanner, strip_string_literals};
pub use structure::{NO_CLASS, StructuralExtractor, StructuralMetrics};
