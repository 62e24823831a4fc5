mod loader;
mod model;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{AnalysisConfig, Config, CustomLanguageConfig, ScannerConfig, WrapConfig};
