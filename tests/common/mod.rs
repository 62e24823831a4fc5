#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloc-delta binary.
#[macro_export]
macro_rules! sloc_delta {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloc-delta"))
    };
}

/// A temporary workspace holding an `old/` and a `new/` project tree.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_dir("old");
        fixture.create_dir("new");
        fixture
    }

    /// Creates a file with the given content, relative to the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn old_file(&self, relative_path: &str, content: &str) {
        self.create_file(&format!("old/{relative_path}"), content);
    }

    pub fn new_file(&self, relative_path: &str, content: &str) {
        self.create_file(&format!("new/{relative_path}"), content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn old_root(&self) -> PathBuf {
        self.dir.path().join("old")
    }

    pub fn new_root(&self) -> PathBuf {
        self.dir.path().join("new")
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".sloc-delta.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Python file with one class, `methods` methods and no control flow.
pub fn python_class(name: &str, methods: usize) -> String {
    let mut content = format!("class {name}:\n");
    for i in 0..methods {
        let _ = writeln!(content, "    def method_{i}(self):");
        let _ = writeln!(content, "        return {i}");
    }
    content
}

/// Python file of `count` plain assignments.
pub fn python_lines(count: usize) -> String {
    let mut content = String::new();
    for i in 0..count {
        let _ = writeln!(content, "x{i} = {i}");
    }
    content
}
