//! Shared testing harness for `batchrun` integration tests.
//!
//! Layout mirrors a project checkout: the CLI runs from `work/`, sources live
//! in `test/<category>/`, results land in `results/<category>/`, so the
//! default `../test` and `../results` roots resolve inside the sandbox.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_compiler;

pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a sandbox whose config points the compiler at the fake one.
    pub(crate) fn new() -> Self {
        let ctx = Self::bare();
        let compiler = fake_compiler::install(&ctx.root.path().join("bin"));
        ctx.write_config(&format!("[compiler]\nprogram = \"{}\"\n", compiler.display()));
        ctx
    }

    /// Create a sandbox without any config file.
    pub(crate) fn bare() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `batchrun` binary from the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("batchrun").expect("Failed to locate batchrun binary");
        cmd.current_dir(&self.work_dir).env_remove("BATCHRUN_LOG");
        cmd
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("batchrun.toml"), content).expect("write config");
    }

    /// Create an empty category directory.
    pub(crate) fn category(&self, category: &str) -> PathBuf {
        let dir = self.root.path().join("test").join(category);
        fs::create_dir_all(&dir).expect("create category dir");
        dir
    }

    /// Write a fake source whose compiled program prints `content`.
    pub(crate) fn source(&self, category: &str, name: &str, content: &str) {
        fs::write(self.category(category).join(name), content).expect("write source");
    }

    pub(crate) fn results_dir(&self, category: &str) -> PathBuf {
        self.root.path().join("results").join(category)
    }

    pub(crate) fn read_result(&self, category: &str, name: &str) -> String {
        fs::read_to_string(self.results_dir(category).join(name))
            .unwrap_or_else(|e| panic!("result {category}/{name} should be readable: {e}"))
    }

    /// Sorted entry names of a category's results directory.
    pub(crate) fn result_names(&self, category: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.results_dir(category))
            .expect("results dir should exist")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
