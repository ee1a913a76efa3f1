use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project directory plus a command for the built binary
pub struct CliTestHelper {
    pub temp_dir: TempDir,
}

impl CliTestHelper {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Command running in the project directory with no database configured
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tabledef").unwrap();
        cmd.current_dir(self.root()).env_remove("DATABASE_URL").env_remove("RUST_LOG");
        cmd
    }

    pub fn write_model(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        fs::write(self.root().join("tabledef.yaml"), content)?;
        Ok(())
    }
}
