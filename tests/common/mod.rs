//! Shared testing utilities for dietplan CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in.
const CONFIG_VARS: [&str; 5] =
    ["GOOGLE_API_KEY", "GEMINI_API_KEY", "DIETPLAN_API_URL", "DIETPLAN_MODEL", "DIETPLAN_LOG"];

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `dietplan` binary with no credentials.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dietplan").expect("Failed to locate dietplan binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home());
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Build a command pointed at `api_url` with a test key.
    pub fn cli_with_endpoint(&self, api_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GOOGLE_API_KEY", "test-key").env("DIETPLAN_API_URL", api_url);
        cmd
    }

    /// Write a `.env` file into the work directory.
    pub fn write_dotenv(&self, content: &str) {
        fs::write(self.work_dir.join(".env"), content).expect("Failed to write .env");
    }
}

/// A `generateContent` response body carrying `text`.
#[allow(dead_code)]
pub fn gemini_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160 }
    })
    .to_string()
}
