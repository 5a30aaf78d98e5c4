//! Common test utilities for rbdl integration tests
//!
//! - CLI invocation helpers running the built binary in a scratch directory
//! - Mock export API setup using wiremock
//! - Response fixtures

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value as JsonValue};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the export endpoint on the mock server
pub const EXPORT_PATH: &str = "/api/export.php";

/// Email used by most tests
pub const EMAIL: &str = "user@example.com";

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code
    pub exit_code: i32,
}

/// Isolated environment: scratch working directory and config directory
pub struct TestEnv {
    /// Working directory for the child process
    pub work_dir: TempDir,
    /// Config directory (RBDL_CONFIG_DIR)
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
            env_vars: HashMap::new(),
        }
    }

    /// Set an environment variable
    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config");
    }

    /// Path inside the working directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir.path().join(name)
    }

    /// Files created in the working directory
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.work_dir.path())
            .expect("Failed to read work dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Base command with a clean environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rbdl"));
        cmd.current_dir(self.work_dir.path());
        cmd.env_remove("RBDL_EMAIL");
        cmd.env_remove("RBDL_ENDPOINT");
        cmd.env_remove("RBDL_LOG");
        cmd.env("RBDL_CONFIG_DIR", self.config_dir.path());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }

    /// Run the CLI with the given arguments
    pub fn run(&self, args: &[&str]) -> CliResponse {
        let mut cmd = self.command();
        cmd.args(["--timeout", "5"]);
        cmd.args(args);
        parse_output(cmd.output().expect("Failed to execute command"))
    }
}

/// Run the CLI in a fresh environment
pub fn rbdl(args: &[&str]) -> CliResponse {
    TestEnv::new().run(args)
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}

/// Endpoint URL of the export API on `server`
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), EXPORT_PATH)
}

/// Mount a GET handler for the export path answering with `response`
pub async fn mount_export(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(EXPORT_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

/// A typical export response with one on-air and one off-air repeater
pub fn sample_response() -> JsonValue {
    json!({
        "count": 2,
        "results": [
            {
                "Callsign": "W1AW",
                "Frequency": "146.5200",
                "Input Freq": "146.5200",
                "Nearest City": "Newington",
                "Country": "United States",
                "Operational Status": "On-air",
                "Use": "OPEN"
            },
            {
                "Callsign": "K2XYZ",
                "Frequency": "447.0000",
                "Nearest City": "Albany",
                "Country": "United States",
                "Operational Status": "Off-air",
                "DMR": "Yes"
            }
        ]
    })
}

/// Read a written output file as JSON
pub fn read_json(path: &Path) -> JsonValue {
    let text = std::fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&text).expect("Output is not valid JSON")
}
