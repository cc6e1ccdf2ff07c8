use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the
/// confirma binary. The temporary directory is removed on drop.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    pub confirma_binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness with no config file, so the built-in patterns apply.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".confirma/config.md");

        TestHarness {
            dir: temp_dir,
            config_path,
            confirma_binary: PathBuf::from(env!("CARGO_BIN_EXE_confirma")),
        }
    }

    /// Creates a harness whose `.confirma/config.md` holds `config_content`.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        let parent = harness
            .config_path
            .parent()
            .expect("config path has a parent");
        fs::create_dir_all(parent).expect("Failed to create config dir");
        fs::write(&harness.config_path, config_content).expect("Failed to write config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the confirma binary with the given arguments in the harness
    /// directory, with colour disabled and inherited quiet/log settings cleared.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run confirma")
    }

    /// Executes the confirma binary with colour forced on.
    #[allow(dead_code)]
    pub fn run_colored(&self, args: &[&str]) -> Output {
        self.command(args)
            .env_remove("NO_COLOR")
            .env("CLICOLOR_FORCE", "1")
            .output()
            .expect("Failed to run confirma")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.confirma_binary);
        command
            .args(args)
            .current_dir(self.path())
            .env_remove("CONFIRMA_QUIET")
            .env_remove("RUST_LOG");
        command
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
