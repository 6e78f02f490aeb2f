//! Isolated test environment with a temporary vault.

use super::{NoteCheckCommand, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary vault directory.
///
/// Creates temp directories that are automatically cleaned up on drop. The
/// config directory is separate from the vault so user configuration never
/// leaks into tests.
pub struct TestEnv {
    /// The temporary vault (kept for lifetime management)
    _vault: TempDir,
    /// Isolated config home
    _config_home: TempDir,
    vault_dir: PathBuf,
    config_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty vault.
    pub fn new() -> Self {
        let vault = TempDir::new().expect("Failed to create vault directory");
        let config_home = TempDir::new().expect("Failed to create config directory");
        let vault_dir = vault.path().to_path_buf();
        let config_dir = config_home.path().to_path_buf();
        Self {
            _vault: vault,
            _config_home: config_home,
            vault_dir,
            config_dir,
        }
    }

    /// Returns the path to the vault directory.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Adds a note to the vault, named after its title.
    pub fn add_note(&self, note: &TestNote) -> PathBuf {
        self.write_file(&format!("{}.md", note.title()), &note.render())
    }

    /// Adds empty notes with the given names.
    pub fn add_names(&self, names: &[&str]) {
        for name in names {
            self.write_file(&format!("{}.md", name), "");
        }
    }

    /// Writes a file relative to the vault and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.vault_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a file outside the vault (a draft) and returns its path.
    pub fn write_draft(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write draft");
        path
    }

    /// Writes `notecheck/config.toml` in the isolated config home.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_dir.join("notecheck");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> NoteCheckCommand {
        NoteCheckCommand::new()
            .config_home(&self.config_dir)
            .dir(&self.vault_dir)
    }

    /// Creates a command that relies on config for the vault location.
    pub fn cmd_without_dir(&self) -> NoteCheckCommand {
        NoteCheckCommand::new().config_home(&self.config_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_vault() {
        let env = TestEnv::new();
        assert!(env.vault_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.vault_dir().to_path_buf()
        };
        assert!(!path.exists(), "vault should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_uses_title() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("Hello"));
        assert_eq!(path, env.vault_dir().join("Hello.md"));
        assert!(path.exists());
    }
}
