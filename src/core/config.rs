//! Configuration for the device metadata readers

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory holding one `cpuN` entry per logical CPU.
pub const DEFAULT_CPU_DIR: &str = "/sys/devices/system/cpu";

/// Default memory statistics file.
pub const DEFAULT_MEMINFO_PATH: &str = "/proc/meminfo";

/// Number of meminfo lines scanned for the total-memory label.
pub const DEFAULT_MEMINFO_LOOKAHEAD: usize = 3;

/// Default DMI identity directory (manufacturer, product name).
pub const DEFAULT_DMI_DIR: &str = "/sys/class/dmi/id";

/// Default os-release file.
pub const DEFAULT_OS_RELEASE_PATH: &str = "/etc/os-release";

/// Source locations used by the metric reader and the Linux descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Directory enumerated for `cpu<digits>` entries
    pub cpu_dir: PathBuf,

    /// Memory statistics file (`MemTotal: <n> kB`)
    pub meminfo_path: PathBuf,

    /// How many leading meminfo lines to scan
    pub meminfo_lookahead: usize,

    /// DMI identity directory
    pub dmi_dir: PathBuf,

    /// os-release file
    pub os_release_path: PathBuf,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            cpu_dir: PathBuf::from(DEFAULT_CPU_DIR),
            meminfo_path: PathBuf::from(DEFAULT_MEMINFO_PATH),
            meminfo_lookahead: DEFAULT_MEMINFO_LOOKAHEAD,
            dmi_dir: PathBuf::from(DEFAULT_DMI_DIR),
            os_release_path: PathBuf::from(DEFAULT_OS_RELEASE_PATH),
        }
    }
}

impl ReaderConfig {
    /// Load config from TOML file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to TOML file, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Per-user config location, e.g. `~/.config/devinfo/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("devinfo").join("config.toml"))
    }

    /// Load an explicit config file, or the per-user one if it exists.
    ///
    /// An explicit path must exist. A missing per-user file yields defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Lookahead window, never smaller than one line.
    pub fn lookahead(&self) -> usize {
        self.meminfo_lookahead.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert_eq!(config.cpu_dir, PathBuf::from("/sys/devices/system/cpu"));
        assert_eq!(config.meminfo_path, PathBuf::from("/proc/meminfo"));
        assert_eq!(config.lookahead(), 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ReaderConfig = toml::from_str("meminfo_lookahead = 5\n").unwrap();
        assert_eq!(config.meminfo_lookahead, 5);
        assert_eq!(config.cpu_dir, PathBuf::from(DEFAULT_CPU_DIR));
    }

    #[test]
    fn test_zero_lookahead_is_clamped() {
        let config = ReaderConfig {
            meminfo_lookahead: 0,
            ..Default::default()
        };
        assert_eq!(config.lookahead(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ReaderConfig {
            cpu_dir: PathBuf::from("/tmp/cpus"),
            meminfo_lookahead: 7,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = ReaderConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(ReaderConfig::load_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "meminfo_lookahead = \"three\"\n").unwrap();
        assert!(ReaderConfig::load(&path).is_err());
    }
}
