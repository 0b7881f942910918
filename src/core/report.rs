//! Device report snapshot
//!
//! Combines the memoized metrics with the platform descriptors into one
//! serializable value for the CLI.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::metrics::{SystemMetricsReader, UNKNOWN_RAM_MB};
use crate::platform::{format_megabytes, PlatformInfoProvider};

/// Point-in-time view of device metadata.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceReport {
    pub platform: String,
    pub os_name: String,
    pub os_version: String,
    pub os_release: String,
    pub manufacturer: String,
    pub model: String,
    pub hardware: String,
    pub cpu_arch: String,
    pub cpu_arch_abi: String,
    pub cpu_cores: i64,
    /// 0 when unknown
    pub total_ram_mb: i64,
    pub ram_known: bool,
    pub collected_at: DateTime<Utc>,
}

impl DeviceReport {
    /// Collect a report from a metric reader and a descriptor provider.
    pub fn collect(reader: &SystemMetricsReader, provider: &dyn PlatformInfoProvider) -> Self {
        let total_ram_mb = reader.total_ram_megabytes();

        Self {
            platform: provider.platform_name().to_string(),
            os_name: provider.os_name().to_string(),
            os_version: provider.os_version(),
            os_release: provider.os_release(),
            manufacturer: provider.manufacturer(),
            model: provider.model(),
            hardware: provider.hardware(),
            cpu_arch: provider.cpu_arch(),
            cpu_arch_abi: provider.cpu_arch_abi(),
            cpu_cores: reader.cpu_core_count(),
            total_ram_mb,
            ram_known: total_ram_mb != UNKNOWN_RAM_MB,
            collected_at: Utc::now(),
        }
    }

    /// Human-readable aligned table.
    pub fn render_text(&self) -> String {
        let ram = if self.ram_known {
            format!("{} MB ({})", self.total_ram_mb, format_megabytes(self.total_ram_mb))
        } else {
            "unknown".to_string()
        };

        let rows = [
            ("OS", format!("{} {}", self.os_name, self.os_version)),
            ("Release", self.os_release.clone()),
            ("Manufacturer", self.manufacturer.clone()),
            ("Model", self.model.clone()),
            ("Hardware", self.hardware.clone()),
            ("Arch", self.cpu_arch_abi.clone()),
            ("CPU cores", self.cpu_cores.to_string()),
            ("RAM", ram),
        ];

        let mut out = String::from("Device Info:\n");
        for (label, value) in rows {
            out.push_str(&format!("  {:<13} {}\n", format!("{}:", label), value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ReaderConfig;
    use crate::platform::testing::FakePlatformInfo;
    use std::fs;

    fn reader_with(meminfo: Option<&str>) -> (tempfile::TempDir, SystemMetricsReader) {
        let dir = tempfile::tempdir().unwrap();
        let cpu_dir = dir.path().join("cpu");
        fs::create_dir(&cpu_dir).unwrap();
        for name in ["cpu0", "cpu1"] {
            fs::create_dir(cpu_dir.join(name)).unwrap();
        }
        let meminfo_path = dir.path().join("meminfo");
        if let Some(content) = meminfo {
            fs::write(&meminfo_path, content).unwrap();
        }

        let reader = SystemMetricsReader::new(&ReaderConfig {
            cpu_dir,
            meminfo_path,
            ..Default::default()
        });
        (dir, reader)
    }

    #[test]
    fn test_collect_known_ram() {
        let (_dir, reader) = reader_with(Some("MemTotal:    2048576 kB\n"));
        let report = DeviceReport::collect(&reader, &FakePlatformInfo::default());

        assert_eq!(report.platform, "fake");
        assert_eq!(report.os_name, "FakeOS");
        assert_eq!(report.cpu_cores, 2);
        assert_eq!(report.total_ram_mb, 2000);
        assert!(report.ram_known);
        assert_eq!(report.cpu_arch_abi, "aarch64 (arm64-v8a)");

        let text = report.render_text();
        assert!(text.contains("CPU cores:    2"));
        assert!(text.contains("2000 MB (1.95 GB)"));
    }

    #[test]
    fn test_collect_unknown_ram() {
        let (_dir, reader) = reader_with(None);
        let report = DeviceReport::collect(&reader, &FakePlatformInfo::default());

        assert_eq!(report.total_ram_mb, 0);
        assert!(!report.ram_known);
        assert!(report.render_text().contains("RAM:          unknown"));
    }

    #[test]
    fn test_report_serializes() {
        let (_dir, reader) = reader_with(Some("MemTotal:    2048576 kB\n"));
        let report = DeviceReport::collect(&reader, &FakePlatformInfo::default());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["cpu_cores"], 2);
        assert_eq!(value["total_ram_mb"], 2000);
        assert_eq!(value["manufacturer"], "Acme");
        assert!(value["collected_at"].is_string());
    }
}
